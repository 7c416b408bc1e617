//! Goal display formatting

use crate::models::Goal;

/// Render a text progress bar for a fraction in `[0, 1]`
pub fn format_progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format one goal as a card line
pub fn format_goal_row(goal: &Goal, currency_symbol: &str, bar_width: usize) -> String {
    let current = goal.current.format_with_symbol(currency_symbol);

    match goal.target {
        Some(target) => {
            let status = if goal.is_reached() { "  reached" } else { "" };
            format!(
                "{}: {} / {} {} {:.0}%{}",
                goal.name,
                current,
                target.format_with_symbol(currency_symbol),
                format_progress_bar(goal.progress_fraction(), bar_width),
                goal.progress_fraction() * 100.0,
                status
            )
        }
        None => format!("{}: {} (no target)", goal.name, current),
    }
}

/// Format all goals
pub fn format_goal_list(goals: &[Goal], currency_symbol: &str, bar_width: usize) -> String {
    if goals.is_empty() {
        return "No goals yet.\n".to_string();
    }

    goals
        .iter()
        .map(|g| format_goal_row(g, currency_symbol, bar_width) + "\n")
        .collect()
}

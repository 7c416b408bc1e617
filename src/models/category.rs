//! Category table
//!
//! Categories are free-text labels, but the presentation layer offers a
//! fixed list per transaction kind. The list lives here as data so every
//! front end queries the same table.

use super::transaction::TransactionKind;

/// Category used for goal-funding entries
///
/// An income entry submitted with this category is a request to move money
/// from the balance into a goal; the engine records it as an expense.
pub const GOAL_FUNDING_CATEGORY: &str = "Adicionar à Meta";

/// Catch-all category available for both kinds
pub const OTHER_CATEGORY: &str = "Outros";

const INCOME_CATEGORIES: &[&str] = &[
    "Salário",
    "Empréstimo",
    GOAL_FUNDING_CATEGORY,
    OTHER_CATEGORY,
];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Aluguel",
    "Alimentação",
    "Internet",
    "Conta de água",
    "Conta de luz",
    "Compras",
    OTHER_CATEGORY,
];

/// Categories offered for a transaction kind, in display order
pub fn allowed_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Check whether a category is the goal-funding marker
pub fn is_goal_funding(category: &str) -> bool {
    category.trim() == GOAL_FUNDING_CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_categories() {
        let cats = allowed_categories(TransactionKind::Income);
        assert_eq!(cats, &["Salário", "Empréstimo", "Adicionar à Meta", "Outros"]);
    }

    #[test]
    fn test_expense_categories() {
        let cats = allowed_categories(TransactionKind::Expense);
        assert!(cats.contains(&"Aluguel"));
        assert!(cats.contains(&"Conta de luz"));
        assert!(!cats.contains(&GOAL_FUNDING_CATEGORY));
        assert_eq!(cats.last(), Some(&OTHER_CATEGORY));
    }

    #[test]
    fn test_is_goal_funding() {
        assert!(is_goal_funding("Adicionar à Meta"));
        assert!(is_goal_funding(" Adicionar à Meta "));
        assert!(!is_goal_funding("Salário"));
    }
}

//! Goal repository for delimited text storage
//!
//! Line layout: `name;target;current`, with the literal `null` as target
//! for open-ended goals.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::models::{Goal, Money};

use super::delimited::{parse_records, DelimitedRecord};
use super::file_io::{read_lines, write_lines_atomic};

/// Target token for goals without a target
const NO_TARGET: &str = "null";

impl DelimitedRecord for Goal {
    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [name, target, current] = fields else {
            return Err(format!("expected 3 fields, found {}", fields.len()));
        };

        let target = if *target == NO_TARGET {
            None
        } else {
            Some(parse_non_negative(target, "target")?)
        };
        let current = parse_non_negative(current, "current")?;

        Ok(Goal {
            name: name.to_string(),
            target,
            current,
        })
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.target
                .map(|t| t.to_string())
                .unwrap_or_else(|| NO_TARGET.to_string()),
            self.current.to_string(),
        ]
    }
}

fn parse_non_negative(s: &str, field: &str) -> Result<Money, String> {
    let amount = Money::parse(s).map_err(|e| format!("{}: {}", field, e))?;
    if amount.is_negative() {
        return Err(format!("{}: negative amount {}", field, amount));
    }
    Ok(amount)
}

/// Repository for goal persistence
#[derive(Debug, Clone)]
pub struct GoalRepository {
    path: PathBuf,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load goals, failing on unreadable files or malformed lines
    pub fn try_load(&self) -> LedgerResult<Vec<Goal>> {
        match read_lines(&self.path)? {
            Some(lines) => parse_records(&self.path, &lines),
            None => Ok(Vec::new()),
        }
    }

    /// Load goals, never failing
    pub fn load(&self) -> Vec<Goal> {
        match self.try_load() {
            Ok(goals) => {
                debug!(path = %self.path.display(), count = goals.len(), "loaded goals");
                goals
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding goals file contents"
                );
                Vec::new()
            }
        }
    }

    pub fn save(&self, goals: &[Goal]) -> LedgerResult<()> {
        write_lines_atomic(&self.path, goals.iter().map(|g| g.to_line()))?;
        debug!(path = %self.path.display(), count = goals.len(), "saved goals");
        Ok(())
    }
}

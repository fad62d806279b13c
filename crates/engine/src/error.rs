//! Arrangement errors
//!
//! Constraint violations carry structured fields (group, occupancies, the
//! minimum in force) so callers can render or serialize them; `Display`
//! produces the human-readable message with remediation suggestions.

use serde::Serialize;
use std::fmt;

/// A group's tables cannot satisfy the minimum-occupancy rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArrangeError {
    /// A group produced a single table below the minimum; there is no
    /// neighboring table to redistribute with.
    GroupBelowMinimum {
        group: String,
        occupancy: u32,
        minimum: u32,
    },
    /// The last two tables of a group together cannot reach twice the
    /// minimum, so even redistribution leaves an undersized table.
    RedistributionFailed {
        group: String,
        combined_occupancy: u32,
        required: u32,
    },
}

impl ArrangeError {
    pub fn group(&self) -> &str {
        match self {
            ArrangeError::GroupBelowMinimum { group, .. } => group,
            ArrangeError::RedistributionFailed { group, .. } => group,
        }
    }

    fn suggestions(&self) -> &'static [&'static str] {
        match self {
            ArrangeError::GroupBelowMinimum { .. } => &[
                "Use a smaller table size",
                "Combine this group with another",
                "Add more guests to the group",
            ],
            ArrangeError::RedistributionFailed { .. } => &[
                "Use a smaller table size",
                "Allow mixing sides or sub-sides",
                "Add more guests to the group",
            ],
        }
    }
}

impl fmt::Display for ArrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrangeError::GroupBelowMinimum {
                group,
                occupancy,
                minimum,
            } => writeln!(
                f,
                "Cannot seat group '{}': its only table has {} guests, minimum is {}.",
                group, occupancy, minimum
            )?,
            ArrangeError::RedistributionFailed {
                group,
                combined_occupancy,
                required,
            } => writeln!(
                f,
                "Cannot seat group '{}': the last two tables hold {} guests together, \
                 but {} are needed to keep both above the minimum.",
                group, combined_occupancy, required
            )?,
        }
        write!(f, "Suggestions:")?;
        for suggestion in self.suggestions() {
            write!(f, "\n  - {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ArrangeError {}

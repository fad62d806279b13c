//! Arrangement configuration
//!
//! The assignment rules varied across versions of this tool (parents split
//! by default vs. kept together, minimum-occupancy check on or off), so
//! everything that varied is an explicit option here rather than a
//! hard-coded rule.

use serde::{Deserialize, Serialize};

use crate::guest::ParentGroups;

/// How a parent family group should be seated when it is too large for a
/// single regular table but fits a knight table (total in 13..=22).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentPreference {
    /// Split across regular tables
    #[default]
    Separate,
    /// Keep together where the tier rules allow; packs like Separate when
    /// the group exceeds one table
    Together,
    /// Seat the whole group at one knight table
    Knight,
}

impl ParentPreference {
    /// Parse a CLI/config value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "separate" => Some(ParentPreference::Separate),
            "together" => Some(ParentPreference::Together),
            "knight" => Some(ParentPreference::Knight),
            _ => None,
        }
    }
}

/// Caller decision for one oversized non-parent group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OversizedAction {
    /// Default greedy split across regular tables
    Split,
    /// Seat the whole group at a single knight table
    ForceKnightTable,
}

/// External input overriding default packing for one relationship group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OversizedDecision {
    pub group: String,
    pub action: OversizedAction,
}

/// Full configuration for one arrangement run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangeOptions {
    /// Seats per regular table
    pub table_size: u32,
    /// Names of the two parent groups in the guest list
    pub parents: ParentGroups,
    pub father_preference: ParentPreference,
    pub mother_preference: ParentPreference,
    /// Group to carve knight tables from before regular packing
    pub knight_group: Option<String>,
    /// Cap on carved knight tables, as a seat budget of `n * 22`
    pub max_knight_tables: u32,
    /// Caller decisions for oversized groups
    pub oversized_decisions: Vec<OversizedDecision>,
    /// Run the minimum-occupancy repair pass
    pub enforce_minimum: bool,
}

impl Default for ArrangeOptions {
    fn default() -> Self {
        Self {
            table_size: 10,
            parents: ParentGroups::default(),
            father_preference: ParentPreference::Separate,
            mother_preference: ParentPreference::Separate,
            knight_group: None,
            max_knight_tables: 0,
            oversized_decisions: Vec::new(),
            enforce_minimum: true,
        }
    }
}

impl ArrangeOptions {
    pub fn with_table_size(table_size: u32) -> Self {
        Self {
            table_size,
            ..Self::default()
        }
    }

    /// The decided action for a group, if the caller supplied one.
    pub fn decision_for(&self, group: &str) -> Option<OversizedAction> {
        self.oversized_decisions
            .iter()
            .find(|d| d.group == group)
            .map(|d| d.action)
    }
}

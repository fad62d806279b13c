//! Oversized-group detection
//!
//! Scans the non-parent relationship groups and reports any whose total
//! occupancy exceeds the regular table size. The report is surfaced to the
//! caller so a decision (split vs. force a knight table) can be collected
//! before packing; detection itself never alters the guest list.

use serde::Serialize;

use crate::guest::{group_keys, Guest, ParentGroups};

/// One group that will not fit a single regular table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OversizedGroup {
    pub group: String,
    /// Total occupancy (sum of party sizes)
    pub total: u32,
    /// Member names, input order
    pub names: Vec<String>,
}

/// Report every non-parent group whose total occupancy exceeds
/// `table_size`, in first-appearance order of the group key.
pub fn detect_oversized_groups(
    guests: &[Guest],
    table_size: u32,
    parents: &ParentGroups,
) -> Vec<OversizedGroup> {
    let mut report = Vec::new();

    for key in group_keys(guests) {
        if parents.contains(&key) {
            continue;
        }

        let members: Vec<&Guest> = guests.iter().filter(|g| g.group == key).collect();
        let total: u32 = members.iter().map(|g| g.party_size).sum();

        if total > table_size {
            report.push(OversizedGroup {
                group: key,
                total,
                names: members.iter().map(|g| g.name.clone()).collect(),
            });
        }
    }

    report
}

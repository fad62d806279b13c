//! Per-side orchestration
//!
//! `arrange_seating` is the engine entry point: it splits the guest list by
//! side and runs each side through the full pipeline —
//!
//! 1. parent-group seating (father's family, then mother's)
//! 2. knight-table extraction for the designated group
//! 3. oversized-group detection, surfaced to the caller
//! 4. greedy packing per remaining group, honoring force-knight decisions
//! 5. minimum-occupancy repair (when enabled)
//!
//! The sides are independent: a constraint violation aborts only its own
//! side, leaving the other side's tables intact. The whole computation is a
//! pure function of (guest list, options) — same input, same output.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ArrangeError;
use crate::guest::{group_keys, total_occupancy, Guest, Side};
use crate::knight::extract_with_sequencer;
use crate::options::{ArrangeOptions, OversizedAction};
use crate::oversized::{detect_oversized_groups, OversizedGroup};
use crate::packer::pack_group;
use crate::parents::seat_parent_group;
use crate::repair::repair_group;
use crate::table::{LabelSequencer, Table, TableKind, KNIGHT_TABLE_SEATS};

/// Result of one side's pipeline. `tables` is `None` when the pipeline
/// aborted; `errors` then explains why. `pending_oversized` lists detected
/// oversized groups the caller has not decided on yet — they were packed
/// with the default greedy split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideOutcome {
    pub side: Side,
    pub tables: Option<Vec<Table>>,
    pub errors: Vec<ArrangeError>,
    pub pending_oversized: Vec<OversizedGroup>,
}

impl SideOutcome {
    pub fn is_ok(&self) -> bool {
        self.tables.is_some()
    }
}

/// Both sides' outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub bride: SideOutcome,
    pub groom: SideOutcome,
}

impl Arrangement {
    pub fn is_ok(&self) -> bool {
        self.bride.is_ok() && self.groom.is_ok()
    }

    /// All tables from both sides, bride first. Sides that aborted
    /// contribute nothing.
    pub fn all_tables(&self) -> Vec<&Table> {
        self.bride
            .tables
            .iter()
            .chain(self.groom.tables.iter())
            .flatten()
            .collect()
    }

    /// All errors from both sides.
    pub fn errors(&self) -> Vec<&ArrangeError> {
        self.bride.errors.iter().chain(self.groom.errors.iter()).collect()
    }

    /// Detected oversized groups still awaiting a caller decision.
    pub fn pending_oversized(&self) -> Vec<&OversizedGroup> {
        self.bride
            .pending_oversized
            .iter()
            .chain(self.groom.pending_oversized.iter())
            .collect()
    }

    pub fn outcome(&self, side: Side) -> &SideOutcome {
        match side {
            Side::Bride => &self.bride,
            Side::Groom => &self.groom,
        }
    }
}

impl Serialize for Arrangement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Arrangement", 2)?;
        state.serialize_field("bride", &self.bride)?;
        state.serialize_field("groom", &self.groom)?;
        state.end()
    }
}

/// Assign every guest to a table under the configured rules.
pub fn arrange_seating(guests: Vec<Guest>, options: &ArrangeOptions) -> Arrangement {
    let (bride, groom): (Vec<Guest>, Vec<Guest>) =
        guests.into_iter().partition(|g| g.side == Side::Bride);

    Arrangement {
        bride: arrange_side(bride, Side::Bride, options),
        groom: arrange_side(groom, Side::Groom, options),
    }
}

fn arrange_side(guests: Vec<Guest>, side: Side, options: &ArrangeOptions) -> SideOutcome {
    let mut seq = LabelSequencer::new();
    let mut tables: Vec<Table> = Vec::new();

    // Parent groups first — father's family, then mother's.
    let (father, rest): (Vec<Guest>, Vec<Guest>) = guests
        .into_iter()
        .partition(|g| g.group == options.parents.father);
    let (mother, mut rest): (Vec<Guest>, Vec<Guest>) =
        rest.into_iter().partition(|g| g.group == options.parents.mother);

    tables.extend(seat_parent_group(
        father,
        &options.parents.father,
        options.father_preference,
        options.table_size,
        &mut seq,
    ));
    tables.extend(seat_parent_group(
        mother,
        &options.parents.mother,
        options.mother_preference,
        options.table_size,
        &mut seq,
    ));

    // Knight extraction for the designated group, if any.
    if let Some(knight_group) = options.knight_group.as_deref() {
        let (knight_tables, remaining) =
            extract_with_sequencer(rest, knight_group, options.max_knight_tables, &mut seq);
        tables.extend(knight_tables);
        rest = remaining;
    }

    // Surface oversized groups the caller has not decided on. They still
    // pack greedily below.
    let pending_oversized: Vec<OversizedGroup> =
        detect_oversized_groups(&rest, options.table_size, &options.parents)
            .into_iter()
            .filter(|o| options.decision_for(&o.group).is_none())
            .collect();

    // Pack the remaining groups in first-appearance order.
    for key in group_keys(&rest) {
        let members: Vec<Guest> = rest.iter().filter(|g| g.group == key).cloned().collect();
        let total = total_occupancy(&members);

        let forced_knight = options.decision_for(&key) == Some(OversizedAction::ForceKnightTable)
            && total <= KNIGHT_TABLE_SEATS;

        if forced_knight {
            tables.push(Table::close(seq.next_knight(), TableKind::Knight, &key, members));
            continue;
        }

        let packed = pack_group(members, &key, options.table_size, &mut seq);
        let group_tables = if options.enforce_minimum {
            match repair_group(packed, options.table_size) {
                Ok(repaired) => repaired,
                Err(err) => {
                    // Abort this side only; the other side is unaffected.
                    return SideOutcome {
                        side,
                        tables: None,
                        errors: vec![err],
                        pending_oversized,
                    };
                }
            }
        } else {
            packed
        };
        tables.extend(group_tables);
    }

    SideOutcome {
        side,
        tables: Some(tables),
        errors: Vec::new(),
        pending_oversized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::RawGuest;
    use crate::options::{OversizedDecision, ParentPreference};
    use crate::table::TableLabel;

    fn guest(row: usize, name: &str, group: &str, party: u32, side: Side) -> Guest {
        RawGuest {
            name: name.to_string(),
            group: group.to_string(),
            party_size: Some(party.to_string()),
            side: Some(side),
            sub_side: None,
        }
        .normalize(row, side)
    }

    fn bride(row: usize, name: &str, group: &str, party: u32) -> Guest {
        guest(row, name, group, party, Side::Bride)
    }

    /// Every guest appears in exactly one table; seats are conserved.
    fn assert_partition(guests: &[Guest], arrangement: &Arrangement) {
        let mut seated: Vec<usize> = arrangement
            .all_tables()
            .iter()
            .flat_map(|t| t.guests.iter().map(|g| g.row))
            .collect();
        seated.sort_unstable();

        let mut expected: Vec<usize> = guests.iter().map(|g| g.row).collect();
        expected.sort_unstable();
        assert_eq!(seated, expected, "every guest must sit at exactly one table");

        let seats: u32 = arrangement.all_tables().iter().map(|t| t.occupancy).sum();
        assert_eq!(seats, total_occupancy(guests));
    }

    #[test]
    fn test_uncle_scenario_single_table() {
        // A(3), B(2), C(4) in "Uncle" on size 10: one table of 9
        let guests = vec![
            bride(0, "A", "Uncle", 3),
            bride(1, "B", "Uncle", 2),
            bride(2, "C", "Uncle", 4),
        ];
        let options = ArrangeOptions {
            enforce_minimum: false,
            ..ArrangeOptions::with_table_size(10)
        };

        let arrangement = arrange_seating(guests.clone(), &options);

        assert!(arrangement.is_ok());
        assert_partition(&guests, &arrangement);
        let tables = arrangement.bride.tables.as_ref().unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].occupancy, 9);
    }

    #[test]
    fn test_fathers_family_15_knight_preference() {
        let guests = vec![
            bride(0, "A", "Father's family", 7),
            bride(1, "B", "Father's family", 8),
        ];
        let options = ArrangeOptions {
            father_preference: ParentPreference::Knight,
            ..ArrangeOptions::with_table_size(10)
        };

        let arrangement = arrange_seating(guests, &options);

        let tables = arrangement.bride.tables.as_ref().unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].kind, TableKind::Knight);
        assert_eq!(tables[0].occupancy, 15);
        assert_eq!(tables[0].label, TableLabel::Knight(1));
    }

    #[test]
    fn test_group_of_25_packs_into_three_capped_tables() {
        let guests: Vec<Guest> = (0..5).map(|i| bride(i, &format!("W{}", i), "Work", 5)).collect();
        let options = ArrangeOptions {
            enforce_minimum: false,
            ..ArrangeOptions::with_table_size(10)
        };

        let arrangement = arrange_seating(guests.clone(), &options);

        assert_partition(&guests, &arrangement);
        let tables = arrangement.bride.tables.as_ref().unwrap();
        assert_eq!(tables.len(), 3);
        assert!(tables.iter().all(|t| t.occupancy <= 10));
        assert_eq!(tables.iter().map(|t| t.occupancy).sum::<u32>(), 25);
    }

    #[test]
    fn test_minimum_violation_aborts_only_its_side() {
        // Bride side: Work group 9 + 3 (combined 12 < 16) fails the
        // minimum rule. Groom side is healthy and must stay intact.
        let guests = vec![
            bride(0, "A", "Work", 9),
            bride(1, "B", "Work", 3),
            guest(2, "C", "Army", 9, Side::Groom),
        ];
        let options = ArrangeOptions::with_table_size(10);

        let arrangement = arrange_seating(guests, &options);

        assert!(!arrangement.bride.is_ok());
        assert_eq!(arrangement.bride.errors.len(), 1);
        assert_eq!(arrangement.bride.errors[0].group(), "Work");
        assert!(arrangement.groom.is_ok());
        assert_eq!(arrangement.groom.tables.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_force_knight_decision_overrides_split() {
        // Army totals 14 > 10; the decision forces one knight table
        let guests = vec![
            bride(0, "A", "Army", 7),
            bride(1, "B", "Army", 7),
        ];
        let options = ArrangeOptions {
            oversized_decisions: vec![OversizedDecision {
                group: "Army".to_string(),
                action: OversizedAction::ForceKnightTable,
            }],
            enforce_minimum: false,
            ..ArrangeOptions::with_table_size(10)
        };

        let arrangement = arrange_seating(guests, &options);

        let tables = arrangement.bride.tables.as_ref().unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].kind, TableKind::Knight);
        assert_eq!(tables[0].occupancy, 14);
        // Decided groups are not pending
        assert!(arrangement.bride.pending_oversized.is_empty());
    }

    #[test]
    fn test_undecided_oversized_group_is_surfaced_and_split() {
        let guests = vec![
            bride(0, "A", "Army", 8),
            bride(1, "B", "Army", 8),
        ];
        let options = ArrangeOptions {
            enforce_minimum: false,
            ..ArrangeOptions::with_table_size(10)
        };

        let arrangement = arrange_seating(guests, &options);

        assert_eq!(arrangement.bride.pending_oversized.len(), 1);
        assert_eq!(arrangement.bride.pending_oversized[0].group, "Army");
        // Default behavior: greedy split
        let tables = arrangement.bride.tables.as_ref().unwrap();
        assert_eq!(tables.len(), 2);
        assert!(tables.iter().all(|t| t.kind == TableKind::Regular));
    }

    #[test]
    fn test_knight_extraction_runs_before_packing() {
        let mut guests: Vec<Guest> =
            (0..4).map(|i| bride(i, &format!("S{}", i), "Army", 10)).collect();
        guests.push(bride(4, "W", "Work", 9));

        let options = ArrangeOptions {
            knight_group: Some("Army".to_string()),
            max_knight_tables: 1,
            enforce_minimum: false,
            ..ArrangeOptions::with_table_size(10)
        };

        let arrangement = arrange_seating(guests.clone(), &options);

        assert_partition(&guests, &arrangement);
        let tables = arrangement.bride.tables.as_ref().unwrap();
        // One carved knight table (20 seats within the 22-seat budget),
        // the remaining two Army parties packed as regulars, plus Work
        let knights: Vec<_> = tables.iter().filter(|t| t.kind == TableKind::Knight).collect();
        assert_eq!(knights.len(), 1);
        assert_eq!(knights[0].occupancy, 20);
        let regulars: Vec<_> = tables.iter().filter(|t| t.kind == TableKind::Regular).collect();
        assert_eq!(regulars.len(), 3);
    }

    #[test]
    fn test_regular_and_knight_numbering_are_separate() {
        let guests = vec![
            bride(0, "F1", "Father's family", 15),
            bride(1, "U1", "Uncle", 9),
            bride(2, "A1", "Army", 9),
        ];
        let options = ArrangeOptions {
            father_preference: ParentPreference::Knight,
            enforce_minimum: false,
            ..ArrangeOptions::with_table_size(10)
        };

        let arrangement = arrange_seating(guests, &options);
        let tables = arrangement.bride.tables.as_ref().unwrap();

        let labels: Vec<String> = tables.iter().map(|t| t.label.to_string()).collect();
        assert_eq!(labels, vec!["Knight 1", "1", "2"]);
    }

    #[test]
    fn test_arrangement_is_deterministic() {
        let guests: Vec<Guest> = (0..30)
            .map(|i| {
                let group = ["Uncle", "Army", "Work", "Father's family"][i % 4];
                let side = if i % 2 == 0 { Side::Bride } else { Side::Groom };
                guest(i, &format!("G{}", i), group, (i as u32 % 4) + 1, side)
            })
            .collect();
        let options = ArrangeOptions {
            knight_group: Some("Army".to_string()),
            max_knight_tables: 1,
            enforce_minimum: false,
            ..ArrangeOptions::with_table_size(10)
        };

        let first = arrange_seating(guests.clone(), &options);
        let second = arrange_seating(guests, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_small_parent_group_single_table_any_size() {
        for table_size in [10, 11, 12] {
            let guests = vec![
                bride(0, "A", "Mother's family", 6),
                bride(1, "B", "Mother's family", 6),
            ];
            let options = ArrangeOptions::with_table_size(table_size);
            let arrangement = arrange_seating(guests, &options);

            let tables = arrangement.bride.tables.as_ref().unwrap();
            assert_eq!(tables.len(), 1, "table_size {}", table_size);
            assert_eq!(tables[0].occupancy, 12);
        }
    }

    #[test]
    fn test_empty_guest_list() {
        let arrangement = arrange_seating(Vec::new(), &ArrangeOptions::default());
        assert!(arrangement.is_ok());
        assert!(arrangement.all_tables().is_empty());
    }
}

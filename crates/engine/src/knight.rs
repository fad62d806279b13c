//! Knight-table extraction
//!
//! Before regular packing, a bounded number of 22-seat knight tables can be
//! carved out of one named relationship group. Guests are batched in input
//! order; a batch closes when the next guest would bring it to 22 seats or
//! beyond, so no carved table ever exceeds the knight capacity. Extraction
//! stops once the seat budget (`max_tables * 22`) would be exceeded — the
//! guests left over fall through to regular packing.
//!
//! Consumed guests are removed from the remainder by row identity, not by
//! name: guest lists contain duplicate names.

use std::collections::HashSet;

use crate::guest::Guest;
use crate::table::{LabelSequencer, Table, TableKind, KNIGHT_TABLE_SEATS};

/// Carve knight tables for `group` out of `guests`.
///
/// Returns the carved tables (numbered from "Knight 1") and the guest list
/// with the consumed guests removed. A no-op when `group` is empty or
/// `max_tables` is zero.
pub fn extract_knight_tables(
    guests: Vec<Guest>,
    group: &str,
    max_tables: u32,
) -> (Vec<Table>, Vec<Guest>) {
    let mut seq = LabelSequencer::new();
    extract_with_sequencer(guests, group, max_tables, &mut seq)
}

/// Extraction with caller-owned numbering, for use inside a side pass
/// where knight labels are shared with parent-group knight tables.
pub(crate) fn extract_with_sequencer(
    guests: Vec<Guest>,
    group: &str,
    max_tables: u32,
    seq: &mut LabelSequencer,
) -> (Vec<Table>, Vec<Guest>) {
    if group.is_empty() || max_tables == 0 {
        return (Vec::new(), guests);
    }

    let seat_budget = max_tables.saturating_mul(KNIGHT_TABLE_SEATS);
    let mut tables = Vec::new();
    let mut batch: Vec<Guest> = Vec::new();
    let mut batch_occupancy = 0u32;
    let mut seats_used = 0u32;

    for guest in guests.iter().filter(|g| g.group == group) {
        // Budget is in seats, checked before consuming the guest; once it
        // would be exceeded, everything remaining falls through to regular
        // packing.
        if seats_used + guest.party_size > seat_budget {
            break;
        }

        if !batch.is_empty() && batch_occupancy + guest.party_size >= KNIGHT_TABLE_SEATS {
            tables.push(Table::close(
                seq.next_knight(),
                TableKind::Knight,
                group,
                std::mem::take(&mut batch),
            ));
            batch_occupancy = 0;
        }

        batch_occupancy += guest.party_size;
        seats_used += guest.party_size;
        batch.push(guest.clone());
    }

    if !batch.is_empty() {
        tables.push(Table::close(
            seq.next_knight(),
            TableKind::Knight,
            group,
            batch,
        ));
    }

    let consumed: HashSet<usize> = tables
        .iter()
        .flat_map(|t| t.guests.iter().map(|g| g.row))
        .collect();
    let remaining = guests
        .into_iter()
        .filter(|g| !consumed.contains(&g.row))
        .collect();

    (tables, remaining)
}

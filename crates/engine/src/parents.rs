//! Parent-group seating
//!
//! The two parent family groups get size-tiered handling instead of
//! generic packing:
//!
//! - total ≤ 12: one regular table with everyone, whatever the configured
//!   table size — a small family cluster is never fragmented.
//! - 12 < total ≤ 22 with the Knight preference: one knight table.
//! - anything else: standard greedy packing at the configured size.

use crate::guest::{total_occupancy, Guest};
use crate::options::ParentPreference;
use crate::packer::pack_group;
use crate::table::{LabelSequencer, Table, TableKind, KNIGHT_TABLE_SEATS};

/// Largest parent group seated at a single regular table regardless of the
/// configured table size.
pub const PARENT_SINGLE_TABLE_MAX: u32 = 12;

/// Seat one parent group. `guests` must already be filtered to the group.
pub fn seat_parent_group(
    guests: Vec<Guest>,
    group: &str,
    preference: ParentPreference,
    table_size: u32,
    seq: &mut LabelSequencer,
) -> Vec<Table> {
    if guests.is_empty() {
        return Vec::new();
    }

    let total = total_occupancy(&guests);

    if total <= PARENT_SINGLE_TABLE_MAX {
        vec![Table::close(
            seq.next_regular(),
            TableKind::Regular,
            group,
            guests,
        )]
    } else if total <= KNIGHT_TABLE_SEATS && preference == ParentPreference::Knight {
        vec![Table::close(
            seq.next_knight(),
            TableKind::Knight,
            group,
            guests,
        )]
    } else {
        pack_group(guests, group, table_size, seq)
    }
}

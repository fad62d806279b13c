//! Greedy table packing
//!
//! A single left-to-right fold over one group's guests: keep a running
//! batch, close it as a table when the next guest would overflow, start the
//! next batch with that guest. No repacking, no reordering — input order is
//! the seating order, and the fold emits closed `Table` values instead of
//! mutating a shared list.
//!
//! A guest whose party alone exceeds the table size still gets a table: a
//! single-guest table over capacity. The list gave us a party that cannot
//! fit anywhere, and splitting a named party is not this layer's call.

use crate::guest::Guest;
use crate::table::{LabelSequencer, Table, TableKind};

/// Pack one relationship group's guests into regular tables of
/// `table_size` seats. `guests` must already be filtered to one group and
/// in input order.
pub fn pack_group(
    guests: Vec<Guest>,
    group: &str,
    table_size: u32,
    seq: &mut LabelSequencer,
) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut batch: Vec<Guest> = Vec::new();
    let mut occupancy = 0u32;

    for guest in guests {
        if !batch.is_empty() && occupancy + guest.party_size > table_size {
            tables.push(Table::close(
                seq.next_regular(),
                TableKind::Regular,
                group,
                std::mem::take(&mut batch),
            ));
            occupancy = 0;
        }
        occupancy += guest.party_size;
        batch.push(guest);
    }

    if !batch.is_empty() {
        tables.push(Table::close(
            seq.next_regular(),
            TableKind::Regular,
            group,
            batch,
        ));
    }

    tables
}

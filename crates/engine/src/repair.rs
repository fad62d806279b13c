//! Minimum-occupancy repair
//!
//! Greedy packing can strand an undersized final table — three people at a
//! table of ten. This pass inspects the last table of a group and, when it
//! falls below the minimum for the configured table size, merges the last
//! two tables and re-splits them evenly by guest count. When even that
//! cannot lift both above the minimum, the group is unseatable as
//! configured and the pass reports a constraint violation.
//!
//! The re-split divides by guest count, not occupancy: the earlier table
//! gets the first half of the merged list. The resulting pair can be
//! unbalanced by occupancy; that is the established behavior and callers
//! rely on it being stable.

use crate::error::ArrangeError;
use crate::table::Table;

/// Minimum occupancy for the last table of a group, as a function of the
/// regular table size.
pub fn minimum_for(table_size: u32) -> u32 {
    match table_size {
        10 => 8,
        11 => 9,
        12 => 10,
        _ => 8,
    }
}

/// Repair one group's packed tables. Returns the tables unchanged when the
/// final table already meets the minimum.
pub fn repair_group(mut tables: Vec<Table>, table_size: u32) -> Result<Vec<Table>, ArrangeError> {
    let minimum = minimum_for(table_size);

    let Some(last) = tables.last() else {
        return Ok(tables);
    };
    if last.occupancy >= minimum {
        return Ok(tables);
    }

    if tables.len() < 2 {
        let last = &tables[0];
        return Err(ArrangeError::GroupBelowMinimum {
            group: last.group.clone(),
            occupancy: last.occupancy,
            minimum,
        });
    }

    let last = tables.pop().expect("len checked above");
    let prev = tables.pop().expect("len checked above");

    let combined = prev.occupancy + last.occupancy;
    let required = 2 * minimum;
    if combined < required {
        return Err(ArrangeError::RedistributionFailed {
            group: last.group.clone(),
            combined_occupancy: combined,
            required,
        });
    }

    // Even split by guest count; the earlier table takes the first half.
    let mut merged = prev.guests;
    merged.extend(last.guests);
    let back = merged.split_off(merged.len() / 2);

    tables.push(Table::close(prev.label, prev.kind, &prev.group, merged));
    tables.push(Table::close(last.label, last.kind, &last.group, back));

    Ok(tables)
}

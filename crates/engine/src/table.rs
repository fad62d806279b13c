//! Seating tables
//!
//! A `Table` is an assignment output: an ordered set of guests from one
//! relationship group, with a label and a kind. Tables are emitted closed —
//! nothing downstream appends to or reorders an emitted table.
//!
//! Regular and knight tables carry separate monotone numbering sequences
//! within a processing pass: regular tables are "1", "2", … and knight
//! tables are "Knight 1", "Knight 2", ….

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::guest::{total_occupancy, Guest, Side};

/// Seats at a knight table. Larger than any regular table size; used for
/// bulk placement of big family clusters.
pub const KNIGHT_TABLE_SEATS: u32 = 22;

/// Kind of table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Regular,
    Knight,
}

/// Table label: a bare number for regular tables, "Knight N" for knight
/// tables. The two sequences are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLabel {
    Regular(u32),
    Knight(u32),
}

impl fmt::Display for TableLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableLabel::Regular(n) => write!(f, "{}", n),
            TableLabel::Knight(n) => write!(f, "Knight {}", n),
        }
    }
}

// Labels serialize as their display form ("7", "Knight 2") so exported
// JSON matches what lands in the spreadsheet output.
impl Serialize for TableLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hands out the next label in a pass. One sequencer per side pass; the
/// regular and knight counters advance independently.
#[derive(Debug, Default)]
pub struct LabelSequencer {
    regular: u32,
    knight: u32,
}

impl LabelSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_regular(&mut self) -> TableLabel {
        self.regular += 1;
        TableLabel::Regular(self.regular)
    }

    pub fn next_knight(&mut self) -> TableLabel {
        self.knight += 1;
        TableLabel::Knight(self.knight)
    }
}

/// One closed seating table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub label: TableLabel,
    pub kind: TableKind,
    /// Relationship group all guests at this table share
    pub group: String,
    /// Guests in input order
    pub guests: Vec<Guest>,
    /// Sum of party sizes (not guest count)
    pub occupancy: u32,
}

impl Table {
    /// Close a batch of guests into a table. Occupancy is derived from the
    /// guests, never set independently.
    pub fn close(label: TableLabel, kind: TableKind, group: &str, guests: Vec<Guest>) -> Self {
        let occupancy = total_occupancy(&guests);
        Self {
            label,
            kind,
            group: group.to_string(),
            guests,
            occupancy,
        }
    }

    /// Seats this table offers: the configured size for regular tables,
    /// the knight size otherwise.
    pub fn capacity(&self, table_size: u32) -> u32 {
        match self.kind {
            TableKind::Regular => table_size,
            TableKind::Knight => KNIGHT_TABLE_SEATS,
        }
    }

    pub fn side(&self) -> Option<Side> {
        self.guests.first().map(|g| g.side)
    }

    pub fn guest_names(&self) -> Vec<&str> {
        self.guests.iter().map(|g| g.name.as_str()).collect()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Table", 5)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("group", &self.group)?;
        state.serialize_field("guests", &self.guest_names())?;
        state.serialize_field("occupancy", &self.occupancy)?;
        state.end()
    }
}

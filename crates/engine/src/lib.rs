//! Seating engine: pure table-assignment over normalized guest records.

pub mod arrange;
pub mod error;
pub mod guest;
pub mod knight;
pub mod options;
pub mod oversized;
pub mod packer;
pub mod parents;
pub mod repair;
pub mod table;

pub use arrange::{arrange_seating, Arrangement, SideOutcome};
pub use error::ArrangeError;
pub use guest::{Guest, ParentGroups, RawGuest, Side};
pub use knight::extract_knight_tables;
pub use options::{ArrangeOptions, OversizedAction, OversizedDecision, ParentPreference};
pub use oversized::{detect_oversized_groups, OversizedGroup};
pub use table::{Table, TableKind, TableLabel, KNIGHT_TABLE_SEATS};

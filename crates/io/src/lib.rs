// Guest-list ingestion and arrangement export

pub mod csv;
pub mod export;
pub mod header;
pub mod xlsx;

use seatplan_engine::Guest;

/// Result of a guest-list import: the normalized records plus anything the
/// reader worked around (fallback sheet, unparseable party sizes, rows
/// without a side). Warnings never abort an import — structural problems
/// (missing columns, missing side titles) are hard errors instead.
#[derive(Debug, Default)]
pub struct GuestImport {
    pub guests: Vec<Guest>,
    pub warnings: Vec<String>,
}

impl GuestImport {
    pub fn summary(&self) -> String {
        let mut s = format!("Imported {} guests", self.guests.len());
        if !self.warnings.is_empty() {
            s.push_str(&format!(" ({} warnings)", self.warnings.len()));
        }
        s
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

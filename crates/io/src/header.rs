//! Header detection for guest-list spreadsheets
//!
//! Real guest lists come with Hebrew or English headers, sometimes mixed.
//! Each logical column has a set of accepted aliases; matching is exact on
//! the trimmed header text.

/// A logical guest-list column and its accepted header spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Group,
    PartySize,
    SubSide,
    Side,
}

impl Column {
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Name => &["שם מלא", "שם ושם משפחה", "Name", "Full Name"],
            Column::Group => &["קרבה", "Relation", "Relationship", "Group"],
            Column::PartySize => &["מוזמנים", "כמות מוזמנים", "Guests", "Party", "Party Size"],
            Column::SubSide => &["אוזמנים", "SubSide", "Sub Side"],
            Column::Side => &["צד", "Side"],
        }
    }

    /// Canonical name used in error messages.
    pub fn canonical(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Group => "Relation",
            Column::PartySize => "Guests",
            Column::SubSide => "SubSide",
            Column::Side => "Side",
        }
    }

    pub fn matches(&self, header: &str) -> bool {
        let trimmed = header.trim();
        self.aliases().iter().any(|a| *a == trimmed)
    }
}

/// Find the index of a logical column within a header row.
pub fn find_column(headers: &[String], column: Column) -> Option<usize> {
    headers.iter().position(|h| column.matches(h))
}

/// Side title cells marking where each side's column block starts in the
/// two-block sheet layout.
pub const BRIDE_TITLES: &[&str] = &["הצד של הכלה", "Bride Side"];
pub const GROOM_TITLES: &[&str] = &["הצד של החתן", "Groom Side"];

pub fn is_bride_title(cell: &str) -> bool {
    BRIDE_TITLES.iter().any(|t| cell.contains(t))
}

pub fn is_groom_title(cell: &str) -> bool {
    GROOM_TITLES.iter().any(|t| cell.contains(t))
}

//! Guest records and normalization
//!
//! A `Guest` is one row of the uploaded guest list: a named party with a
//! relationship group, a party size, and the wedding side it belongs to.
//! Guests are immutable once built; every downstream stage works on owned
//! or borrowed `Guest` values and never edits them in place.
//!
//! ## Row identity
//!
//! `Guest::row` is the position of the record in the parsed input. It is
//! the identity used when guests are carved out of the list (knight-table
//! extraction) — names are not unique in real guest lists, so removal by
//! name would collide on duplicates.

use serde::{Deserialize, Serialize};

/// Which side of the event a guest belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bride,
    Groom,
}

impl Side {
    /// Parse a side label. Accepts English and the Hebrew labels used in
    /// real guest-list spreadsheets.
    pub fn parse(value: &str) -> Option<Side> {
        match value.trim() {
            "Bride" | "bride" | "כלה" | "צד כלה" | "הצד של הכלה" => Some(Side::Bride),
            "Groom" | "groom" | "חתן" | "צד חתן" | "הצד של החתן" => Some(Side::Groom),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Side::Bride => "Bride",
            Side::Groom => "Groom",
        }
    }
}

/// The two distinguished parent family groups. These receive size-tiered
/// handling and are excluded from oversized-group detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentGroups {
    pub father: String,
    pub mother: String,
}

impl Default for ParentGroups {
    fn default() -> Self {
        Self {
            father: "Father's family".to_string(),
            mother: "Mother's family".to_string(),
        }
    }
}

impl ParentGroups {
    pub fn contains(&self, group: &str) -> bool {
        group == self.father || group == self.mother
    }
}

/// One guest record: a named party occupying `party_size` seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Source row identity (position in the parsed input)
    pub row: usize,
    pub name: String,
    /// Relationship group — the primary grouping key for table assignment
    pub group: String,
    /// Seats this record consumes (a named guest may bring a party)
    pub party_size: u32,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_side: Option<String>,
}

/// A raw guest row as produced by the ingestion layer, before
/// normalization. Party size is still the raw cell text (or absent).
#[derive(Debug, Clone, Default)]
pub struct RawGuest {
    pub name: String,
    pub group: String,
    pub party_size: Option<String>,
    pub side: Option<Side>,
    pub sub_side: Option<String>,
}

impl RawGuest {
    /// Normalize into a `Guest` with the given row identity and side.
    ///
    /// Party size defaults to 1 when the cell is absent, non-numeric, or
    /// below 1 — a row in the list always seats at least one person.
    pub fn normalize(self, row: usize, default_side: Side) -> Guest {
        let party_size = self
            .party_size
            .as_deref()
            .and_then(parse_party_size)
            .unwrap_or(1);

        Guest {
            row,
            name: self.name.trim().to_string(),
            group: self.group.trim().to_string(),
            party_size,
            side: self.side.unwrap_or(default_side),
            sub_side: self
                .sub_side
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Parse a party-size cell. Accepts integers and float-formatted integers
/// ("4.0" — numeric cells read back from Excel often carry a decimal).
fn parse_party_size(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = if let Ok(n) = trimmed.parse::<u32>() {
        n
    } else {
        let f = trimmed.parse::<f64>().ok()?;
        if !f.is_finite() || f.fract() != 0.0 || f < 0.0 {
            return None;
        }
        f as u32
    };
    if value >= 1 { Some(value) } else { None }
}

/// Sum of party sizes over a set of guests.
pub fn total_occupancy(guests: &[Guest]) -> u32 {
    guests.iter().map(|g| g.party_size).sum()
}

/// Relationship group keys in first-appearance order.
///
/// The original input order is significant (packing is order-preserving),
/// so group iteration must not reorder by key.
pub fn group_keys(guests: &[Guest]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for guest in guests {
        if !keys.iter().any(|k| k == &guest.group) {
            keys.push(guest.group.clone());
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, group: &str, party: Option<&str>) -> RawGuest {
        RawGuest {
            name: name.to_string(),
            group: group.to_string(),
            party_size: party.map(|p| p.to_string()),
            side: None,
            sub_side: None,
        }
    }

    #[test]
    fn test_side_parse_english_and_hebrew() {
        assert_eq!(Side::parse("Bride"), Some(Side::Bride));
        assert_eq!(Side::parse("groom"), Some(Side::Groom));
        assert_eq!(Side::parse("הצד של הכלה"), Some(Side::Bride));
        assert_eq!(Side::parse("הצד של החתן"), Some(Side::Groom));
        assert_eq!(Side::parse("  חתן  "), Some(Side::Groom));
        assert_eq!(Side::parse("neither"), None);
    }

    #[test]
    fn test_party_size_defaults_to_one() {
        // Absent
        let g = raw("A", "Uncle", None).normalize(0, Side::Bride);
        assert_eq!(g.party_size, 1);

        // Non-numeric
        let g = raw("A", "Uncle", Some("tbd")).normalize(0, Side::Bride);
        assert_eq!(g.party_size, 1);

        // Zero is invalid — a listed guest occupies at least one seat
        let g = raw("A", "Uncle", Some("0")).normalize(0, Side::Bride);
        assert_eq!(g.party_size, 1);

        // Empty string
        let g = raw("A", "Uncle", Some("  ")).normalize(0, Side::Bride);
        assert_eq!(g.party_size, 1);
    }

    #[test]
    fn test_party_size_parses_integers_and_excel_floats() {
        let g = raw("A", "Uncle", Some("4")).normalize(0, Side::Bride);
        assert_eq!(g.party_size, 4);

        // Numeric Excel cells read back as "4.0"
        let g = raw("A", "Uncle", Some("4.0")).normalize(0, Side::Bride);
        assert_eq!(g.party_size, 4);

        // True fractions are not party sizes
        let g = raw("A", "Uncle", Some("2.5")).normalize(0, Side::Bride);
        assert_eq!(g.party_size, 1);
    }

    #[test]
    fn test_normalize_trims_and_drops_empty_sub_side() {
        let mut r = raw("  Dana Levi  ", "  Aunt ", Some("2"));
        r.sub_side = Some("   ".to_string());
        let g = r.normalize(3, Side::Groom);
        assert_eq!(g.name, "Dana Levi");
        assert_eq!(g.group, "Aunt");
        assert_eq!(g.row, 3);
        assert_eq!(g.side, Side::Groom);
        assert_eq!(g.sub_side, None);
    }

    #[test]
    fn test_group_keys_first_appearance_order() {
        let guests: Vec<Guest> = [("a", "Uncle"), ("b", "Army"), ("c", "Uncle"), ("d", "Work")]
            .iter()
            .enumerate()
            .map(|(i, (n, grp))| raw(n, grp, None).normalize(i, Side::Bride))
            .collect();

        assert_eq!(group_keys(&guests), vec!["Uncle", "Army", "Work"]);
    }

    #[test]
    fn test_parent_groups_contains() {
        let parents = ParentGroups::default();
        assert!(parents.contains("Father's family"));
        assert!(parents.contains("Mother's family"));
        assert!(!parents.contains("Uncle"));
    }
}

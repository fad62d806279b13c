// Excel guest-list import (xlsx, xls, xlsb, ods)
//
// The expected sheet layout is the two-block form the planning
// spreadsheets use: a title row with "הצד של הכלה" somewhere to the left
// of "הצד של החתן" (or the English equivalents), the column headers on the
// row below, and guest rows after that. The bride block spans from the
// bride title column up to the groom title column; the groom block runs
// from there to the end of the row.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use seatplan_engine::{RawGuest, Side};

use crate::header::{find_column, is_bride_title, is_groom_title, Column};
use crate::GuestImport;

/// Preferred sheet name ("guest list"); falls back to the first sheet.
pub const GUEST_SHEET_NAME: &str = "רשימת מוזמנים";

/// Import a guest list from an Excel file.
pub fn import(path: &Path) -> Result<GuestImport, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("Failed to open Excel file: {}", e))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err("Excel file contains no sheets".to_string());
    }

    let mut warnings = Vec::new();
    let sheet_name = if sheet_names.iter().any(|n| n == GUEST_SHEET_NAME) {
        GUEST_SHEET_NAME.to_string()
    } else {
        warnings.push(format!(
            "Sheet '{}' not found, reading '{}' instead",
            GUEST_SHEET_NAME, sheet_names[0]
        ));
        sheet_names[0].clone()
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| format!("Failed to read sheet '{}': {}", sheet_name, e))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    import_rows(&rows, warnings)
}

/// Import from already-extracted cell text. Shared by the Excel and CSV
/// two-block readers.
pub(crate) fn import_rows(
    rows: &[Vec<String>],
    mut warnings: Vec<String>,
) -> Result<GuestImport, String> {
    let (title_row, bride_col, groom_col) = locate_side_titles(rows)?;

    let header_row = title_row + 1;
    if header_row >= rows.len() {
        return Err("No header row below the side titles".to_string());
    }

    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let headers = &rows[header_row];

    let bride_block = Block::resolve(headers, bride_col, groom_col, Side::Bride)?;
    let groom_block = Block::resolve(headers, groom_col, width, Side::Groom)?;

    let mut guests = Vec::new();
    for row in &rows[header_row + 1..] {
        for block in [&bride_block, &groom_block] {
            if let Some(raw) = block.read_row(row, &mut warnings) {
                let side = block.side;
                guests.push(raw.normalize(guests.len(), side));
            }
        }
    }

    Ok(GuestImport { guests, warnings })
}

/// Find the title row and the column where each side's block starts.
fn locate_side_titles(rows: &[Vec<String>]) -> Result<(usize, usize, usize), String> {
    let mut bride: Option<(usize, usize)> = None;
    let mut groom: Option<(usize, usize)> = None;

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if bride.is_none() && is_bride_title(cell) {
                bride = Some((r, c));
            }
            if groom.is_none() && is_groom_title(cell) {
                groom = Some((r, c));
            }
        }
        if bride.is_some() && groom.is_some() {
            break;
        }
    }

    match (bride, groom) {
        (Some((br, bc)), Some((_, gc))) if bc < gc => Ok((br, bc, gc)),
        (Some(_), Some(_)) => {
            Err("Bride side title must appear to the left of the groom side title".to_string())
        }
        _ => Err(
            "Side titles not found: expected 'הצד של הכלה' and 'הצד של החתן' \
             (or 'Bride Side' / 'Groom Side')"
                .to_string(),
        ),
    }
}

/// One side's column block: absolute column indices for its fields.
struct Block {
    side: Side,
    name: usize,
    group: usize,
    party: Option<usize>,
    sub_side: Option<usize>,
}

impl Block {
    /// Resolve the block's columns from the header row slice
    /// `[start, end)`. Name and group are required; party size and
    /// sub-side are optional.
    fn resolve(headers: &[String], start: usize, end: usize, side: Side) -> Result<Self, String> {
        let end = end.min(headers.len());
        let slice: Vec<String> = if start < end {
            headers[start..end].to_vec()
        } else {
            Vec::new()
        };

        let required = |col: Column| {
            find_column(&slice, col).map(|i| start + i).ok_or_else(|| {
                format!(
                    "{} side is missing a '{}' column (accepted: {})",
                    side.display_name(),
                    col.canonical(),
                    col.aliases().join(", ")
                )
            })
        };

        Ok(Block {
            side,
            name: required(Column::Name)?,
            group: required(Column::Group)?,
            party: find_column(&slice, Column::PartySize).map(|i| start + i),
            sub_side: find_column(&slice, Column::SubSide).map(|i| start + i),
        })
    }

    /// Read one guest row from this block. Returns `None` for blank rows
    /// (no name).
    fn read_row(&self, row: &[String], warnings: &mut Vec<String>) -> Option<RawGuest> {
        let cell = |idx: usize| row.get(idx).map(|s| s.trim()).unwrap_or("");

        let name = cell(self.name);
        if name.is_empty() {
            return None;
        }

        let party = self.party.map(|i| cell(i).to_string()).filter(|s| !s.is_empty());
        if let Some(raw) = party.as_deref() {
            if raw.parse::<f64>().is_err() {
                warnings.push(format!(
                    "Guest '{}': party size '{}' is not a number, using 1",
                    name, raw
                ));
            }
        }

        Some(RawGuest {
            name: name.to_string(),
            group: cell(self.group).to_string(),
            party_size: party,
            side: Some(self.side),
            sub_side: self.sub_side.map(|i| cell(i).to_string()),
        })
    }
}

/// Render a calamine cell as text. Whole floats print without the decimal
/// point so numeric party-size cells read back as "4", not "4.0".
fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

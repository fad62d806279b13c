// CSV guest-list import
//
// Two accepted layouts:
// - the same two-block layout as the Excel sheet (side titles on one row,
//   headers below) — what "save as CSV" produces from the planning sheet;
// - a flat layout with one guest per row and an explicit Side column.
// The reader picks by looking for a side-title cell.

use std::io::Read;
use std::path::Path;

use seatplan_engine::{RawGuest, Side};

use crate::header::{find_column, is_bride_title, is_groom_title, Column};
use crate::xlsx::import_rows;
use crate::GuestImport;

/// Import a guest list from a CSV/TSV file.
pub fn import(path: &Path) -> Result<GuestImport, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, delimiter)
}

pub fn import_with_delimiter(path: &Path, delimiter: u8) -> Result<GuestImport, String> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, delimiter)
}

fn import_from_string(content: &str, delimiter: u8) -> Result<GuestImport, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    let has_titles = rows
        .iter()
        .flatten()
        .any(|cell| is_bride_title(cell) || is_groom_title(cell));

    if has_titles {
        import_rows(&rows, Vec::new())
    } else {
        import_flat(&rows)
    }
}

/// Flat layout: headers in the first row, one guest per row, Side column
/// required.
fn import_flat(rows: &[Vec<String>]) -> Result<GuestImport, String> {
    let Some(headers) = rows.first() else {
        return Err("CSV file is empty".to_string());
    };

    let required = |col: Column| {
        find_column(headers, col).ok_or_else(|| {
            format!(
                "Missing '{}' column (accepted: {})",
                col.canonical(),
                col.aliases().join(", ")
            )
        })
    };

    let name_col = required(Column::Name)?;
    let group_col = required(Column::Group)?;
    let side_col = required(Column::Side)?;
    let party_col = find_column(headers, Column::PartySize);
    let sub_side_col = find_column(headers, Column::SubSide);

    let mut guests = Vec::new();
    let mut warnings = Vec::new();

    for (line, row) in rows[1..].iter().enumerate() {
        let cell = |idx: usize| row.get(idx).map(|s| s.trim()).unwrap_or("");

        let name = cell(name_col);
        if name.is_empty() {
            continue;
        }

        let Some(side) = Side::parse(cell(side_col)) else {
            warnings.push(format!(
                "Row {}: guest '{}' has unrecognized side '{}', skipping",
                line + 2,
                name,
                cell(side_col)
            ));
            continue;
        };

        let party = party_col.map(|i| cell(i).to_string()).filter(|s| !s.is_empty());
        if let Some(raw) = party.as_deref() {
            if raw.parse::<f64>().is_err() {
                warnings.push(format!(
                    "Guest '{}': party size '{}' is not a number, using 1",
                    name, raw
                ));
            }
        }

        let raw = RawGuest {
            name: name.to_string(),
            group: cell(group_col).to_string(),
            party_size: party,
            side: Some(side),
            sub_side: sub_side_col.map(|i| cell(i).to_string()),
        };
        guests.push(raw.normalize(guests.len(), side));
    }

    Ok(GuestImport { guests, warnings })
}

/// Detect the most likely field delimiter by checking consistency across
/// the first few lines. The delimiter producing the most consistent field
/// count (>1 field) wins.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252 exports).
fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_flat_layout_import() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("guests.csv");
        fs::write(
            &path,
            "Name,Side,Group,Guests\nDana,Bride,Uncle,3\nOmer,Groom,Army,\n",
        )
        .unwrap();

        let import = import(&path).unwrap();

        assert_eq!(import.guests.len(), 2);
        assert_eq!(import.guests[0].side, Side::Bride);
        assert_eq!(import.guests[0].party_size, 3);
        assert_eq!(import.guests[1].side, Side::Groom);
        assert_eq!(import.guests[1].party_size, 1);
    }

    #[test]
    fn test_two_block_csv_is_detected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blocks.csv");
        fs::write(
            &path,
            "Bride Side,,Groom Side,\nName,Group,Name,Group\nDana,Uncle,Omer,Army\n",
        )
        .unwrap();

        let import = import(&path).unwrap();

        assert_eq!(import.guests.len(), 2);
        assert_eq!(import.guests[0].name, "Dana");
        assert_eq!(import.guests[0].side, Side::Bride);
        assert_eq!(import.guests[1].name, "Omer");
        assert_eq!(import.guests[1].side, Side::Groom);
    }

    #[test]
    fn test_semicolon_delimiter_sniffed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("semi.csv");
        fs::write(&path, "Name;Side;Group\nDana;Bride;Uncle\nOmer;Groom;Army\n").unwrap();

        let import = import(&path).unwrap();
        assert_eq!(import.guests.len(), 2);
        assert_eq!(import.guests[1].group, "Army");
    }

    #[test]
    fn test_unknown_side_skips_row_with_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "Name,Side,Group\nDana,???,Uncle\nOmer,Groom,Army\n").unwrap();

        let import = import(&path).unwrap();

        assert_eq!(import.guests.len(), 1);
        assert_eq!(import.guests[0].name, "Omer");
        assert_eq!(import.warnings.len(), 1);
        assert!(import.warnings[0].contains("Dana"));
    }

    #[test]
    fn test_missing_side_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noside.csv");
        fs::write(&path, "Name,Group\nDana,Uncle\n").unwrap();

        let err = import(&path).unwrap_err();
        assert!(err.contains("'Side'"), "{}", err);
    }

    #[test]
    fn test_windows_1252_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // "José" in Windows-1252: é = 0xE9
        let bytes = b"Name,Side,Group\nJos\xE9,Bride,Work\n";
        fs::write(&path, bytes).unwrap();

        let import = import(&path).unwrap();
        assert_eq!(import.guests[0].name, "José");
    }
}

// Arrangement export - xlsx workbook and JSON

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook, Worksheet};
use seatplan_engine::{Arrangement, SideOutcome, Table, TableKind};

/// Export an arrangement as an xlsx workbook: one worksheet per side plus
/// a summary sheet. A side that aborted gets its error text instead of
/// table rows.
pub fn xlsx(arrangement: &Arrangement, path: &Path) -> Result<(), String> {
    let mut workbook = XlsxWorkbook::new();
    let bold = Format::new().set_bold();

    for outcome in [&arrangement.bride, &arrangement.groom] {
        let worksheet = workbook
            .add_worksheet()
            .set_name(outcome.side.display_name())
            .map_err(|e| format!("Failed to create sheet: {}", e))?;
        write_side(worksheet, outcome, &bold)?;
    }

    let summary = workbook
        .add_worksheet()
        .set_name("Summary")
        .map_err(|e| format!("Failed to create summary sheet: {}", e))?;
    write_summary(summary, arrangement, &bold)?;

    workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file: {}", e))
}

fn write_side(
    worksheet: &mut Worksheet,
    outcome: &SideOutcome,
    bold: &Format,
) -> Result<(), String> {
    let write_err = |e| format!("Failed to write cell: {}", e);

    for (col, header) in ["Table", "Kind", "Group", "Guests", "Seats"].iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, bold)
            .map_err(write_err)?;
    }

    let Some(tables) = &outcome.tables else {
        for (i, error) in outcome.errors.iter().enumerate() {
            worksheet
                .write_string(i as u32 + 1, 0, error.to_string())
                .map_err(write_err)?;
        }
        return Ok(());
    };

    for (i, table) in tables.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_string(row, 0, table.label.to_string())
            .map_err(write_err)?;
        worksheet
            .write_string(row, 1, kind_text(table))
            .map_err(write_err)?;
        worksheet
            .write_string(row, 2, &table.group)
            .map_err(write_err)?;
        worksheet
            .write_string(row, 3, table.guest_names().join(", "))
            .map_err(write_err)?;
        worksheet
            .write_number(row, 4, table.occupancy as f64)
            .map_err(write_err)?;
    }

    // Guest-name column carries the long text
    worksheet.set_column_width(3, 60).map_err(write_err)?;
    Ok(())
}

fn write_summary(
    worksheet: &mut Worksheet,
    arrangement: &Arrangement,
    bold: &Format,
) -> Result<(), String> {
    let write_err = |e| format!("Failed to write summary: {}", e);

    for (col, header) in ["Side", "Tables", "Guests", "Seats", "Status"].iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, bold)
            .map_err(write_err)?;
    }

    for (i, outcome) in [&arrangement.bride, &arrangement.groom].iter().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_string(row, 0, outcome.side.display_name())
            .map_err(write_err)?;

        match &outcome.tables {
            Some(tables) => {
                let guests: usize = tables.iter().map(|t| t.guests.len()).sum();
                let seats: u32 = tables.iter().map(|t| t.occupancy).sum();
                worksheet
                    .write_number(row, 1, tables.len() as f64)
                    .map_err(write_err)?;
                worksheet
                    .write_number(row, 2, guests as f64)
                    .map_err(write_err)?;
                worksheet
                    .write_number(row, 3, seats as f64)
                    .map_err(write_err)?;
                worksheet.write_string(row, 4, "ok").map_err(write_err)?;
            }
            None => {
                worksheet
                    .write_string(row, 4, "failed")
                    .map_err(write_err)?;
            }
        }
    }

    Ok(())
}

fn kind_text(table: &Table) -> &'static str {
    match table.kind {
        TableKind::Regular => "Regular",
        TableKind::Knight => "Knight",
    }
}

/// Serialize an arrangement as pretty JSON.
pub fn json(arrangement: &Arrangement) -> Result<String, String> {
    serde_json::to_string_pretty(arrangement).map_err(|e| e.to_string())
}

/// Write the JSON form to a file.
pub fn write_json(arrangement: &Arrangement, path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| e.to_string())?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, arrangement).map_err(|e| e.to_string())
}

/// Output path keyed by the current local time, e.g.
/// `out/seating_20260826_191500.xlsx`. Output directories are explicit —
/// no module-level folder configuration.
pub fn timestamped_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{}.{}", stem, stamp, extension))
}

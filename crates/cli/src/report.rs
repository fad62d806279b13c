// Plain-text report rendering for terminal output

use seatplan_engine::{Arrangement, Guest, OversizedGroup, SideOutcome, TableKind};

/// Render a full arrangement, one section per side.
pub fn arrangement(arrangement: &Arrangement) -> String {
    let mut out = String::new();
    for outcome in [&arrangement.bride, &arrangement.groom] {
        out.push_str(&side_section(outcome));
        out.push('\n');
    }
    out
}

fn side_section(outcome: &SideOutcome) -> String {
    let mut out = format!("{} side\n", outcome.side.display_name());

    match &outcome.tables {
        Some(tables) if tables.is_empty() => {
            out.push_str("  (no guests)\n");
        }
        Some(tables) => {
            let rows: Vec<Vec<String>> = tables
                .iter()
                .map(|t| {
                    vec![
                        t.label.to_string(),
                        kind_text(t.kind).to_string(),
                        t.group.clone(),
                        t.occupancy.to_string(),
                        t.guest_names().join(", "),
                    ]
                })
                .collect();
            out.push_str(&columns(
                &["Table", "Kind", "Group", "Seats", "Guests"],
                &rows,
            ));

            let seats: u32 = tables.iter().map(|t| t.occupancy).sum();
            out.push_str(&format!(
                "  {} table(s), {} seat(s)\n",
                tables.len(),
                seats
            ));
        }
        None => {
            for error in &outcome.errors {
                for line in error.to_string().lines() {
                    out.push_str("  ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }

    for pending in &outcome.pending_oversized {
        out.push_str(&format!(
            "  undecided oversized group: {} ({} seats) — pass --force-knight or let it split\n",
            pending.group, pending.total
        ));
    }

    out
}

/// Render detected oversized groups.
pub fn oversized(groups: &[OversizedGroup]) -> String {
    if groups.is_empty() {
        return "No oversized groups.\n".to_string();
    }

    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|g| {
            vec![
                g.group.clone(),
                g.total.to_string(),
                g.names.join(", "),
            ]
        })
        .collect();
    columns(&["Group", "Seats", "Guests"], &rows)
}

/// Render normalized guest records, in parse order.
pub fn guests(guests: &[Guest]) -> String {
    if guests.is_empty() {
        return "No guests.\n".to_string();
    }

    let rows: Vec<Vec<String>> = guests
        .iter()
        .map(|g| {
            vec![
                g.row.to_string(),
                g.name.clone(),
                g.group.clone(),
                g.party_size.to_string(),
                g.side.display_name().to_string(),
                g.sub_side.clone().unwrap_or_default(),
            ]
        })
        .collect();
    columns(&["Row", "Name", "Group", "Party", "Side", "Sub-side"], &rows)
}

fn kind_text(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Regular => "Regular",
        TableKind::Knight => "Knight",
    }
}

/// Left-aligned column layout with two-space gaps, indented two spaces.
/// The last column is not padded.
fn columns(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header_row).chain(rows.iter()) {
        out.push_str(" ");
        for (i, cell) in row.iter().enumerate() {
            out.push(' ');
            if i + 1 == row.len() {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{:<width$}", cell, width = widths[i]));
            }
            if i + 1 < row.len() {
                out.push(' ');
            }
        }
        // Trim trailing padding on short last cells
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatplan_engine::{arrange_seating, ArrangeOptions, RawGuest, Side};

    fn guest(row: usize, name: &str, group: &str, party: u32, side: Side) -> Guest {
        RawGuest {
            name: name.to_string(),
            group: group.to_string(),
            party_size: Some(party.to_string()),
            side: Some(side),
            sub_side: None,
        }
        .normalize(row, side)
    }

    #[test]
    fn test_arrangement_report_sections() {
        let guests = vec![
            guest(0, "Dana", "Uncle", 5, Side::Bride),
            guest(1, "Omer", "Army", 9, Side::Groom),
        ];
        let text = arrangement(&arrange_seating(guests, &ArrangeOptions::with_table_size(10)));

        assert!(text.contains("Bride side"));
        assert!(text.contains("Groom side"));
        assert!(text.contains("Uncle"));
        assert!(text.contains("1 table(s), 5 seat(s)"));
    }

    #[test]
    fn test_failed_side_prints_error_text() {
        // Single 3-seat group cannot meet the minimum of 8
        let guests = vec![guest(0, "Gil", "Work", 3, Side::Bride)];
        let text = arrangement(&arrange_seating(guests, &ArrangeOptions::with_table_size(10)));

        assert!(text.contains("Work"));
        assert!(text.contains("minimum"));
    }

    #[test]
    fn test_oversized_report() {
        let guests: Vec<Guest> = (0..4)
            .map(|i| guest(i, &format!("G{}", i), "Army", 4, Side::Groom))
            .collect();
        let found =
            seatplan_engine::detect_oversized_groups(&guests, 10, &Default::default());
        let text = oversized(&found);

        assert!(text.contains("Army"));
        assert!(text.contains("16"));
    }

    #[test]
    fn test_oversized_report_empty() {
        assert_eq!(oversized(&[]), "No oversized groups.\n");
    }

    #[test]
    fn test_guest_dump_columns_align() {
        let text = guests(&[
            guest(0, "Dana", "Uncle", 5, Side::Bride),
            guest(1, "A very long guest name", "Work", 1, Side::Groom),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        // Group column starts at the same offset on every line
        let offset = lines[0].find("Group").unwrap();
        assert_eq!(&lines[1][offset..offset + 5], "Uncle");
    }
}

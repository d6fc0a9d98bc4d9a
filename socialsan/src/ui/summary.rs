// socialsan/src/ui/summary.rs
//! Renders a `MigrationReport` as a table.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use socialsan_core::MigrationReport;
use std::io::{self, Write};

fn count_cell(count: usize, color: Color, supports_color: bool) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if supports_color && count > 0 {
        cell.fg(color)
    } else {
        cell
    }
}

/// Builds the summary table for a migration run.
pub fn build_summary_table(report: &MigrationReport, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Outcome", "Records"]);

    let rows = [
        ("examined", report.examined, Color::Reset),
        ("not selected", report.not_selected, Color::Reset),
        ("updated", report.updated, Color::Green),
        ("unchanged", report.unchanged, Color::Reset),
        ("deleted", report.deleted, Color::Red),
        ("kept (verified)", report.kept_verified, Color::Yellow),
        ("skipped", report.skipped, Color::Yellow),
    ];
    for (label, count, color) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count, color, supports_color)]);
    }
    table
}

/// Writes the summary table followed by a newline.
pub fn print_summary<W: Write>(report: &MigrationReport, writer: &mut W, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", build_summary_table(report, supports_color))
}

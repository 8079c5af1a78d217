//! Run summary tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ExportRun;

pub fn print_summary(run: &ExportRun) {
    println!("Output: {}", run.output.display());
    if let Some(archive) = &run.archive {
        println!("Archive: {}", archive.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Records"), header_cell("Written")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in [
        ("People", run.summary.people),
        ("Families", run.summary.families),
        ("Sources", run.summary.sources),
        ("Repositories", run.summary.repositories),
        ("Notes", run.summary.notes),
        ("Media packed", run.summary.media_packed),
    ] {
        table.add_row(vec![Cell::new(label), count_cell(count)]);
    }
    println!("{table}");

    print_diagnostics(run);
}

fn print_diagnostics(run: &ExportRun) {
    if run.summary.diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Message")]);
    apply_table_style(&mut table);
    for diagnostic in &run.summary.diagnostics {
        table.add_row(vec![
            Cell::new(diagnostic.kind.as_str()).fg(Color::Yellow),
            Cell::new(&diagnostic.message),
        ]);
    }
    println!();
    println!("Diagnostics:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ward_model::{CleaningSummary, Stage, TableKind};
use ward_report::ReportSet;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Data: {}", result.data_dir.display());
    match &result.output_dir {
        Some(dir) => println!("Output: {}", dir.display()),
        None => println!("Output: dry run, nothing written"),
    }
    println!("{}", stage_outcome_table(&result.summary));
    println!("{}", table_count_table(&result.summary, &result.sources));
    print_notes(&result.summary);
    print_reports(&result.reports);
    if !result.outputs.is_empty() {
        println!();
        println!("Files:");
        for path in &result.outputs {
            println!("- {}", path.display());
        }
    }
}

pub fn print_stage_plan() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Stage"),
        header_cell("Tables"),
        header_cell("Requires"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in stage_plan_rows() {
        table.add_row(row);
    }
    println!("{table}");
}

/// One row per stage in run order: position, name, tables, prerequisites,
/// description.
pub fn stage_plan_rows() -> Vec<[String; 5]> {
    Stage::ALL
        .iter()
        .enumerate()
        .map(|(idx, stage)| {
            let tables: Vec<&str> = stage.tables().iter().map(TableKind::as_str).collect();
            let requires: Vec<&str> = stage.requires().iter().map(Stage::as_str).collect();
            [
                (idx + 1).to_string(),
                stage.as_str().to_string(),
                tables.join(", "),
                if requires.is_empty() {
                    "-".to_string()
                } else {
                    requires.join(", ")
                },
                stage.description().to_string(),
            ]
        })
        .collect()
}

fn stage_outcome_table(summary: &CleaningSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Table"),
        header_cell("Examined"),
        header_cell("Affected"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in &summary.outcomes {
        table.add_row(vec![
            Cell::new(outcome.stage.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(outcome.table.as_str()),
            Cell::new(outcome.rows_examined),
            count_cell(outcome.rows_affected, affected_color(outcome.stage)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(summary.total_rows_affected()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn table_count_table(
    summary: &CleaningSummary,
    sources: &BTreeMap<TableKind, PathBuf>,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Description"),
        header_cell("Source"),
        header_cell("Rows in"),
        header_cell("Rows out"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for kind in TableKind::ALL {
        let before = summary.counts_before.get(kind);
        let after = summary.counts_after.get(kind);
        let after_cell = if after < before {
            Cell::new(after).fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else {
            Cell::new(after)
        };
        table.add_row(vec![
            Cell::new(kind.as_str()),
            Cell::new(kind.label()),
            optional_cell(sources.get(&kind).map(|path| path.display())),
            Cell::new(before),
            after_cell,
        ]);
    }
    table
}

fn print_notes(summary: &CleaningSummary) {
    let notes: Vec<_> = summary.notes().collect();
    if notes.is_empty() {
        return;
    }
    eprintln!("Notes:");
    for (outcome, note) in notes {
        eprintln!("- {} ({}): {note}", outcome.stage, outcome.table);
    }
}

fn print_reports(reports: &ReportSet) {
    let mut recent = report_table(&["Patient", "Name", "Service", "Arrival", "Departure", "Stay"]);
    align_column(&mut recent, 5, CellAlignment::Right);
    for row in &reports.recent_patients {
        recent.add_row(vec![
            text_cell(row.patient_id.as_deref()),
            text_cell(row.name.as_deref()),
            text_cell(row.service.as_deref()),
            text_cell(row.arrival_date.as_deref()),
            text_cell(row.departure_date.as_deref()),
            optional_cell(row.stay_duration),
        ]);
    }
    print_section("Recent patients", &recent);

    let mut bottlenecks = report_table(&["Service", "Avg stay", "Refused", "Avg satisfaction"]);
    for index in 1..=3 {
        align_column(&mut bottlenecks, index, CellAlignment::Right);
    }
    for row in &reports.service_bottlenecks {
        bottlenecks.add_row(vec![
            service_cell(&row.service),
            average_cell(row.avg_stay_duration),
            count_cell(row.total_refused, Color::Red),
            average_cell(row.avg_satisfaction),
        ]);
    }
    print_section("Service bottlenecks", &bottlenecks);

    let mut allocation = report_table(&[
        "Service",
        "Week",
        "Admitted",
        "Staff present",
        "Patients/staff",
        "Avg morale",
        "Refused",
    ]);
    for index in 1..=6 {
        align_column(&mut allocation, index, CellAlignment::Right);
    }
    for row in &reports.resource_allocation {
        let ratio = match row.patients_per_staff.ratio() {
            Some(_) => Cell::new(row.patients_per_staff),
            None => dim_cell(row.patients_per_staff),
        };
        allocation.add_row(vec![
            service_cell(&row.service),
            Cell::new(row.week),
            Cell::new(row.patients_admitted),
            Cell::new(row.present_staff),
            ratio,
            average_cell(row.avg_staff_morale),
            count_cell(row.total_refused, Color::Red),
        ]);
    }
    print_section("Resource allocation", &allocation);

    let mut geriatric = report_table(&["Service", "Patients", "Avg satisfaction", "Avg stay"]);
    for index in 1..=3 {
        align_column(&mut geriatric, index, CellAlignment::Right);
    }
    for row in &reports.geriatric_outcomes {
        geriatric.add_row(vec![
            service_cell(&row.service),
            Cell::new(row.patients),
            average_cell(row.avg_satisfaction),
            average_cell(row.avg_stay_duration),
        ]);
    }
    print_section("Geriatric outcomes", &geriatric);
}

fn print_section(title: &str, table: &Table) {
    println!();
    println!("{title}:");
    if table.row_count() == 0 {
        println!("  (no rows)");
    } else {
        println!("{table}");
    }
}

fn report_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Removals stand out; fills and trims are routine.
fn affected_color(stage: Stage) -> Color {
    match stage {
        Stage::RemoveInvalidStays => Color::Yellow,
        _ => Color::Green,
    }
}

fn count_cell<T: ToString + PartialEq + Default>(count: T, color: Color) -> Cell {
    if count == T::default() {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}

fn average_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn text_cell(value: Option<&str>) -> Cell {
    optional_cell(value)
}

fn service_cell(service: &str) -> Cell {
    Cell::new(service)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

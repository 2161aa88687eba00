use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use jumpdb_cli::types::{BuildReport, GroupSummary, SplitOutput, SplitSummary};

pub fn print_summary(report: &BuildReport) {
    println!("Input: {}", report.input_root.display());
    println!("Output: {}", report.output_dir.display());
    if report.dry_run {
        println!("Dry run: no documents were written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Folder"),
        header_cell("Document"),
        header_cell("Files"),
        header_cell("Parsed"),
        header_cell("Failed"),
        header_cell("Records"),
        header_cell("Written"),
        header_cell("Max cost"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Right);

    let mut total_files = 0usize;
    let mut total_parsed = 0usize;
    let mut total_failed = 0usize;
    let mut total_records = 0usize;
    for group in &report.groups {
        total_files += group.files;
        total_parsed += group.parsed;
        total_failed += group.failed;
        total_records += group.records + group.split_records();
        table.add_row(group_row(group));
        for split in &group.splits {
            table.add_row(split_row(split));
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} written", report.written_groups()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_files).add_attribute(Attribute::Bold),
        Cell::new(total_parsed).add_attribute(Attribute::Bold),
        count_cell(total_failed, Color::Red).add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.max_cost).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_split_table(&report.splits);
    println!("Max cost: {}", report.max_cost);

    let errors: Vec<(&str, &String)> = report
        .groups
        .iter()
        .flat_map(|group| group.errors.iter().map(|error| (group.folder.as_str(), error)))
        .chain(report.errors.iter().map(|error| ("split documents", error)))
        .collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for (scope, error) in errors {
            eprintln!("- {scope}: {error}");
        }
    }
}

fn print_split_table(splits: &[SplitOutput]) {
    if splits.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Split document"),
        header_cell("Records"),
        header_cell("Written"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for split in splits {
        table.add_row(vec![
            Cell::new(&split.output)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(split.records),
            output_cell(split.path.as_ref()),
        ]);
    }
    println!();
    println!("Splits:");
    println!("{table}");
}

fn group_row(group: &GroupSummary) -> Vec<Cell> {
    vec![
        Cell::new(&group.folder)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&group.slug),
        Cell::new(group.files),
        Cell::new(group.parsed),
        count_cell(group.failed, Color::Red),
        Cell::new(group.records),
        output_cell(group.output.as_ref()),
        Cell::new(group.max_cost),
    ]
}

fn split_row(split: &SplitSummary) -> Vec<Cell> {
    vec![
        dim_cell(format!("  -> {}", split.chapter)),
        dim_cell(&split.output),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(split.records),
        dim_cell("-"),
        dim_cell("-"),
    ]
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_normalization::{SourceFormat, VendorProfile};

use catalog_cli::types::{ConvertResult, PreviewResult};

pub fn print_vendors(profiles: &[VendorProfile]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Vendor"),
        header_cell("Input"),
        header_cell("Delimiter"),
        header_cell("Fields"),
        header_cell("Export file"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for profile in profiles {
        let fields = match profile.canonical_schema() {
            Some(schema) => Cell::new(schema.len()),
            None => dim_cell("as input"),
        };
        table.add_row(vec![
            key_cell(&profile.key),
            Cell::new(&profile.display_name),
            input_cell(&profile.source),
            Cell::new(profile.default_delimiter),
            fields,
            Cell::new(&profile.export_file_name),
        ]);
    }
    println!("{table}");
}

pub fn print_preview(result: &PreviewResult) {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(result.schema.iter().map(header_cell));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, values) in &result.rows {
        let mut row = vec![dim_cell(idx + 1)];
        row.extend(values.iter().map(Cell::new));
        table.add_row(row);
    }
    println!("{table}");
    if result.matched == result.total {
        println!("Showing {} of {} rows", result.rows.len(), result.total);
    } else {
        println!(
            "Showing {} of {} matching rows ({} total)",
            result.rows.len(),
            result.matched,
            result.total
        );
    }
}

pub fn print_summary(result: &ConvertResult) {
    println!("Vendor: {}", result.vendor);
    println!("Input: {}", result.input.display());
    match &result.written {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: {} (dry run, not written)", result.file_name),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Delimiter"),
        header_cell("Raw fields"),
        header_cell("Records"),
        header_cell("Normalized"),
        header_cell("Output fields"),
        header_cell("Bytes"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.delimiter),
        Cell::new(result.raw_fields),
        Cell::new(result.records).add_attribute(Attribute::Bold),
        flag_cell(result.normalized),
        Cell::new(result.output_fields),
        Cell::new(result.bytes),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn key_cell(key: &str) -> Cell {
    Cell::new(key)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn input_cell(source: &SourceFormat) -> Cell {
    match source {
        SourceFormat::SheetRecords => Cell::new(source.label()).fg(Color::Green),
        SourceFormat::PositionalText(_) => Cell::new(source.label()).fg(Color::Yellow),
        SourceFormat::HeaderText => Cell::new(source.label()),
    }
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use illumify_cli::report::{ColorReport, FilterOutput, SiteReport};
use illumify_color::{Matrix, to_fixed};
use illumify_model::FilterConfig;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn print_color_report(input: &str, report: &ColorReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Notation"), header_cell(input)]);
    apply_table_style(&mut table);
    let [r, g, b] = report.rgba.to_bytes();
    table.add_row(vec![label_cell("RGB"), swatch_cell(&report.rgb, [r, g, b])]);
    table.add_row(vec![label_cell("Hex"), Cell::new(&report.hex)]);
    table.add_row(vec![label_cell("HSL"), Cell::new(&report.hsl)]);
    table.add_row(vec![
        label_cell("HSV"),
        Cell::new(format!(
            "{}°, {}, {}",
            report.hsv.h,
            to_fixed(report.hsv.s, 2),
            to_fixed(report.hsv.v, 2)
        )),
    ]);
    table.add_row(vec![
        label_cell("Name"),
        Cell::new(format!(
            "{} ({}, distance {})",
            report.nearest.display_name, report.nearest.x11_name, report.distance
        )),
    ]);
    table.add_row(vec![label_cell("Hue bucket"), Cell::new(report.bucket)]);
    println!("{table}");
}

pub fn print_matrix(matrix: &Matrix) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("R"),
        header_cell("G"),
        header_cell("B"),
        header_cell("A"),
        header_cell("Offset"),
    ]);
    apply_table_style(&mut table);
    for row in &matrix.rows()[..4] {
        table.add_row(row.iter().map(|value| Cell::new(format!("{value:.4}"))));
    }
    for index in 0..5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{table}");
}

pub fn print_filter_output(theme: &FilterConfig, output: &FilterOutput) {
    println!("{}", theme_line(theme));
    match output {
        FilterOutput::Css(Some(value)) => println!("filter: {value};"),
        FilterOutput::Css(None) => println!("filter: none;"),
        FilterOutput::Svg(values) => {
            println!("<feColorMatrix type=\"matrix\" values=\"");
            for line in values.lines() {
                println!("  {line}");
            }
            println!("\"/>");
        }
        FilterOutput::Generated { background, text } => {
            println!("background: {background};");
            println!("color: {text};");
        }
    }
}

pub fn print_match_table(url: &str, results: &[(String, bool)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Template"), header_cell(url)]);
    apply_table_style(&mut table);
    for (template, matched) in results {
        table.add_row(vec![Cell::new(template), yes_no_cell(*matched)]);
    }
    println!("{table}");
}

pub fn print_site_report(report: &SiteReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Site"), header_cell(&report.url)]);
    apply_table_style(&mut table);
    table.add_row(vec![
        label_cell("Host"),
        match &report.host {
            Some(host) => Cell::new(host),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        label_cell("Valid site pattern"),
        yes_no_cell(report.host_is_valid_pattern),
    ]);
    table.add_row(vec![label_cell("Enabled"), yes_no_cell(report.enabled)]);
    table.add_row(vec![
        label_cell("Toggle has effect"),
        yes_no_cell(report.toggle_has_effect),
    ]);
    table.add_row(vec![label_cell("Custom theme"), yes_no_cell(report.custom_theme)]);
    table.add_row(vec![
        label_cell("In schedule window"),
        yes_no_cell(report.in_schedule),
    ]);
    table.add_row(vec![label_cell("Theme"), Cell::new(theme_line(&report.theme))]);
    println!("{table}");
}

fn theme_line(theme: &FilterConfig) -> String {
    let mut line = format!(
        "mode={:?} brightness={} contrast={} grayscale={} sepia={}",
        theme.mode, theme.brightness, theme.contrast, theme.grayscale, theme.sepia
    );
    if theme.use_color_correction {
        line.push_str(&format!(
            " correction={}/{} sensitivity={}",
            theme.colorblindness_type,
            theme.color_correction_type,
            to_fixed(theme.colorblindness_sensitivity, 2)
        ));
    }
    line
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn swatch_cell(text: &str, [r, g, b]: [u8; 3]) -> Cell {
    Cell::new(text).fg(Color::Rgb { r, g, b })
}

fn yes_no_cell(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

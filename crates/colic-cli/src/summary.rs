//! Terminal tables for command output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colic_encode::{DecodedLesion, Encoded, Prediction};
use colic_model::{EncodeIssue, FeatureSchema, IssueCounts, Outcome};
use colic_standards::NONE_LABEL;

pub fn decode_table(decoded: &[(String, DecodedLesion)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Site"),
        header_cell("Type"),
        header_cell("Subtype"),
        header_cell("Specific"),
    ]);
    apply_table_style(&mut table);
    for (code, lesion) in decoded {
        let mut row = vec![Cell::new(code).add_attribute(Attribute::Bold)];
        row.extend(lesion.labels().into_iter().map(label_cell));
        table.add_row(row);
    }
    table
}

/// One row per schema field with its slice of the vector.
pub fn encoded_table(schema: &FeatureSchema, encoded: &Encoded) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Offset"),
        header_cell("Field"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let mut offset = 0;
    for field in schema.fields() {
        let width = field.width();
        let segment = &encoded.values[offset..offset + width];
        let flagged = encoded.issues.iter().any(|issue| issue.field == field.name);
        let name = if flagged {
            Cell::new(&field.name).fg(Color::Yellow)
        } else {
            Cell::new(&field.name)
        };
        table.add_row(vec![Cell::new(offset), name, Cell::new(render_segment(segment))]);
        offset += width;
    }
    table
}

/// Issues of every record, numbered from 1.
pub fn issue_table(encoded: &[&[EncodeIssue]]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Field"),
        header_cell("Issue"),
        header_cell("Value"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, issues) in encoded.iter().enumerate() {
        for issue in *issues {
            let value = issue
                .value
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new);
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(&issue.field),
                issue_cell(issue),
                value,
            ]);
        }
    }
    table
}

pub fn prediction_table(predictions: &[Prediction]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Record"), header_cell("Outcome")];
    header.extend(Outcome::ALL.iter().map(|outcome| header_cell(outcome.as_str())));
    header.push(header_cell("Missing"));
    header.push(header_cell("Rejected"));
    table.set_header(header);
    apply_table_style(&mut table);
    for column in 0..table.column_count() {
        if column != 1 {
            align_column(&mut table, column, CellAlignment::Right);
        }
    }
    for (index, prediction) in predictions.iter().enumerate() {
        let counts = IssueCounts::from_issues(&prediction.issues);
        let mut row = vec![Cell::new(index + 1), outcome_cell(prediction.outcome)];
        row.extend(prediction.probabilities.iter().enumerate().map(|(class, p)| {
            let cell = Cell::new(format!("{p:.3}"));
            if class == prediction.class_index {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        }));
        row.push(count_cell(counts.missing, Color::Yellow));
        row.push(count_cell(counts.rejected(), Color::Red));
        table.add_row(row);
    }
    table
}

pub fn render_segment(values: &[f64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
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

fn label_cell(label: &str) -> Cell {
    if label == NONE_LABEL {
        dim_cell(label)
    } else {
        Cell::new(label)
    }
}

fn issue_cell(issue: &EncodeIssue) -> Cell {
    let color = if issue.value.is_some() {
        Color::Red
    } else {
        Color::Yellow
    };
    Cell::new(issue.kind.describe()).fg(color)
}

fn outcome_cell(outcome: Outcome) -> Cell {
    let color = match outcome {
        Outcome::Died => Color::Red,
        Outcome::Euthanized => Color::Yellow,
        Outcome::Lived => Color::Green,
    };
    Cell::new(outcome).fg(color).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! Printable ticket builder
//!
//! Turns a finalized entry into an ordered list of positioned fields and
//! renders them as a printable HTML page. Field positions come from the
//! built-in defaults unless the operator has stored an override for that
//! field id.

use crate::domain::model::Entry;
use crate::error::Result;
use crate::store::layout::Position;
use std::collections::HashMap;
use std::path::Path;

/// Every field id a ticket can carry, in print order. Layout overrides
/// for ids outside this set are rejected.
pub const PRINT_FIELD_IDS: [&str; 12] = [
    "serial",
    "date",
    "time",
    "secondDate",
    "secondTime",
    "vehicle",
    "driver",
    "amount",
    "firstWeight",
    "secondWeight",
    "finalWeight",
    "weightPer40",
];

/// One positioned line on the printed ticket
#[derive(Debug, Clone, PartialEq)]
pub struct PrintField {
    pub id: &'static str,
    pub value: String,
    pub position: Position,
    pub bold: bool,
}

/// Ticket fields at their built-in default positions: a single column at
/// x=50, 50px apart, weights emphasized.
fn default_fields(entry: &Entry) -> Vec<PrintField> {
    let values = [
        (entry.serial_number.clone(), false),
        (entry.date.clone(), false),
        (entry.time.clone(), false),
        (entry.second_date.clone().unwrap_or_default(), false),
        (entry.second_time.clone().unwrap_or_default(), false),
        (entry.vehicle_number.clone(), false),
        (entry.driver_name.clone(), false),
        (format!("{}", entry.amount), false),
        (format!("{}", entry.first_weight), true),
        (format!("{}", entry.second_weight), true),
        (format!("{}", entry.final_weight), true),
        (entry.weight_per_40.clone(), true),
    ];

    PRINT_FIELD_IDS
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(i, (id, (value, bold)))| PrintField {
            id,
            value,
            position: Position {
                x: 50,
                y: 50 + 50 * i as i32,
            },
            bold,
        })
        .collect()
}

/// Build the printable field list for an entry, merging stored per-field
/// overrides over the defaults.
pub fn build_printable(entry: &Entry, overrides: &HashMap<String, Position>) -> Vec<PrintField> {
    default_fields(entry)
        .into_iter()
        .map(|mut field| {
            if let Some(&position) = overrides.get(field.id) {
                field.position = position;
            }
            field
        })
        .collect()
}

/// Render positioned fields as a printable portrait HTML page
pub fn render_html(fields: &[PrintField]) -> String {
    let mut body = String::new();
    for field in fields {
        let class = if field.bold {
            "print-field bold"
        } else {
            "print-field"
        };
        body.push_str(&format!(
            "    <div class=\"{}\" id=\"{}\" style=\"left: {}px; top: {}px;\"><span>{}</span></div>\n",
            class,
            field.id,
            field.position.x,
            field.position.y,
            escape_html(&field.value),
        ));
    }

    format!(
        "<html>\n<head>\n<style>\n\
         @page {{ size: portrait; }}\n\
         .print-field {{ position: absolute; padding: 5px; background: white; }}\n\
         .print-field.bold {{ font-weight: bold; font-size: 1.2em; }}\n\
         </style>\n</head>\n<body>\n\
         <div style=\"padding: 20px; font-family: Arial;\">\n{}</div>\n\
         </body>\n</html>\n",
        body
    )
}

/// Write a ticket for an entry to `path`
pub fn write_ticket(
    path: &Path,
    entry: &Entry,
    overrides: &HashMap<String, Position>,
) -> Result<()> {
    let fields = build_printable(entry, overrides);
    std::fs::write(path, render_html(&fields))?;
    Ok(())
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

//! Trigram table

use hexagram_types::TrigramIdentity;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{self, OutputFormat};

#[derive(Serialize, Tabled)]
struct TrigramRow {
    #[tabled(rename = "Code")]
    code: u8,
    #[tabled(rename = "Glyph")]
    glyph: &'static str,
    #[tabled(rename = "Trigram")]
    label: String,
    #[tabled(rename = "Lines")]
    lines: String,
    #[tabled(rename = "Element")]
    element: &'static str,
    #[tabled(rename = "Direction")]
    direction: &'static str,
    #[tabled(rename = "Characteristic")]
    characteristic: &'static str,
}

/// Execute trigrams command
pub fn execute(format: OutputFormat) -> CliResult<()> {
    output::print_rows(rows(), format)
}

fn rows() -> Vec<TrigramRow> {
    let mut rows: Vec<TrigramRow> = TrigramIdentity::ALL
        .iter()
        .filter_map(|&identity| {
            let code = identity.code()?;
            let lines = identity.lines()?;
            let attributes = identity.attributes();
            Some(TrigramRow {
                code,
                glyph: attributes.glyph,
                label: identity.label(),
                lines: lines.iter().map(|l| l.bit().to_string()).collect(),
                element: attributes.element,
                direction: attributes.direction,
                characteristic: attributes.characteristic,
            })
        })
        .collect();
    rows.sort_by_key(|row| std::cmp::Reverse(row.code));
    rows
}

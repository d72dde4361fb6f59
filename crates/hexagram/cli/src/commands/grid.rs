//! Grid rendering

use clap::Args;
use hexagram_engine::{CellView, GridLayout, HexagramCodex};
use serde::Serialize;
use tabled::builder::Builder;

use crate::context::Sources;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};

/// Grid arguments
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Columns per row in registry-order mode (ignored with --arrangement)
    #[arg(long)]
    pub columns: Option<usize>,
}

#[derive(Serialize)]
struct GridReport {
    mode: &'static str,
    rows: Vec<Vec<Option<CellView>>>,
}

/// Execute grid command
pub fn execute(args: GridArgs, sources: &Sources, format: OutputFormat) -> CliResult<()> {
    let codex = sources.codex()?;
    let (mode, layout) = match sources.load_arrangement()? {
        Some(arrangement) => ("arrangement", GridLayout::from_arrangement(&codex, &arrangement)),
        None => {
            let columns = args.columns.unwrap_or(codex.config().grid_columns);
            ("registry", GridLayout::registry_order(&codex, columns))
        }
    };
    let rows = views(&codex, &layout);

    match format {
        OutputFormat::Table => {
            output::print_heading(&format!(
                "Hexagram Grid ({} rows, {} order)",
                layout.row_count(),
                mode
            ));
            let records = rows
                .iter()
                .map(|row| row.iter().map(render_cell).collect::<Vec<_>>());
            println!("{}", Builder::from_iter(records).build());
        }
        _ => println!(
            "{}",
            output::render_structured(&GridReport { mode, rows }, format)?
        ),
    }
    Ok(())
}

fn views(codex: &HexagramCodex, layout: &GridLayout) -> Vec<Vec<Option<CellView>>> {
    layout
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            (0..row.len())
                .map(|c| layout.cell_view(codex, r, c))
                .collect()
        })
        .collect()
}

fn render_cell(view: &Option<CellView>) -> String {
    match view {
        Some(v) => format!("{}{}\n{} {}", v.upper_glyph, v.lower_glyph, v.id, v.name),
        None => "·".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexagram_registry::Arrangement;
    use hexagram_types::HexagramId;

    #[test]
    fn views_follow_layout() {
        let codex = Sources::default().codex().unwrap();
        let layout = GridLayout::from_arrangement(&codex, &Arrangement::from_ids(vec![vec![2, 0]]));
        let rows = views(&codex, &layout);
        assert_eq!(rows[0][0].as_ref().map(|v| v.id), Some(HexagramId(2)));
        assert!(rows[0][1].is_none());
        assert_eq!(render_cell(&rows[0][1]), "·");
        assert!(render_cell(&rows[0][0]).ends_with("2 Kun"));
    }
}

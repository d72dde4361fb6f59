//! Hexagram detail

use clap::Args;
use hexagram_engine::{HexagramCodex, Relation, Relationships};
use hexagram_types::{AuxData, HexagramId};
use serde::Serialize;
use tabled::Tabled;

use super::{describe_ids, draw_lines};
use crate::context::Sources;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};

/// Show arguments
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Hexagram id
    pub id: u32,

    /// Include hexagrams whose yang count exceeds this one's yin count
    #[arg(long)]
    pub causal: bool,
}

#[derive(Serialize)]
struct ShowReport {
    id: HexagramId,
    name: String,
    lines: String,
    upper_trigram: String,
    lower_trigram: String,
    relationships: Relationships,
    #[serde(skip_serializing_if = "Option::is_none")]
    causal_links: Option<Vec<HexagramId>>,
    #[serde(skip_serializing_if = "AuxData::is_empty")]
    data: AuxData,
}

#[derive(Tabled)]
struct FacetRow {
    #[tabled(rename = "Relation")]
    relation: String,
    #[tabled(rename = "Hexagrams")]
    targets: String,
}

/// Execute show command
pub fn execute(args: ShowArgs, sources: &Sources, format: OutputFormat) -> CliResult<()> {
    let codex = sources.codex()?;
    let id = HexagramId(args.id);
    let hexagram = codex
        .get(id)
        .ok_or_else(|| CliError::NotFound(format!("hexagram {}", id)))?;
    let causal_links = args.causal.then(|| codex.causal_links(id));

    match format {
        OutputFormat::Table => {
            output::print_heading(&format!("Hexagram {}", hexagram));
            for line in draw_lines(hexagram) {
                println!("  {}", line);
            }
            println!();
            println!("  Upper: {}", hexagram.upper_trigram().label());
            println!("  Lower: {}", hexagram.lower_trigram().label());
            println!();
            let mut rows = facet_rows(&codex, hexagram.relationships());
            if let Some(links) = &causal_links {
                rows.push(FacetRow {
                    relation: "causal".to_string(),
                    targets: describe_ids(&codex, links),
                });
            }
            println!("{}", tabled::Table::new(rows));
            if !hexagram.data().is_empty() {
                println!();
                for (key, value) in hexagram.data() {
                    println!("  {} = {}", key, value);
                }
            }
        }
        _ => {
            let report = ShowReport {
                id,
                name: hexagram.name().to_string(),
                lines: hexagram.lines().to_bit_string(),
                upper_trigram: hexagram.upper_trigram().label(),
                lower_trigram: hexagram.lower_trigram().label(),
                relationships: hexagram.relationships().clone(),
                causal_links,
                data: hexagram.data().clone(),
            };
            println!("{}", output::render_structured(&report, format)?);
        }
    }
    Ok(())
}

fn facet_rows(codex: &HexagramCodex, relationships: &Relationships) -> Vec<FacetRow> {
    Relation::ALL
        .iter()
        .map(|&relation| FacetRow {
            relation: relation.to_string(),
            targets: describe_ids(codex, &relationships.targets(relation)),
        })
        .collect()
}

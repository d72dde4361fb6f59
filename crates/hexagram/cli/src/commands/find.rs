//! Lookup by lines

use clap::Args;
use hexagram_types::HexagramLines;
use serde::Serialize;

use super::describe;
use crate::context::Sources;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};

/// Find arguments
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Six lines as a bit string, line 1 first (1 = yang), e.g. 111010
    pub lines: String,
}

#[derive(Serialize)]
struct FindReport {
    lines: String,
    hexagram: Option<String>,
    symmetrical: Vec<String>,
}

/// Execute find command
pub fn execute(args: FindArgs, sources: &Sources, format: OutputFormat) -> CliResult<()> {
    let lines: HexagramLines = args
        .lines
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("{}: {}", args.lines, e)))?;
    let codex = sources.codex()?;
    let hit = codex.find_by_lines(&lines);
    let symmetrical = hit
        .map(|h| {
            h.relationships()
                .symmetrical
                .iter()
                .filter_map(|id| codex.get(*id))
                .map(describe)
                .collect()
        })
        .unwrap_or_default();
    let report = FindReport {
        lines: lines.to_bit_string(),
        hexagram: hit.map(describe),
        symmetrical,
    };

    match format {
        OutputFormat::Table => match &report.hexagram {
            Some(found) => {
                output::print_success(&format!("{} -> {}", report.lines, found));
                if report.symmetrical.len() > 1 {
                    println!("  shared by: {}", report.symmetrical.join(", "));
                }
            }
            None => output::print_warning(&format!("no hexagram with lines {}", report.lines)),
        },
        _ => println!("{}", output::render_structured(&report, format)?),
    }
    Ok(())
}

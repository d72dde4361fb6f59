//! Annotation propagation

use clap::Args;
use hexagram_types::{AuxValue, HexagramId};
use serde::Serialize;
use tabled::Tabled;

use crate::context::Sources;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};

/// Annotate arguments
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Root hexagram id
    pub id: u32,
    /// Annotation key
    pub key: String,
    /// Value (true/false, a number, or text)
    pub value: String,
    /// Relationship hops to propagate
    #[arg(short, long, default_value = "1")]
    pub depth: usize,
}

#[derive(Serialize)]
struct AnnotateReport {
    root: HexagramId,
    key: String,
    value: AuxValue,
    depth: usize,
    writes: usize,
    annotated: Vec<AnnotatedRow>,
}

#[derive(Serialize, Tabled)]
struct AnnotatedRow {
    #[tabled(rename = "Id")]
    id: HexagramId,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Keys")]
    keys: String,
}

/// `candidate` is `key` itself or a `key_<relation>...` key written by propagation.
fn derived_from(candidate: &str, key: &str) -> bool {
    candidate
        .strip_prefix(key)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('_'))
}

/// Execute annotate command
pub fn execute(args: AnnotateArgs, sources: &Sources, format: OutputFormat) -> CliResult<()> {
    let mut codex = sources.codex()?;
    let value: AuxValue = match args.value.parse() {
        Ok(value) => value,
        Err(never) => match never {},
    };
    let root = HexagramId(args.id);
    let writes = codex.annotate_related(root, &args.key, value.clone(), args.depth)?;

    let annotated: Vec<AnnotatedRow> = codex
        .iter()
        .filter_map(|h| {
            let keys: Vec<&str> = h
                .data()
                .keys()
                .filter(|k| derived_from(k, &args.key))
                .map(String::as_str)
                .collect();
            (!keys.is_empty()).then(|| AnnotatedRow {
                id: h.id(),
                name: h.name().to_string(),
                keys: keys.join(", "),
            })
        })
        .collect();

    match format {
        OutputFormat::Table => {
            output::print_success(&format!(
                "{} writes across {} hexagrams (depth {})",
                writes,
                annotated.len(),
                args.depth
            ));
            output::print_rows(annotated, format)?;
        }
        _ => {
            let report = AnnotateReport {
                root,
                key: args.key,
                value,
                depth: args.depth,
                writes,
                annotated,
            };
            println!("{}", output::render_structured(&report, format)?);
        }
    }
    Ok(())
}

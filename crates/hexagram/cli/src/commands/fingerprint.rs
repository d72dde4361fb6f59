//! Index fingerprint

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::context::Sources;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};

/// Fingerprint arguments
#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// Recorded digest (or a prefix of at least 12 characters) to verify against
    #[arg(long)]
    pub expect: Option<String>,
}

#[derive(Serialize)]
struct FingerprintReport {
    fingerprint: String,
    hexagrams: usize,
    distinct_patterns: usize,
}

/// Execute fingerprint command
pub fn execute(args: FingerprintArgs, sources: &Sources, format: OutputFormat) -> CliResult<()> {
    let codex = sources.codex()?;
    let fingerprint = codex.fingerprint()?;
    info!(fingerprint = %fingerprint.short(), "index fingerprint");

    if let Some(expected) = args.expect {
        if !fingerprint.matches(&expected) {
            return Err(CliError::FingerprintMismatch {
                expected,
                actual: fingerprint.to_hex(),
            });
        }
    }

    let report = FingerprintReport {
        fingerprint: fingerprint.to_hex(),
        hexagrams: codex.len(),
        distinct_patterns: codex.index().distinct_patterns(),
    };

    match format {
        OutputFormat::Table => {
            output::print_heading("Index Fingerprint");
            println!("  blake3:            {}", report.fingerprint);
            println!("  hexagrams:         {}", report.hexagrams);
            println!("  distinct patterns: {}", report.distinct_patterns);
        }
        _ => println!("{}", output::render_structured(&report, format)?),
    }
    Ok(())
}

//! CLI subcommands

pub mod annotate;
pub mod find;
pub mod fingerprint;
pub mod grid;
pub mod show;
pub mod trigrams;

use hexagram_engine::{Hexagram, HexagramCodex};
use hexagram_types::HexagramId;

/// `"<id> <name>"` for each id, or `-` when there are none.
pub(crate) fn describe_ids(codex: &HexagramCodex, ids: &[HexagramId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|id| match codex.get(*id) {
            Some(h) => describe(h),
            None => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn describe(hexagram: &Hexagram) -> String {
    format!("{} {}", hexagram.id(), hexagram.name())
}

/// One row per line, upper trigram first.
pub(crate) fn draw_lines(hexagram: &Hexagram) -> Vec<String> {
    hexagram
        .lines()
        .iter()
        .map(|line| if line.is_yang() { "━━━━━━━" } else { "━━━ ━━━" }.to_string())
        .collect()
}

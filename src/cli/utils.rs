//! Convenience helpers for the command handler.

use std::path::{Path, PathBuf};

use punchpattern::PatternSource;

/// Explicit `--output` wins over the name derived from the pattern source.
pub fn resolve_output(source: &PatternSource, explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source.output_path())
}

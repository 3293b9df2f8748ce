use std::io::Write;
use std::path::PathBuf;

use log::{info, warn};
use nmtree_core::{BuildStats, LineParser, NmTreeError, build_tree};
use thiserror::Error;

use crate::args::{OutputFormat, RunConfig};
use crate::render::{TextOptions, render_json, render_text};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("binary argument is required")]
    MissingBinary,

    #[error("missing tool: {tool} ({hint})")]
    ToolMissing { tool: String, hint: String },

    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with status {status}: {stderr}")]
    ToolFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] NmTreeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub malformed_lines: usize,
    pub synthetic_lines: usize,
    pub stats: BuildStats,
}

pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<RunSummary, CliError> {
    let parser = LineParser::new()?;
    let dump = config.source.read_dump()?;

    let parsed = parser.parse_dump(&dump);
    for diagnostic in &parsed.diagnostics {
        warn!("{diagnostic}");
    }

    let mut built = build_tree(&config.root_label, &parsed.symbols);
    info!(
        "{} symbols in {} packages ({} without a package, {} runtime metadata entries skipped)",
        built.stats.grouped_symbols,
        built.stats.package_count,
        built.stats.ungrouped_symbols,
        parsed.synthetic_count
    );
    if config.skip_symbols {
        built.root.drop_symbols();
    }

    let rendered = match config.format {
        OutputFormat::Json => render_json(&built.root)?,
        OutputFormat::Text => render_text(
            &built.root,
            TextOptions {
                order: config.order,
                depth: config.depth,
            },
        ),
    };
    out.write_all(rendered.as_bytes())
        .map_err(CliError::Output)?;
    out.flush().map_err(CliError::Output)?;

    Ok(RunSummary {
        malformed_lines: parsed.diagnostics.len(),
        synthetic_lines: parsed.synthetic_count,
        stats: built.stats,
    })
}

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_MALFORMED_INPUT: i32 = 2;

/// Process status for a finished run; `strict` fails runs that skipped malformed lines.
pub fn exit_status(outcome: &Result<RunSummary, CliError>, strict: bool) -> i32 {
    match outcome {
        Ok(summary) if strict && summary.malformed_lines > 0 => EXIT_MALFORMED_INPUT,
        Ok(_) => 0,
        Err(_) => EXIT_FAILURE,
    }
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nmtree_core::SortKey;

use crate::dump::DumpSource;
use crate::run::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "nmtree",
    version,
    about = "Break a Go binary's symbol table down into a package size tree"
)]
pub struct NmTreeCli {
    /// Binary to analyze with `go tool nm -size`.
    #[arg(short = 'b', long, value_name = "PATH")]
    pub binary: Option<String>,

    /// Read an existing `go tool nm -size` dump instead of running the tool (`-` for stdin).
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Skip emitting granular symbol data.
    #[arg(short = 's', long)]
    pub skip_symbols: bool,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Ordering used by the text output: name or size.
    #[arg(short = 'o', long, default_value_t = SortKey::Name)]
    pub order: SortKey,

    /// Package levels expanded by the text output.
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Go toolchain executable.
    #[arg(long, env = "NMTREE_GO", default_value = "go", value_name = "PATH")]
    pub go: String,

    /// Label for the root node (defaults to the binary or input path).
    #[arg(long, value_name = "LABEL")]
    pub root_label: Option<String>,

    /// Exit with status 2 when the dump contained malformed lines.
    #[arg(long)]
    pub strict: bool,

    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: DumpSource,
    pub root_label: String,
    pub skip_symbols: bool,
    pub format: OutputFormat,
    pub order: SortKey,
    pub depth: Option<usize>,
    pub strict: bool,
}

impl RunConfig {
    pub fn from_cli(cli: NmTreeCli) -> Result<Self, CliError> {
        let binary = cli
            .binary
            .as_deref()
            .map(str::trim)
            .filter(|binary| !binary.is_empty())
            .map(str::to_string);

        let (source, default_label) = match (cli.input, binary) {
            (Some(input), binary) if input.as_os_str() == "-" => (
                DumpSource::Stdin,
                binary.unwrap_or_else(|| "<stdin>".to_string()),
            ),
            (Some(input), binary) => {
                let label = binary.unwrap_or_else(|| input.to_string_lossy().to_string());
                (DumpSource::File(input), label)
            }
            (None, Some(binary)) => (
                DumpSource::GoToolNm {
                    go: cli.go,
                    binary: binary.clone(),
                },
                binary,
            ),
            (None, None) => return Err(CliError::MissingBinary),
        };

        Ok(Self {
            source,
            root_label: cli.root_label.unwrap_or(default_label),
            skip_symbols: cli.skip_symbols,
            format: cli.format,
            order: cli.order,
            depth: cli.depth,
            strict: cli.strict,
        })
    }
}

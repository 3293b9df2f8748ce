use std::path::PathBuf;

use clap::Parser;
use nmtree_core::SortKey;

use crate::args::{NmTreeCli, OutputFormat, RunConfig};
use crate::dump::DumpSource;
use crate::run::CliError;

fn config_from(argv: &[&str]) -> Result<RunConfig, CliError> {
    let mut full = vec!["nmtree"];
    full.extend_from_slice(argv);
    let cli = NmTreeCli::try_parse_from(full).expect("argv parses");
    RunConfig::from_cli(cli)
}

#[test]
fn binary_is_trimmed_and_used_as_root_label() {
    let config = config_from(&["-b", "  ./bin/server ", "--go", "go1.22"]).expect("config");
    assert_eq!(
        config.source,
        DumpSource::GoToolNm {
            go: "go1.22".to_string(),
            binary: "./bin/server".to_string(),
        }
    );
    assert_eq!(config.root_label, "./bin/server");
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.order, SortKey::Name);
    assert!(!config.skip_symbols);
}

#[test]
fn blank_binary_without_input_is_rejected() {
    let err = config_from(&["--binary", "   "]).expect_err("blank binary");
    assert!(matches!(err, CliError::MissingBinary));
    assert_eq!(err.to_string(), "binary argument is required");

    assert!(matches!(config_from(&[]), Err(CliError::MissingBinary)));
}

#[test]
fn input_file_replaces_tool_invocation() {
    let config = config_from(&["-i", "dump.txt", "-s", "-f", "text", "-o", "size"]).expect("config");
    assert_eq!(config.source, DumpSource::File(PathBuf::from("dump.txt")));
    assert_eq!(config.root_label, "dump.txt");
    assert!(config.skip_symbols);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.order, SortKey::Size);
}

#[test]
fn input_with_binary_keeps_binary_label() {
    let config = config_from(&["-i", "dump.txt", "-b", "app"]).expect("config");
    assert_eq!(config.source, DumpSource::File(PathBuf::from("dump.txt")));
    assert_eq!(config.root_label, "app");
}

#[test]
fn dash_input_reads_stdin_and_root_label_overrides() {
    let config = config_from(&["--input", "-", "--root-label", "svc", "--depth", "2", "--strict"])
        .expect("config");
    assert_eq!(config.source, DumpSource::Stdin);
    assert_eq!(config.root_label, "svc");
    assert_eq!(config.depth, Some(2));
    assert!(config.strict);
}

#[test]
fn unknown_order_is_a_parse_error() {
    assert!(NmTreeCli::try_parse_from(["nmtree", "-b", "app", "-o", "weight"]).is_err());
}

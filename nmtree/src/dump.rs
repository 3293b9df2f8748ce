use std::io::Read;
use std::path::PathBuf;

use duct::cmd as duct_cmd;
use log::debug;

use crate::run::CliError;

/// Where the raw `go tool nm -size` text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpSource {
    GoToolNm { go: String, binary: String },
    File(PathBuf),
    Stdin,
}

impl DumpSource {
    pub fn read_dump(&self) -> Result<String, CliError> {
        match self {
            DumpSource::GoToolNm { go, binary } => run_go_tool_nm(go, binary),
            DumpSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| CliError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            DumpSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|source| CliError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

fn run_go_tool_nm(go: &str, binary: &str) -> Result<String, CliError> {
    let go_path = which::which(go).map_err(|_| CliError::ToolMissing {
        tool: go.to_string(),
        hint: "install the Go toolchain or pass --go <PATH>".to_string(),
    })?;
    let display_command = format!("{} tool nm -size {binary}", go_path.display());
    debug!("running {display_command}");

    let output = duct_cmd(go_path.as_path(), ["tool", "nm", "-size", binary])
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
        .map_err(|source| CliError::Spawn {
            command: display_command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(CliError::ToolFailed {
            command: display_command,
            status: output
                .status
                .code()
                .map(|code| code.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

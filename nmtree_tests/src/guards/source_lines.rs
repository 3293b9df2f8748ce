use std::cmp::Reverse;
use std::path::PathBuf;

use super::workspace_scan::list_workspace_rust_files;

#[derive(Debug, Clone)]
pub struct OversizedFile {
    pub file_path: PathBuf,
    pub lines: usize,
}

impl std::fmt::Display for OversizedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} lines -> {}", self.lines, self.file_path.display())
    }
}

/// Workspace source files longer than `max_lines`, longest first.
pub fn files_over_line_limit(max_lines: usize) -> Vec<OversizedFile> {
    let mut oversized = list_workspace_rust_files()
        .into_iter()
        .filter_map(|file_path| {
            let lines = std::fs::read_to_string(&file_path).ok()?.lines().count();
            (lines > max_lines).then_some(OversizedFile { file_path, lines })
        })
        .collect::<Vec<_>>();
    oversized.sort_by(|left, right| {
        (Reverse(left.lines), &left.file_path).cmp(&(Reverse(right.lines), &right.file_path))
    });
    oversized
}

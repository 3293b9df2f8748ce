use std::path::{Path, PathBuf};

fn is_skipped_directory(dir_name: &str) -> bool {
    matches!(dir_name, "target" | ".git" | "snapshots" | "examples")
}

pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn is_crate_source_file(path: &Path) -> bool {
    let path_string = path.to_string_lossy();
    let in_source_dir = path_string.contains("/src/") || path_string.contains("/tests/");
    in_source_dir && path.extension().and_then(|extension| extension.to_str()) == Some("rs")
}

/// Every `.rs` file under a crate's `src/` or `tests/`, sorted.
pub fn list_workspace_rust_files() -> Vec<PathBuf> {
    let mut files = walkdir::WalkDir::new(workspace_root())
        .into_iter()
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !is_skipped_directory(name))
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_crate_source_file(path))
        .collect::<Vec<_>>();
    files.sort();
    files
}

pub mod source_lines;
pub mod workspace_scan;

use nmtree_core::{PackageTreeNode, SortKey, percent_of, sorted_children, sorted_symbols};

use crate::format::format_bytes;

pub fn render_json(root: &PackageTreeNode) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(root)?;
    text.push('\n');
    Ok(text)
}

#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub order: SortKey,
    /// `None` expands every package level.
    pub depth: Option<usize>,
}

pub fn render_text(root: &PackageTreeNode, options: TextOptions) -> String {
    let total = root.accumulated_size;
    let mut out = format!(
        "bin {} | {}\n",
        root.path_label,
        format_bytes(root.accumulated_size)
    );
    render_contents(&mut out, root, 0, total, options);
    out
}

fn render_contents(
    out: &mut String,
    node: &PackageTreeNode,
    level: usize,
    total: u64,
    options: TextOptions,
) {
    if options.depth.is_some_and(|depth| level >= depth) {
        return;
    }
    let indent = "  ".repeat(level + 1);

    for child in sorted_children(node, options.order) {
        out.push_str(&indent);
        out.push_str(&package_line(child, total, options.order));
        out.push('\n');
        render_contents(out, child, level + 1, total, options);
    }
    for symbol in sorted_symbols(node, options.order) {
        let pct = percent_of(symbol.size, total);
        let size = format_bytes(symbol.size);
        let line = match options.order {
            SortKey::Name => format!("{indent}sym {} | {pct:4.2}% | {size}\n", symbol.leaf_name),
            SortKey::Size => format!("{indent}sym {pct:4.2}% | {size} | {}\n", symbol.leaf_name),
        };
        out.push_str(&line);
    }
}

fn package_line(node: &PackageTreeNode, total: u64, order: SortKey) -> String {
    let pct = percent_of(node.accumulated_size, total);
    let size = format_bytes(node.accumulated_size);
    match order {
        SortKey::Name => format!("pkg {} | {pct:5.2}% | {size}", node.path_label),
        SortKey::Size => format!("pkg {pct:5.2}% | {size} | {}", node.path_label),
    }
}

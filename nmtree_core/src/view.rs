use crate::model::{PackageTreeNode, SortKey, SymbolSummary};

pub fn sorted_children(node: &PackageTreeNode, key: SortKey) -> Vec<&PackageTreeNode> {
    let mut children = node.children.values().collect::<Vec<_>>();
    match key {
        SortKey::Name => children.sort_by(|left, right| left.path_label.cmp(&right.path_label)),
        SortKey::Size => children.sort_by(|left, right| {
            right
                .accumulated_size
                .cmp(&left.accumulated_size)
                .then_with(|| left.path_label.cmp(&right.path_label))
        }),
    }
    children
}

pub fn sorted_symbols(node: &PackageTreeNode, key: SortKey) -> Vec<&SymbolSummary> {
    let mut symbols = node.symbols.iter().collect::<Vec<_>>();
    match key {
        SortKey::Name => symbols.sort_by(|left, right| left.leaf_name.cmp(&right.leaf_name)),
        SortKey::Size => symbols.sort_by(|left, right| {
            right
                .size
                .cmp(&left.size)
                .then_with(|| left.leaf_name.cmp(&right.leaf_name))
                .then_with(|| left.kind.cmp(&right.kind))
        }),
    }
    symbols
}

pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64) * 100.0 / (total as f64)
}

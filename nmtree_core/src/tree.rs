use std::collections::BTreeMap;

use log::{debug, warn};

use crate::decompose::PATH_SEPARATOR;
use crate::model::{PackageTreeNode, Symbol, SymbolSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub grouped_symbols: usize,
    pub ungrouped_symbols: usize,
    pub package_count: usize,
    pub node_count: usize,
    pub total_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTree {
    pub root: PackageTreeNode,
    pub stats: BuildStats,
}

struct PackageGroup<'a> {
    segments: &'a [String],
    symbols: Vec<&'a Symbol>,
}

/// Builds the package tree rooted at `root_label`.
///
/// Symbols without path segments are left out of the tree entirely. Groups are
/// inserted in lexicographic package-path order so node creation order is
/// reproducible.
pub fn build_tree(root_label: &str, symbols: &[Symbol]) -> BuiltTree {
    let mut groups = BTreeMap::<String, PackageGroup<'_>>::new();
    let mut stats = BuildStats::default();

    for symbol in symbols {
        if !symbol.is_grouped() {
            debug!("no package for symbol {:?}", symbol.qualified_name);
            stats.ungrouped_symbols += 1;
            continue;
        }
        stats.grouped_symbols += 1;
        groups
            .entry(symbol.package_path())
            .or_insert_with(|| PackageGroup {
                segments: &symbol.path_segments,
                symbols: Vec::new(),
            })
            .symbols
            .push(symbol);
    }

    let mut root = PackageTreeNode::new(root_label);
    for group in groups.values_mut() {
        group
            .symbols
            .sort_by(|left, right| left.leaf_name.cmp(&right.leaf_name));
        let summaries = group
            .symbols
            .iter()
            .map(|symbol| symbol.to_summary())
            .collect::<Vec<_>>();
        insert_group(&mut root, group.segments, 0, summaries);
    }

    stats.package_count = groups.len();
    stats.node_count = root.node_count();
    stats.total_size = root.accumulated_size;
    BuiltTree { root, stats }
}

/// Sizes saturate at `u64::MAX` instead of wrapping.
fn saturating_total(sizes: impl IntoIterator<Item = u64>) -> u64 {
    sizes.into_iter().fold(0u64, u64::saturating_add)
}

/// Descends by the remaining segments and returns the size added below `node`.
fn insert_group(
    node: &mut PackageTreeNode,
    segments: &[String],
    depth: usize,
    summaries: Vec<SymbolSummary>,
) -> u64 {
    let Some(segment) = segments.get(depth) else {
        let added = saturating_total(summaries.iter().map(|summary| summary.size));
        node.symbols.extend(summaries);
        node.own_size = node.own_size.saturating_add(added);
        node.accumulated_size = node.accumulated_size.saturating_add(added);
        if node.accumulated_size == u64::MAX {
            warn!("size of package {} saturated at {}", node.path_label, u64::MAX);
        }
        return added;
    };

    let child = node
        .children
        .entry(segment.clone())
        .or_insert_with(|| PackageTreeNode::new(segments[..=depth].join(PATH_SEPARATOR)));
    let added = insert_group(child, segments, depth + 1, summaries);
    node.accumulated_size = node.accumulated_size.saturating_add(added);
    added
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeMismatch {
    pub path_label: String,
    pub accumulated_size: u64,
    pub expected_size: u64,
}

impl PackageTreeNode {
    /// Clears symbol detail everywhere below this node; sizes are kept.
    pub fn drop_symbols(&mut self) {
        self.symbols = Vec::new();
        for child in self.children.values_mut() {
            child.drop_symbols();
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(PackageTreeNode::node_count)
            .sum::<usize>()
    }

    pub fn find(&self, segments: &[&str]) -> Option<&PackageTreeNode> {
        let mut current = self;
        for segment in segments {
            current = current.children.get(*segment)?;
        }
        Some(current)
    }

    /// First node whose accumulated size is not own size plus its children's
    /// (saturating at `u64::MAX`).
    pub fn check_invariants(&self) -> Option<SizeMismatch> {
        let expected_size = saturating_total(
            std::iter::once(self.own_size)
                .chain(self.children.values().map(|child| child.accumulated_size)),
        );
        if self.accumulated_size != expected_size {
            return Some(SizeMismatch {
                path_label: self.path_label.clone(),
                accumulated_size: self.accumulated_size,
                expected_size,
            });
        }
        self.children.values().find_map(PackageTreeNode::check_invariants)
    }
}

pub mod decompose;
pub mod error;
pub mod model;
pub mod parse;
pub mod tree;
pub mod view;

#[cfg(test)]
mod parse_test;

pub use decompose::{Decomposed, decompose};
pub use error::NmTreeError;
pub use model::{PackageTreeNode, SortKey, Symbol, SymbolSummary};
pub use parse::{LineDiagnostic, LineOutcome, LineParser, ParsedDump};
pub use tree::{BuildStats, BuiltTree, build_tree};
pub use view::{percent_of, sorted_children, sorted_symbols};

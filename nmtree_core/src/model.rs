use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::NmTreeError;

/// One parsed line of the symbol dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub address: Option<u64>,
    pub size: u64,
    pub kind: char,
    pub qualified_name: String,
    pub path_segments: Vec<String>,
    pub leaf_name: String,
}

impl Symbol {
    /// Segments joined back with `/`; empty for symbols without a package.
    pub fn package_path(&self) -> String {
        self.path_segments.join("/")
    }

    pub fn is_grouped(&self) -> bool {
        !self.path_segments.is_empty()
    }

    pub fn display_name(&self) -> String {
        if self.is_grouped() {
            return format!("{}.{}", self.package_path(), self.leaf_name);
        }
        self.leaf_name.clone()
    }

    pub fn to_summary(&self) -> SymbolSummary {
        SymbolSummary {
            size: self.size,
            kind: self.kind,
            leaf_name: self.leaf_name.clone(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address {
            Some(address) => write!(f, "{address:x}")?,
            None => f.write_str("-")?,
        }
        write!(
            f,
            "\t{}\t{}\t{}\t{}",
            self.size,
            self.kind,
            self.package_path(),
            self.leaf_name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSummary {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: char,
    #[serde(rename = "func", default, skip_serializing_if = "String::is_empty")]
    pub leaf_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTreeNode {
    #[serde(rename = "package", default, skip_serializing_if = "String::is_empty")]
    pub path_label: String,
    #[serde(rename = "package_size", default, skip_serializing_if = "is_zero")]
    pub own_size: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub accumulated_size: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<SymbolSummary>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, PackageTreeNode>,
}

impl PackageTreeNode {
    pub fn new(path_label: impl Into<String>) -> Self {
        Self {
            path_label: path_label.into(),
            ..Self::default()
        }
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Size,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
        }
    }
}

impl FromStr for SortKey {
    type Err = NmTreeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            _ => Err(NmTreeError::UnknownSortKey(raw.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

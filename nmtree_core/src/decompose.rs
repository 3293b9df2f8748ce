//! Splits qualified symbol names into package path segments and a leaf name.
//!
//! Names from compiled units look like `example.com/org/repo/pkg.Func` or
//! `pkg.Func`. Path components may themselves contain dots (`gopkg.in/yaml.v3`),
//! so only a dot at or after the final `/` separates the package from the leaf.

/// Separator between package path segments, both in dumped names and in node labels.
pub const PATH_SEPARATOR: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposed {
    pub path_segments: Vec<String>,
    pub leaf_name: String,
}

impl Decomposed {
    fn ungrouped(name: &str) -> Self {
        Self {
            path_segments: Vec::new(),
            leaf_name: name.to_string(),
        }
    }

    fn grouped(qualified_name: &str, package: &str, leaf: &str) -> Self {
        if package.is_empty() {
            return Self::ungrouped(qualified_name);
        }
        Self {
            path_segments: package.split(PATH_SEPARATOR).map(str::to_string).collect(),
            leaf_name: leaf.to_string(),
        }
    }
}

pub fn decompose(qualified_name: &str) -> Decomposed {
    if let Some(last_separator) = qualified_name.rfind(PATH_SEPARATOR) {
        return decompose_path_style(qualified_name, last_separator);
    }
    match qualified_name.split_once('.') {
        Some((package, leaf)) => Decomposed::grouped(qualified_name, package, leaf),
        None => Decomposed::ungrouped(qualified_name),
    }
}

fn decompose_path_style(qualified_name: &str, last_separator: usize) -> Decomposed {
    let Some(dot_offset) = qualified_name[last_separator..].find('.') else {
        return Decomposed::ungrouped(qualified_name);
    };
    let dot_index = last_separator + dot_offset;
    Decomposed::grouped(
        qualified_name,
        &qualified_name[..dot_index],
        &qualified_name[(dot_index + 1)..],
    )
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NmTreeError {
    #[error("failed to compile symbol line grammar: {0}")]
    Grammar(#[from] regex::Error),

    #[error("unknown sort key: {0} (expected name or size)")]
    UnknownSortKey(String),
}

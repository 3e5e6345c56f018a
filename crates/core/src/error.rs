use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while handling curated-table data
#[derive(Error, Debug)]
pub enum CoreError {
    /// Table JSON did not parse
    #[error("malformed map table: {0}")]
    MalformedTable(#[from] serde_json::Error),

    /// A mapping unit carries no replacement text
    #[error("mapping unit has an empty replacement")]
    EmptyReplacement,
}

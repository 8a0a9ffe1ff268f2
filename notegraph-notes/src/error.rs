//! Error types for note processing

/// Error type for reading and writing Markdown notes
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Front matter could not be serialized
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for note operations
pub type Result<T> = std::result::Result<T, NoteError>;

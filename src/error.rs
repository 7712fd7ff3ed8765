use thiserror::Error;

/// Startup failures while loading the question file. Both variants are fatal:
/// the process logs the message and exits.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was readable but contained no `Q:` blocks.
    #[error("no questions found in the file")]
    Empty,
}

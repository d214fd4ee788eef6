// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CountLinesError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CountLinesError>,
    },

    /// No reader was handed to the counter.
    #[error("invalid input: no reader was given")]
    InvalidInput,

    #[error("failed to read from reader: {source}")]
    ReadFailure {
        #[source]
        source: std::io::Error,
    },

    #[error("number of lines exceeds the representable range: {count}")]
    Overflow { count: u64 },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type Result<T> = std::result::Result<T, CountLinesError>;

impl CountLinesError {
    /// Wraps a failed `read` call.
    pub fn read_failure(source: std::io::Error) -> Self {
        Self::ReadFailure { source }
    }

    /// Returns the innermost error, skipping any `Context` layers.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<std::io::Error> for CountLinesError {
    fn from(err: std::io::Error) -> Self {
        Self::read_failure(err)
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CountLinesError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CountLinesError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CountLinesError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

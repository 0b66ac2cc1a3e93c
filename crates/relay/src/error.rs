use std::error::Error as StdError;

/// Crate-wide result type for relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed relay errors shared by the router and platform adapters.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The interaction payload is missing something the flow needs.
    #[error("invalid interaction input: {message}")]
    InvalidInput { message: String },

    /// Reading or writing the state file failed.
    #[error(transparent)]
    Config(#[from] tellbot_config::Error),

    /// Wrapped source error from the platform API.
    #[error("relay operation failed: {context}: {source}")]
    External {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn invalid_input(message: impl std::fmt::Display) -> Self {
        Self::InvalidInput {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn external(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

use thiserror::Error;

/// Boxed cause carried by [`Error::BackendUnavailable`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport failure or non-success status from the backend API.
    #[error("backend unavailable ({url}): {source}")]
    BackendUnavailable {
        url: String,
        #[source]
        source: BoxError,
    },

    /// A named entity requested by the user does not exist.
    #[error("{entity} not found: {name}")]
    NotFound { entity: &'static str, name: String },

    /// The backend answered, but not with something we can read.
    #[error("malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    /// The chat platform refused or failed to deliver a message.
    #[error("delivery failed: {0}")]
    DeliveryFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap a transport or status error for the given request URL.
    pub fn backend(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::BackendUnavailable {
            url: url.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

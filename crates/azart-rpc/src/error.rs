use std::path::PathBuf;

/// Failure to build a client from its configuration. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid url `{input}`: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("unsupported connection scheme `{0}`; expected http or https")]
    UnsupportedScheme(String),

    #[error("cannot load CA bundle {}: {reason}", path.display())]
    CaBundle { path: PathBuf, reason: String },

    #[error("cannot build HTTP client: {0}")]
    HttpClient(String),
}

/// Outcome of a failed RPC exchange.
///
/// `Daemon` carries the daemon's own code and message verbatim; callers match
/// on documented azartd error codes, so neither field is ever rewritten.
/// Everything that did not produce a usable daemon error object is
/// `Transport`, with the HTTP status as code (0 when no response arrived).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    #[error("azartd error {code}: {message}")]
    Daemon { code: i64, message: String },

    #[error("transport error {code}: {message}")]
    Transport { code: u16, message: String },
}

impl RpcError {
    pub fn code(&self) -> i64 {
        match self {
            Self::Daemon { code, .. } => *code,
            Self::Transport { code, .. } => i64::from(*code),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Daemon { message, .. } | Self::Transport { message, .. } => message,
        }
    }

    pub fn is_daemon(&self) -> bool {
        matches!(self, Self::Daemon { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount {0} does not fit in a subunit count")]
    Overflow(String),

    #[error("invalid amount `{input}`: {reason}")]
    Parse { input: String, reason: String },
}

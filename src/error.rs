//! Unified error types for ai-visibility.
//!
//! Every failure that can happen between a submitted query and a rendered
//! result is expressed as a [`VisibilityError`]. The request orchestrator
//! converts any of them into a single user-visible line with
//! [`VisibilityError::user_message`]; nothing escapes to crash the view.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown when the service fails without telling us why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze URL";

/// Message shown for an empty or whitespace-only query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a URL";

/// Message shown when a successful response cannot be read at all.
pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "The analysis service returned an unreadable response";

/// Main error type for ai-visibility operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VisibilityError {
    /// Input rejected locally, before any network traffic
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Network failure or a non-2xx response without a readable message
    #[error("Request failed: {context}")]
    Transport {
        context: String,
        #[source]
        source: TransportErrorKind,
    },

    /// Non-2xx response carrying a structured `{error: ...}` message
    #[error("Analysis service returned {status}: {message}")]
    ServerReported { status: u16, message: String },

    /// 2xx response whose body could not be interpreted
    #[error("Malformed analysis result: {0}")]
    MalformedResult(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific transport error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {status}")]
    Status { status: u16, body: String },

    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for ai-visibility operations
pub type Result<T> = std::result::Result<T, VisibilityError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl VisibilityError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create the validation error for an empty query
    #[must_use]
    pub fn empty_query() -> Self {
        Self::Validation(EMPTY_QUERY_MESSAGE.to_string())
    }

    /// Create a transport error with context
    pub fn transport(context: impl Into<String>, source: TransportErrorKind) -> Self {
        Self::Transport {
            context: context.into(),
            source,
        }
    }

    /// Create a server-reported error
    pub fn server_reported(status: u16, message: impl Into<String>) -> Self {
        Self::ServerReported {
            status,
            message: message.into(),
        }
    }

    /// Create a malformed-result error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResult(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// The single line shown to the user for this error.
    ///
    /// Validation and server-reported messages are surfaced verbatim;
    /// transport failures collapse to [`GENERIC_FAILURE_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::ServerReported { message, .. } => message.clone(),
            Self::Transport { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::MalformedResult(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
            Self::Config(msg) => format!("Invalid configuration: {msg}"),
            Self::Io { message, .. } => message.clone(),
        }
    }

    /// Whether this error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for VisibilityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for VisibilityError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResult(err.to_string())
    }
}

impl From<reqwest::Error> for VisibilityError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(
            "sending analysis request",
            TransportErrorKind::Network(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, creating a
/// chain that shows the path through the code. Errors without a context slot
/// (server-reported messages) pass through untouched so that the text shown to
/// the user stays verbatim.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<VisibilityError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: VisibilityError, new_ctx: &str) -> VisibilityError {
    match err {
        VisibilityError::Transport {
            context: existing,
            source,
        } => VisibilityError::Transport {
            context: chain_context(new_ctx, &existing),
            source,
        },
        VisibilityError::Io {
            path,
            message,
            source,
        } => VisibilityError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        VisibilityError::MalformedResult(msg) => {
            VisibilityError::MalformedResult(chain_context(new_ctx, &msg))
        }
        VisibilityError::Config(msg) => VisibilityError::Config(chain_context(new_ctx, &msg)),
        other @ (VisibilityError::Validation(_) | VisibilityError::ServerReported { .. }) => {
            other
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

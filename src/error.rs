use crate::kv::StoreError;
use thiserror::Error;

/// Longest body excerpt carried by response errors.
const BODY_EXCERPT_LIMIT: usize = 256;

/// Structured error context for configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field or variable that caused the error (e.g., "XfyunAppid", "lfAsrSecret")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected format)
    pub details: Option<String>,
    /// Source of the error (e.g., "xfyun", "kv")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for both clients.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Credentials JSON (or any other JSON input) could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response body did not decode into the requested shape.
    #[error("xfyun response could not be decoded: HTTP {status}: {body}")]
    UndecodableResponse { status: u16, body: String },

    /// The response decoded but carried no status code.
    #[error("xfyun response has no code: HTTP {status}: {body}")]
    MissingResponseCode { status: u16, body: String },

    /// The API answered with a non-success code.
    #[error("xfyun api: {code} {desc_info}")]
    Api { code: String, desc_info: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Lossy, length-capped rendering of a response body for error messages.
pub(crate) fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= BODY_EXCERPT_LIMIT {
        return text.into_owned();
    }
    let mut cut: String = text.chars().take(BODY_EXCERPT_LIMIT).collect();
    cut.push_str("...");
    cut
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Build an API failure from a decoded `{code, descInfo}` pair.
    pub fn api(code: impl Into<String>, desc_info: impl Into<String>) -> Self {
        Error::Api {
            code: code.into(),
            desc_info: desc_info.into(),
        }
    }

    /// True for both "body did not decode" and "body had no code".
    ///
    /// Callers that only care about the coarse category (the response was not a
    /// usable API envelope) match on this instead of the two variants.
    pub fn is_transport_or_decoding(&self) -> bool {
        matches!(
            self,
            Error::UndecodableResponse { .. } | Error::MissingResponseCode { .. }
        )
    }

    /// True when a store `get` hit a missing key.
    pub fn is_nil(&self) -> bool {
        matches!(self, Error::Store(StoreError::Nil))
    }

    /// The API code carried by an [`Error::Api`].
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

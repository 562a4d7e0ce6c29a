//! Error types for litlens.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. The original tool signaled failure with string prefixes
//! ("ERROR: ...", "AI Analysis Error: ..."); these tagged types replace that
//! convention.

use std::time::Duration;

/// Errors from PDF text extraction.
///
/// Extraction failure is terminal for a file: there is no retry, and the
/// failure is surfaced to the user immediately.
#[derive(thiserror::Error, Debug)]
pub enum ExtractionError {
    /// No page of the document yielded any extractable text (e.g., a
    /// scanned image with no embedded text layer).
    #[error("no extractable text found in PDF")]
    NoText,

    /// The underlying PDF parse failed.
    #[error("failed to parse PDF: {message}")]
    Parse {
        /// Human-readable message from the parser.
        message: String,
    },

    /// The input does not look like a PDF at all.
    #[error("not a PDF file: {name}")]
    NotPdf {
        /// Name of the offending input.
        name: String,
    },
}

impl ExtractionError {
    /// Create a parse error from any displayable source.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    /// Create a not-a-PDF error.
    #[must_use]
    pub fn not_pdf(name: impl Into<String>) -> Self {
        Self::NotPdf { name: name.into() }
    }
}

/// Errors from the Gemini API client.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid request (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the API
        message: String,
    },

    /// Authentication failed (401/403 response)
    #[error("Authentication failed: {message}")]
    Auth {
        /// Error message from the API
        message: String,
    },

    /// Rate limited by the API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retrying manually
        retry_after: Duration,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The API returned no candidates or no text parts.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ModelError {
    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create an authentication error.
    #[must_use]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth { message: message.into() }
    }

    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from analysis, comparison, and chat operations.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error extracting text from a PDF
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Error from the Gemini client
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Filesystem error (report file, input file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly notice for inline display.
    ///
    /// Both failure kinds are recovered where they occur and shown to the
    /// user; neither escalates to a crash.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Extraction(ExtractionError::NoText) => {
                "Failed to extract text from the PDF. Please try another file.".to_string()
            }
            Self::Extraction(ExtractionError::NotPdf { name }) => {
                format!("'{name}' is not a PDF file. Only PDF input is accepted.")
            }
            Self::Model(ModelError::RateLimited { retry_after }) => {
                format!("The model is rate limited. Wait {retry_after:?} and re-submit.")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractionError>;

/// Result type alias for model client operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

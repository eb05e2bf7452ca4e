//! Error types for BMC client operations.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to a BMC or resolving one.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No client constructor is registered for the vendor tag.
    #[error("Unsupported vendor: {vendor}")]
    UnsupportedVendor { vendor: String },

    /// Transport-level failure: DNS, connection refused, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 401: bad credentials.
    #[error("Authentication failed at {url}")]
    AuthenticationFailed { url: String },

    /// HTTP 403: valid credentials, insufficient privileges.
    #[error("Authorization denied at {url}")]
    AuthorizationDenied { url: String },

    /// HTTP 404: usually a wrong endpoint shape for this firmware.
    #[error("Resource not found at {url}")]
    NotFound { url: String },

    /// Any other non-2xx response.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Malformed or unexpected response body.
    #[error("Invalid response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Domain precondition: storage inventory from a powered-off server
    /// would look like a legitimate empty inventory, so we refuse.
    #[error("Server {host} is not powered on (state: {state})")]
    NotPoweredOn { host: String, state: String },

    /// Connection parameters could not be turned into a client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Classify a non-success HTTP response into an error variant.
    pub fn classify_status(status: u16, url: String, message: String) -> Self {
        match status {
            401 => Self::AuthenticationFailed { url },
            403 => Self::AuthorizationDenied { url },
            404 => Self::NotFound { url },
            _ => Self::Api {
                status,
                url,
                message,
            },
        }
    }

    /// Check if this error indicates an authentication/authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. } | Self::AuthorizationDenied { .. }
        )
    }

    /// Stable machine-readable error kind, used in error records attached to
    /// a server in aggregate output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedVendor { .. } => "UnsupportedVendor",
            Self::Http(_) => "TransportError",
            Self::AuthenticationFailed { .. } => "AuthenticationError",
            Self::AuthorizationDenied { .. } => "AuthorizationError",
            Self::NotFound { .. } => "NotFoundError",
            Self::Api { .. } => "ApiError",
            Self::Decode { .. } => "DecodeError",
            Self::NotPoweredOn { .. } => "DomainPreconditionFailed",
            Self::InvalidUrl(_) => "InvalidUrl",
        }
    }
}

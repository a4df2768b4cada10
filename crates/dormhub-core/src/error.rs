//! The error type shared by every DormHub crate.
//!
//! Backend responses, transport failures, decode failures and local checks
//! all end up as an [`AppError`] tagged with an [`ErrorKind`].

use std::fmt;
use thiserror::Error;

/// What went wrong, coarse enough to pick a notice title from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// `404`, or an unknown route.
    NotFound,
    /// `401`, or a login that did not produce a session.
    Authentication,
    /// `403`, or a local guard refused the action.
    Authorization,
    /// `400`/`422`, or a form rejected before sending.
    Validation,
    /// `409`: duplicate room number, email already registered.
    Conflict,
    /// Local failure, such as a prompt that could not read stdin.
    Internal,
    /// Bad or unreadable configuration.
    Configuration,
    /// No stored token, or the session was replaced mid-request.
    Session,
    /// The backend sent a body that does not decode.
    Serialization,
    /// The backend answered with an error.
    ExternalService,
    /// The backend could not be reached.
    ServiceUnavailable,
}

impl ErrorKind {
    /// Map an HTTP status code returned by the backend to an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 => Self::Authentication,
            403 => Self::Authorization,
            404 => Self::NotFound,
            409 => Self::Conflict,
            503 => Self::ServiceUnavailable,
            _ => Self::ExternalService,
        }
    }

    /// Short human-readable title used when presenting the error to a user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotFound => "Not Found",
            Self::Authentication => "Authentication Required",
            Self::Authorization => "Access Denied",
            Self::Validation => "Invalid Input",
            Self::Conflict => "Conflict",
            Self::Internal => "Unexpected Error",
            Self::Configuration => "Configuration Error",
            Self::Session => "Session Error",
            Self::Serialization => "Invalid Response",
            Self::ExternalService => "Server Error",
            Self::ServiceUnavailable => "Connection Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Session => write!(f, "SESSION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
        }
    }
}

/// The unified application error used throughout DormHub.
///
/// Backend failures keep the raw response body in `details` so it can be
/// shown alongside the short message.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Category.
    pub kind: ErrorKind,
    /// Short message shown to the user.
    pub message: String,
    /// Raw details, usually the backend error body.
    pub details: Option<String>,
    /// HTTP status returned by the backend, if any.
    pub status: Option<u16>,
    /// Underlying cause, dropped on clone.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// An error of `kind` carrying only a message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            status: None,
            source: None,
        }
    }

    /// An error wrapping `source`.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create an error from a non-success backend response.
    pub fn from_response(status: u16, message: impl Into<String>, body: Option<String>) -> Self {
        Self {
            kind: ErrorKind::from_status(status),
            message: message.into(),
            details: body.filter(|b| !b.trim().is_empty()),
            status: Some(status),
            source: None,
        }
    }

    /// Attach raw details to this error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a session error.
    pub fn session(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Session, message)
    }

    /// Create a service-unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    /// Whether the backend rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            status: self.status,
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("Malformed JSON: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Could not read configuration: {err}"),
            err,
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::with_source(ErrorKind::Validation, format!("Invalid input: {err}"), err)
    }
}

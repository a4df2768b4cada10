//! Login outcomes and classification of login failures.
//!
//! The backend reports login problems only as free text, so failures are
//! classified by matching that text. The substrings below are part of the
//! contract with the backend and must not be changed without it.

use std::fmt;

use serde::{Deserialize, Serialize};

use dormhub_core::error::AppError;
use dormhub_entity::account::{Account, AccountStatus};

const MSG_NOT_FOUND: &str = "No account found with this email address.";
const MSG_WRONG_CREDENTIALS: &str = "Email or password is incorrect.";
const MSG_PENDING: &str =
    "Your account is pending approval. Please wait for an administrator to approve your registration.";
const MSG_SUSPENDED: &str = "Your account has been suspended. Please contact the administrator.";
const MSG_REJECTED: &str =
    "Your registration has been rejected. Please contact the administrator for more information.";
const MSG_DELETED: &str = "This account has been deleted. Please contact the administrator.";
const MSG_NOT_ACTIVE: &str = "Your account is not active. Please contact the administrator.";
const MSG_GENERIC: &str = "Login failed. Please try again later.";
const MSG_CANCELLED: &str = "Login was cancelled by a newer request.";

/// Category of a failed login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No account with that email.
    NotFound,
    /// Email or password wrong.
    WrongCredentials,
    /// Account awaits approval.
    PendingApproval,
    /// Account suspended.
    Suspended,
    /// Registration rejected.
    Rejected,
    /// Account deleted.
    Deleted,
    /// Account in some other non-active state.
    NotActive,
    /// Anything else, including transport failures.
    Generic,
    /// Superseded by a logout or a newer login while in flight.
    Cancelled,
}

impl FailureKind {
    /// Classify a backend error message.
    ///
    /// Matching is case-insensitive and the first matching category wins,
    /// in declaration order.
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        let has = |needle: &str| text.contains(needle);

        if has("not found") || has("does not exist") || has("no account") {
            Self::NotFound
        } else if has("incorrect") || has("invalid") || has("wrong") {
            Self::WrongCredentials
        } else if has("pending") {
            Self::PendingApproval
        } else if has("suspended") {
            Self::Suspended
        } else if has("rejected") {
            Self::Rejected
        } else if has("deleted") {
            Self::Deleted
        } else if has("not active") || has("inactive") {
            Self::NotActive
        } else {
            Self::Generic
        }
    }

    /// The message shown to the user for this category.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => MSG_NOT_FOUND,
            Self::WrongCredentials => MSG_WRONG_CREDENTIALS,
            Self::PendingApproval => MSG_PENDING,
            Self::Suspended => MSG_SUSPENDED,
            Self::Rejected => MSG_REJECTED,
            Self::Deleted => MSG_DELETED,
            Self::NotActive => MSG_NOT_ACTIVE,
            Self::Generic => MSG_GENERIC,
            Self::Cancelled => MSG_CANCELLED,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotFound => "not_found",
            Self::WrongCredentials => "wrong_credentials",
            Self::PendingApproval => "pending_approval",
            Self::Suspended => "suspended",
            Self::Rejected => "rejected",
            Self::Deleted => "deleted",
            Self::NotActive => "not_active",
            Self::Generic => "generic",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// A refused login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginFailure {
    /// Category.
    pub kind: FailureKind,
    /// Human-readable message.
    pub error: String,
    /// Account status, when the refusal came from a non-active account.
    pub status: Option<AccountStatus>,
    /// Raw backend body, when there was one.
    pub details: Option<String>,
}

impl LoginFailure {
    /// Refusal because the authenticated account is not `Active`.
    pub fn for_status(status: AccountStatus) -> Self {
        let (kind, error) = match &status {
            AccountStatus::Pending => (FailureKind::PendingApproval, MSG_PENDING.to_string()),
            AccountStatus::Suspended => (FailureKind::Suspended, MSG_SUSPENDED.to_string()),
            AccountStatus::Rejected => (FailureKind::Rejected, MSG_REJECTED.to_string()),
            other => (
                FailureKind::NotActive,
                format!(
                    "Your account is not active (status: {other}). Please contact the administrator."
                ),
            ),
        };
        Self {
            kind,
            error,
            status: Some(status),
            details: None,
        }
    }

    /// Refusal derived from a backend or transport error.
    pub fn from_error(err: &AppError) -> Self {
        let kind = FailureKind::classify(&err.message);
        Self {
            kind,
            error: kind.message().to_string(),
            status: None,
            details: err.details.clone(),
        }
    }

    /// Refusal because a newer operation superseded this login.
    pub fn cancelled() -> Self {
        Self {
            kind: FailureKind::Cancelled,
            error: MSG_CANCELLED.to_string(),
            status: None,
            details: None,
        }
    }
}

impl fmt::Display for LoginFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Result of [`crate::Authenticator::login`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Logged in; credentials persisted and session populated.
    Success {
        /// The logged-in account.
        user: Account,
    },
    /// Refused; nothing persisted.
    Failure(LoginFailure),
}

impl LoginOutcome {
    /// Whether the login went through.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The logged-in account, if successful.
    pub fn user(&self) -> Option<&Account> {
        match self {
            Self::Success { user } => Some(user),
            Self::Failure(_) => None,
        }
    }

    /// The refusal, if unsuccessful.
    pub fn failure(&self) -> Option<&LoginFailure> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(f) => Some(f),
        }
    }
}

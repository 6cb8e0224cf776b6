//! Error handling for the filter framework.
//!
//! Parsing and translation errors carry enough context for a handler to
//! produce a 400-class response naming the filter and the offending value.
//! Internal errors (translator misrouting, database failures) are logged via
//! `tracing` and sanitized before leaving the process: users never see
//! database details or dispatch internals.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// Error type for filter parsing, translation, and search execution.
#[derive(Debug)]
pub enum FilterError {
    /// The identifier is absent from the registry. A client/configuration
    /// error, distinct from a malformed value for a known filter.
    UnknownFilterType {
        /// The identifier that failed the registry lookup
        identifier: String,
    },

    /// The filter type is known but its raw value failed parsing.
    MalformedValue {
        /// Identifier of the filter whose value was rejected
        filter: &'static str,
        /// The offending raw value, for diagnostics
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// A filter value was routed to a translator registered for a different
    /// kind. This is a programming error in registry population, not user
    /// input; it is logged at error level and surfaced as a 500.
    TranslationTypeMismatch {
        /// Identifier the translator was registered under
        translator: &'static str,
        /// Identifier of the filter value it actually received
        filter: &'static str,
    },

    /// Query execution against the datastore failed (details logged, not
    /// exposed).
    Database {
        /// Internal error (logged, not sent to the user)
        internal: DbErr,
    },
}

impl FilterError {
    pub fn unknown(identifier: impl Into<String>) -> Self {
        Self::UnknownFilterType {
            identifier: identifier.into(),
        }
    }

    pub fn malformed(
        filter: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedValue {
            filter,
            value: value.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn type_mismatch(translator: &'static str, filter: &'static str) -> Self {
        Self::TranslationTypeMismatch { translator, filter }
    }

    #[must_use]
    pub fn database(err: DbErr) -> Self {
        Self::Database { internal: err }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownFilterType { .. } | Self::MalformedValue { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::TranslationTypeMismatch { .. } | Self::Database { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-facing message (sanitized).
    fn user_message(&self) -> String {
        match self {
            Self::UnknownFilterType { identifier } => {
                format!("unknown filter type '{identifier}'")
            }
            Self::MalformedValue {
                filter,
                value,
                reason,
            } => {
                format!("invalid value for filter '{filter}': '{value}' ({reason})")
            }
            Self::TranslationTypeMismatch { .. } => "an internal error occurred".to_string(),
            Self::Database { .. } => "a database error occurred".to_string(),
        }
    }

    /// Log internal details. Only the mismatch and database variants carry
    /// information that must not reach the client.
    fn log_internal(&self) {
        match self {
            Self::TranslationTypeMismatch { translator, filter } => {
                tracing::error!(
                    translator,
                    filter,
                    "filter value routed to translator for a different kind"
                );
            }
            Self::Database { internal } => {
                tracing::error!(error = ?internal, "search query failed");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "filter input rejected"
                );
            }
        }
    }
}

/// Error response sent to users (sanitized).
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for FilterError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for FilterError {}

impl From<DbErr> for FilterError {
    fn from(err: DbErr) -> Self {
        Self::database(err)
    }
}

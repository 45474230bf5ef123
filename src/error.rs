//! Application Error Types
//!
//! This module defines the error types used by the request pipeline.
//! Every error that can abort a request carries enough information for the
//! error page: a status code and a human-readable message. The message is
//! the only part of an error that may reach the client; stack traces and
//! source chains stay in the server log.
//!
//! # Error Categories
//!
//! - Catalog errors (`CatalogFetch`, `CatalogShape`) - raised by a catalog
//!   source and recovered by the locale loader before they reach a response
//! - `Handler` - a route action or pipeline step failed with an explicit
//!   status code
//! - `Render` - markup or envelope assembly failed
//! - `Serialization` - store state could not be serialized for hydration

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised inside the request pipeline.
///
/// Catalog variants never escape the locale loader; everything else is
/// forwarded to the error page handler, which maps it to a response via
/// [`AppError::status`].
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP transport failure while fetching a message catalog
    #[error("catalog fetch failed: {0}")]
    CatalogFetch(#[from] reqwest::Error),

    /// A catalog source returned a body that does not match its contract
    #[error("malformed catalog payload: {message}")]
    CatalogShape {
        /// What was wrong with the payload
        message: String,
    },

    /// A route action or pipeline step failed with an explicit status
    #[error("{message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Markup or document assembly failed
    #[error("render failed: {message}")]
    Render {
        /// Human-readable error message
        message: String,
    },

    /// Store state could not be serialized for client hydration
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Create a handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// Create a catalog shape error
    pub fn catalog_shape(message: impl Into<String>) -> Self {
        Self::CatalogShape {
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// The status code the error page should respond with.
    ///
    /// Errors without a declared status map to 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Handler { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

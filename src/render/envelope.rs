//! Render envelope.

use axum::http::StatusCode;

use crate::intl::Locale;

/// The aggregated output of one successfully rendered request.
///
/// Assembled once after route resolution, immutable afterwards, and
/// consumed exactly once by [`crate::render::render_document`]. Redirects
/// never construct one.
#[derive(Debug)]
pub struct RenderEnvelope {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Resolved locale, rendered as the `<html lang>` attribute
    pub lang: Locale,
    /// Server-rendered application markup
    pub body: String,
    /// Critical CSS collected while rendering
    pub css: String,
    /// Script bundle URLs, in embed order
    pub scripts: Vec<String>,
    /// Serialized store state for client hydration
    pub state: String,
    /// Response status
    pub status: StatusCode,
}

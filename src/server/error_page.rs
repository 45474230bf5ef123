//! Terminal error handler.
//!
//! Invoked when the render pipeline fails. Logs the error chain
//! server-side, then renders a minimal static document in the request's
//! negotiated locale carrying only the error's message text. This is the
//! end of the line: nothing in here can fail, so the client always gets
//! exactly one response.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::intl::Locale;
use crate::render::render_error_document;

const ERROR_PAGE_CSS: &str = "\
.layout{margin:0 auto;max-width:60rem;padding:2rem 1rem;font-family:sans-serif}\
h1{color:#900}";

/// Render the error response for a failed request.
pub fn respond(locale: &Locale, error: &AppError) -> Response {
    let status = error.status();
    tracing::error!(%status, error = ?error, "request pipeline failed");

    let title = status
        .canonical_reason()
        .unwrap_or("Internal Server Error");
    let html = render_error_document(locale, title, &error.to_string(), ERROR_PAGE_CSS);
    (status, Html(html)).into_response()
}

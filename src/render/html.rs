//! HTML document writer.
//!
//! Renders the full document around a [`RenderEnvelope`]: head metadata,
//! the inline critical-CSS block, the application markup, the hydration
//! state script, bundle script tags, and the optional analytics snippet.
//! Also renders the minimal error document used by the terminal error
//! handler.

use crate::intl::Locale;
use crate::render::RenderEnvelope;

/// Escape text for an HTML text or attribute position.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Make a JSON string safe for embedding in a `<script>` element.
///
/// `<` becomes `\u003c`, which is equivalent JSON but can never form a
/// `</script>` terminator or an HTML comment opener inside the document.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Render the full HTML document for one request.
///
/// Consumes the envelope; it has no further use once the document exists.
pub fn render_document(envelope: RenderEnvelope, analytics: Option<&str>) -> String {
    let mut scripts = String::new();
    for src in &envelope.scripts {
        scripts.push_str(&format!("<script src=\"{}\"></script>", escape(src)));
    }

    let analytics_snippet = analytics.map(analytics_snippet).unwrap_or_default();

    format!(
        concat!(
            "<!doctype html>",
            "<html lang=\"{lang}\">",
            "<head>",
            "<meta charset=\"utf-8\"/>",
            "<meta http-equiv=\"x-ua-compatible\" content=\"ie=edge\"/>",
            "<title>{title}</title>",
            "<meta name=\"description\" content=\"{description}\"/>",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>",
            "<style id=\"css\">{css}</style>",
            "</head>",
            "<body>",
            "<div id=\"app\">{body}</div>",
            "<script>window.APP_STATE={state}</script>",
            "{scripts}",
            "{analytics}",
            "</body>",
            "</html>",
        ),
        lang = escape(envelope.lang.as_str()),
        title = escape(&envelope.title),
        description = escape(&envelope.description),
        css = envelope.css,
        body = envelope.body,
        state = script_safe_json(&envelope.state),
        scripts = scripts,
        analytics = analytics_snippet,
    )
}

/// Render the minimal error document.
///
/// Static markup only: no scripts, no hydration state, nothing that could
/// itself fail. The message is the error's display text, never a trace.
pub fn render_error_document(lang: &Locale, title: &str, message: &str, css: &str) -> String {
    format!(
        concat!(
            "<!doctype html>",
            "<html lang=\"{lang}\">",
            "<head>",
            "<meta charset=\"utf-8\"/>",
            "<title>{title}</title>",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>",
            "<style id=\"css\">{css}</style>",
            "</head>",
            "<body>",
            "<div id=\"app\">",
            "<h1>{title}</h1>",
            "<p>{message}</p>",
            "</div>",
            "</body>",
            "</html>",
        ),
        lang = escape(lang.as_str()),
        title = escape(title),
        message = escape(message),
        css = css,
    )
}

fn analytics_snippet(tracking_id: &str) -> String {
    format!(
        concat!(
            "<script>",
            "window.ga=function(){{ga.q.push(arguments)}};ga.q=[];ga.l=+new Date;",
            "ga('create','{id}','auto');ga('send','pageview')",
            "</script>",
            "<script src=\"https://www.google-analytics.com/analytics.js\" async defer></script>",
        ),
        id = escape(tracking_id),
    )
}

//! Server-side rendering handler.
//!
//! The catch-all GET entry point and the per-request pipeline behind it.
//! The pipeline is linear with one branch: init the store, resolve the
//! locale and load its catalog, resolve the route, then either redirect or
//! render. Every error from the pipeline is routed to the error page
//! exactly once; the client never sees a raw failure.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::intl::{load_locale, Locale};
use crate::render::{render_document, CssCollector, RenderEnvelope};
use crate::routes::{RouteContext, RouteResolution};
use crate::server::error_page;
use crate::server::middleware::{
    lang_cookie, language_switch_target, parse_query, request_language,
};
use crate::server::AppState;
use crate::store::Store;

/// Handle `GET *`.
///
/// Negotiates the locale up front so even a failing pipeline can render a
/// localized error page, then runs the render pipeline and maps any error
/// to the terminal error handler.
pub async fn render_page(
    State(app): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let query = parse_query(uri.query());
    let locale = request_language(&app.config.locales, &headers, &query);

    // Language-switch URLs pin the choice and bounce home before any
    // rendering happens.
    if let Some(chosen) = language_switch_target(&app.config.locales, uri.path()) {
        tracing::debug!(locale = %chosen, "language switch requested");
        return language_switch_response(&chosen);
    }

    match render_pipeline(&app, uri.path(), &query, locale.clone()).await {
        Ok(response) => response,
        Err(error) => error_page::respond(&locale, &error),
    }
}

/// Steps 1-5 of the request lifecycle.
async fn render_pipeline(
    app: &AppState,
    path: &str,
    query: &HashMap<String, String>,
    locale: Locale,
) -> Result<Response, AppError> {
    // 1. Init: a fresh store seeded with the server timestamp and the
    //    configured locale list.
    let initial_now = chrono::Utc::now().timestamp_millis();
    let mut store = Store::new(initial_now, &app.config.locales, locale.clone());

    // 2. Locale resolution. A failed load degrades the catalog, it does
    //    not abort the request.
    let load = load_locale(app.source.as_ref(), &locale).await;
    let catalog_loaded = load.is_loaded();
    store.set_locale_load(load);

    // 3. Route resolution.
    let mut css = CssCollector::new();
    let mut ctx = RouteContext::new(&mut store, &mut css, &app.config.locales, query);
    let resolution = app.routes.resolve(path, &mut ctx).await?;
    drop(ctx);

    let payload = match resolution {
        RouteResolution::Redirect { to, status } => {
            let status = status.unwrap_or(StatusCode::FOUND);
            tracing::debug!(%status, location = %to, "redirecting");
            return redirect_response(status, &to);
        }
        RouteResolution::Page(payload) => payload,
    };

    // 4. Render: assemble the envelope.
    let envelope = RenderEnvelope {
        title: payload.title,
        description: payload.description,
        lang: locale.clone(),
        body: payload.body,
        css: css.into_css(),
        scripts: app.assets.scripts_for(payload.chunk.as_deref()),
        state: store.to_json()?,
        status: payload.status.unwrap_or(StatusCode::OK),
    };

    // 5. Respond.
    let status = envelope.status;
    let html = render_document(envelope, app.config.analytics.as_deref());
    let mut response = (status, Html(html)).into_response();
    if catalog_loaded {
        response
            .headers_mut()
            .append(header::SET_COOKIE, cookie_value(&locale)?);
    }
    Ok(response)
}

fn redirect_response(status: StatusCode, location: &str) -> Result<Response, AppError> {
    Response::builder()
        .status(status)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .map_err(|error| AppError::render(error.to_string()))
}

fn language_switch_response(locale: &Locale) -> Response {
    let mut response = (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response();
    if let Ok(cookie) = cookie_value(locale) {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

fn cookie_value(locale: &Locale) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&lang_cookie(locale))
        .map_err(|error| AppError::render(error.to_string()))
}

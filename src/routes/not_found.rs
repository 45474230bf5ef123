//! Not-found page.
//!
//! Terminal resolution for paths no route matches. A page like any other,
//! just with a 404 status; it is not an error and never reaches the error
//! handler.

use axum::http::StatusCode;

use crate::components;
use crate::render::escape;
use crate::routes::{RenderPayload, RouteContext, RouteFuture, RouteResolution};

pub fn action<'a, 'b>(ctx: &'a mut RouteContext<'b>) -> RouteFuture<'a> {
    Box::pin(async move {
        let title = ctx.text("notFound.title");
        let heading = escape(&title);
        let sorry = escape(&ctx.text("notFound.message"));
        let section =
            format!("<section class=\"not-found\"><h1>{heading}</h1><p>{sorry}</p></section>");
        let body = components::layout(ctx, &section);
        Ok(RouteResolution::Page(RenderPayload {
            description: title.clone(),
            title,
            chunk: None,
            body,
            status: Some(StatusCode::NOT_FOUND),
        }))
    })
}

//! Home page.

use crate::components;
use crate::render::escape;
use crate::routes::{RenderPayload, RouteContext, RouteFuture, RouteResolution};

pub fn action<'a, 'b>(ctx: &'a mut RouteContext<'b>) -> RouteFuture<'a> {
    Box::pin(async move {
        let title = ctx.text("app");
        let welcome = escape(&ctx.text("home.welcome"));
        let heading = escape(&title);
        let section =
            format!("<section class=\"home\"><h1>{heading}</h1><p>{welcome}</p></section>");
        let body = components::layout(ctx, &section);
        Ok(RouteResolution::Page(RenderPayload {
            description: ctx.text("home.description"),
            title,
            chunk: Some("home".to_owned()),
            body,
            status: None,
        }))
    })
}

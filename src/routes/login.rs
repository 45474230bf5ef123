//! Login page.

use crate::components;
use crate::render::escape;
use crate::routes::{RenderPayload, RouteContext, RouteFuture, RouteResolution};

pub fn action<'a, 'b>(ctx: &'a mut RouteContext<'b>) -> RouteFuture<'a> {
    Box::pin(async move {
        let title = ctx.text("login.title");
        let heading = escape(&title);
        let section = format!(
            "<section class=\"login\"><h1>{heading}</h1>\
             <form method=\"post\" action=\"/login\">\
             <input name=\"user\" type=\"text\"/>\
             <input name=\"password\" type=\"password\"/>\
             <button type=\"submit\">{heading}</button>\
             </form></section>"
        );
        let body = components::layout(ctx, &section);
        Ok(RouteResolution::Page(RenderPayload {
            description: ctx.text("login.description"),
            title,
            chunk: None,
            body,
            status: None,
        }))
    })
}

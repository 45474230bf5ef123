//! Admin page.
//!
//! Requires an admin user in the request store; everyone else is redirected
//! to the login page before anything renders.

use crate::components;
use crate::render::escape;
use crate::routes::{RenderPayload, RouteContext, RouteFuture, RouteResolution};

pub fn action<'a, 'b>(ctx: &'a mut RouteContext<'b>) -> RouteFuture<'a> {
    Box::pin(async move {
        if !ctx.store.is_admin() {
            return Ok(RouteResolution::Redirect {
                to: "/login".to_owned(),
                status: None,
            });
        }

        let title = ctx.text("admin.title");
        let heading = escape(&title);
        let section = format!("<section class=\"admin\"><h1>{heading}</h1></section>");
        let body = components::layout(ctx, &section);
        Ok(RouteResolution::Page(RenderPayload {
            description: ctx.text("admin.description"),
            title,
            chunk: Some("admin".to_owned()),
            body,
            status: None,
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::ContextFixture;

    #[tokio::test]
    async fn test_non_admin_is_redirected_to_login() {
        let mut fixture = ContextFixture::new();
        let mut ctx = fixture.ctx();
        let resolution = action(&mut ctx).await.unwrap();
        match resolution {
            RouteResolution::Redirect { to, status } => {
                assert_eq!(to, "/login");
                assert_eq!(status, None);
            }
            other => panic!("expected a redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_admin_sees_the_page() {
        let mut fixture = ContextFixture::with_messages(&[("admin.title", "Admin Page")]);
        fixture.store.set_user(serde_json::json!({"isAdmin": true}));
        let mut ctx = fixture.ctx();
        let resolution = action(&mut ctx).await.unwrap();
        match resolution {
            RouteResolution::Page(payload) => {
                assert_eq!(payload.title, "Admin Page");
                assert_eq!(payload.chunk.as_deref(), Some("admin"));
            }
            other => panic!("expected a page, got {other:?}"),
        }
    }
}

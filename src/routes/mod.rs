//! Application routes.
//!
//! The route table maps request paths onto route actions through a radix
//! tree ([`matchit`]). An action receives a mutable [`RouteContext`] - the
//! request store, the CSS collector, the supported-locale list, query and
//! path parameters - and produces a [`RouteResolution`]: either a redirect
//! directive or a fully rendered page payload.
//!
//! Unmatched paths are not an error; they resolve to the not-found page
//! with a 404 status.

pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;

use std::collections::HashMap;

use axum::http::StatusCode;
use futures_util::future::BoxFuture;
use matchit::Router as MatchitRouter;

use crate::error::AppError;
use crate::intl::{Locale, SupportedLocales};
use crate::render::CssCollector;
use crate::store::Store;

/// A matched route's render output.
#[derive(Debug)]
pub struct RenderPayload {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Name of the route's lazily loaded bundle, if it declares one
    pub chunk: Option<String>,
    /// Server-rendered markup for the route
    pub body: String,
    /// Response status; `None` means 200
    pub status: Option<StatusCode>,
}

/// The outcome of route resolution.
#[derive(Debug)]
pub enum RouteResolution {
    /// Respond with a redirect; `None` status means 302
    Redirect {
        to: String,
        status: Option<StatusCode>,
    },
    /// Render the page described by the payload
    Page(RenderPayload),
}

/// Per-request context threaded into route actions and components.
pub struct RouteContext<'a> {
    pub store: &'a mut Store,
    pub css: &'a mut CssCollector,
    pub locales: &'a SupportedLocales,
    pub query: &'a HashMap<String, String>,
    pub params: HashMap<String, String>,
}

impl<'a> RouteContext<'a> {
    pub fn new(
        store: &'a mut Store,
        css: &'a mut CssCollector,
        locales: &'a SupportedLocales,
        query: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            store,
            css,
            locales,
            query,
            params: HashMap::new(),
        }
    }

    /// The request's effective locale.
    pub fn locale(&self) -> &Locale {
        self.store.locale()
    }

    /// Localized message lookup; missing ids come back as the id.
    pub fn text(&self, id: &str) -> String {
        self.store.message(id)
    }

    /// Register a rendered component's critical CSS.
    pub fn insert_css(&mut self, css: &str) {
        self.css.insert(css);
    }
}

/// Future returned by a route action.
pub type RouteFuture<'a> = BoxFuture<'a, Result<RouteResolution, AppError>>;

/// A route action: borrows the request context, resolves to a
/// [`RouteResolution`] or an error that aborts to the error page.
pub type RouteAction = for<'a, 'b> fn(&'a mut RouteContext<'b>) -> RouteFuture<'a>;

/// The application route table.
pub struct RouteTable {
    router: MatchitRouter<RouteAction>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            router: MatchitRouter::new(),
        }
    }

    /// The routes the application ships with.
    pub fn app_default() -> Self {
        Self::new()
            .route("/", home::action)
            .route("/admin", admin::action)
            .route("/login", login::action)
    }

    /// Register an action for a path. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and land in
    /// [`RouteContext::params`].
    pub fn route(mut self, path: &str, action: RouteAction) -> Self {
        self.router
            .insert(path, action)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Resolve a request path against the table.
    ///
    /// Suspends while the matched action runs; unmatched paths fall through
    /// to the not-found action.
    pub async fn resolve(
        &self,
        path: &str,
        ctx: &mut RouteContext<'_>,
    ) -> Result<RouteResolution, AppError> {
        let action: RouteAction = match self.router.at(path) {
            Ok(matched) => {
                ctx.params = matched
                    .params
                    .iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect();
                *matched.value
            }
            Err(_) => {
                tracing::debug!(path, "no route matched");
                not_found::action
            }
        };
        action(ctx).await
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::app_default()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::intl::{LocaleLoad, MessageCatalog};

    /// Owns everything a `RouteContext` borrows.
    pub struct ContextFixture {
        pub store: Store,
        pub css: CssCollector,
        pub locales: SupportedLocales,
        pub query: HashMap<String, String>,
    }

    impl ContextFixture {
        pub fn new() -> Self {
            let locales = SupportedLocales::parse("en-US,cs-CZ").unwrap();
            let store = Store::new(0, &locales, Locale::from("en-US"));
            Self {
                store,
                css: CssCollector::new(),
                locales,
                query: HashMap::new(),
            }
        }

        pub fn with_messages(pairs: &[(&str, &str)]) -> Self {
            let mut fixture = Self::new();
            let mut catalog = MessageCatalog::new();
            for (id, message) in pairs {
                catalog.insert(*id, *message);
            }
            fixture
                .store
                .set_locale_load(LocaleLoad::Loaded { messages: catalog });
            fixture
        }

        pub fn ctx(&mut self) -> RouteContext<'_> {
            RouteContext::new(&mut self.store, &mut self.css, &self.locales, &self.query)
        }
    }
}

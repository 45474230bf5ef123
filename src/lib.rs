//! Sitekit - Main Library
//!
//! Sitekit is a server-rendered web application scaffold: a request-scoped
//! state store, an application route table, a pluggable locale/message
//! subsystem, and an axum HTTP entry point that renders full HTML documents
//! with inlined critical CSS and a serialized hydration payload.
//!
//! # Overview
//!
//! Every `GET` request runs one linear pipeline:
//!
//! 1. a fresh [`store::Store`] is seeded with the server timestamp and the
//!    configured locale list,
//! 2. the locale is negotiated and its message catalog loaded through the
//!    configured [`intl::CatalogSource`] (failures degrade, they never
//!    abort),
//! 3. the path is resolved against the [`routes::RouteTable`] - a redirect
//!    directive short-circuits the rest,
//! 4. the [`render::RenderEnvelope`] is assembled (markup, collected CSS,
//!    bundle scripts, serialized store state), and
//! 5. the HTML document is written; any error along the way lands in the
//!    localized error page instead of the client's lap.
//!
//! # Module Structure
//!
//! - **`config`** - immutable process configuration, read once at startup
//! - **`assets`** - the bundle manifest and its startup invariant
//! - **`intl`** - locale types, negotiation, catalog sources, the loader
//! - **`store`** - request-scoped state and hydration serialization
//! - **`routes`** - route table, route actions, resolution results
//! - **`components`** - server-rendered fragments with critical CSS
//! - **`render`** - CSS collection, the render envelope, document writing
//! - **`server`** - app assembly, the request pipeline, the error page
//! - **`error`** - the application error taxonomy
//!
//! # Error Handling
//!
//! Fallible operations return `Result` and propagate with `?` up to the
//! request handler, which owns the only catch point. Catalog failures are
//! the exception: they are converted into [`intl::LocaleLoad::Failed`] and
//! recorded in the store so the request can proceed with a degraded
//! catalog.

/// Bundle manifest
pub mod assets;

/// Process configuration
pub mod config;

/// Server-rendered components
pub mod components;

/// Application error types
pub mod error;

/// Internationalization: locales, catalogs, sources, negotiation
pub mod intl;

/// Rendering: CSS collection, envelope, document writer
pub mod render;

/// Application routes
pub mod routes;

/// HTTP server: state, pipeline, error page
pub mod server;

/// Request-scoped store
pub mod store;

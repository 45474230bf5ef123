//! Server.
//!
//! Everything that turns the library into an HTTP application: shared
//! application state, the axum app assembly, the language middleware, the
//! per-request render pipeline, and the terminal error page.
//!
//! # Request Lifecycle
//!
//! Static asset paths (`/messages/*`, `/js/*`) are served straight from the
//! public directory. Every other GET lands in
//! [`handler::render_page`], which:
//!
//! 1. seeds a fresh request store,
//! 2. negotiates the locale and runs the catalog loader,
//! 3. resolves the path through the route table,
//! 4. either redirects or assembles the render envelope, and
//! 5. writes the HTML document response.
//!
//! Any pipeline error is forwarded to [`error_page::respond`], which always
//! produces a response and never throws further.

pub mod error_page;
pub mod handler;
pub mod init;
pub mod middleware;
pub mod state;

pub use init::create_app;
pub use state::AppState;

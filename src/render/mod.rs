//! Rendering.
//!
//! Everything between a resolved route and the bytes on the wire: the
//! critical-CSS collector that components write into while rendering, the
//! [`RenderEnvelope`] aggregating one request's output, and the HTML
//! document writer.

pub mod css;
pub mod envelope;
pub mod html;

pub use css::CssCollector;
pub use envelope::RenderEnvelope;
pub use html::{escape, render_document, render_error_document};

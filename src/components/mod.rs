//! Server-rendered components.
//!
//! Each component renders to a markup string and registers its critical CSS
//! with the request's collector the first time it appears. Localized text
//! goes through [`RouteContext::text`], so missing catalog entries degrade
//! to the message id instead of failing the render.

use crate::render::escape;
use crate::routes::RouteContext;

const LAYOUT_CSS: &str = "\
.layout{margin:0 auto;max-width:60rem;padding:0 1rem;font-family:sans-serif}";

const HEADER_CSS: &str = "\
.header{display:flex;align-items:center;gap:1rem;padding:1rem 0;border-bottom:1px solid #ddd}\
.header .brand{font-weight:bold;text-decoration:none;color:#222}";

const LANGUAGE_SWITCHER_CSS: &str = "\
.language-switcher a{margin-right:.5rem;color:#06c}\
.language-switcher span{margin-right:.5rem;color:#888}";

/// Application shell: header plus the page content.
pub fn layout(ctx: &mut RouteContext<'_>, children: &str) -> String {
    ctx.insert_css(LAYOUT_CSS);
    let header = header(ctx);
    format!("<div class=\"layout\">{header}{children}</div>")
}

/// Site header with the language switcher and the localized brand link.
pub fn header(ctx: &mut RouteContext<'_>) -> String {
    ctx.insert_css(HEADER_CSS);
    let switcher = language_switcher(ctx);
    let brand = escape(&ctx.text("app"));
    format!(
        "<div class=\"header\">{switcher}<a class=\"brand\" href=\"/\">{brand}</a></div>"
    )
}

/// One link per supported locale; the active locale renders as plain text.
///
/// The links point at the language-switch URL handled by the request
/// pipeline, which pins the choice in the `lang` cookie and redirects home.
pub fn language_switcher(ctx: &mut RouteContext<'_>) -> String {
    ctx.insert_css(LANGUAGE_SWITCHER_CSS);
    let current = ctx.locale().clone();
    let mut items = String::new();
    for locale in ctx.locales.iter() {
        let tag = escape(locale.as_str());
        if *locale == current {
            items.push_str(&format!("<span>{tag}</span>"));
        } else {
            items.push_str(&format!("<a href=\"/lang/{tag}\">{tag}</a>"));
        }
    }
    format!("<div class=\"language-switcher\">{items}</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::ContextFixture;

    #[test]
    fn test_layout_wraps_children_and_collects_css() {
        let mut fixture = ContextFixture::with_messages(&[("app", "My App")]);
        let markup = {
            let mut ctx = fixture.ctx();
            layout(&mut ctx, "<p>content</p>")
        };
        assert!(markup.contains("<p>content</p>"));
        assert!(markup.contains(">My App</a>"));
        let css = fixture.css.into_css();
        assert!(css.contains(".layout{"));
        assert!(css.contains(".header{"));
        assert!(css.contains(".language-switcher"));
    }

    #[test]
    fn test_header_falls_back_to_message_id() {
        let mut fixture = ContextFixture::new();
        let mut ctx = fixture.ctx();
        let markup = header(&mut ctx);
        assert!(markup.contains(">app</a>"));
    }

    #[test]
    fn test_switcher_marks_active_locale() {
        let mut fixture = ContextFixture::new();
        let mut ctx = fixture.ctx();
        let markup = language_switcher(&mut ctx);
        assert!(markup.contains("<span>en-US</span>"));
        assert!(markup.contains("<a href=\"/lang/cs-CZ\">cs-CZ</a>"));
    }
}

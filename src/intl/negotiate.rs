//! Locale negotiation.
//!
//! Determines the effective locale for a request. Precedence, highest first:
//!
//! 1. `lang` query parameter
//! 2. `lang` cookie
//! 3. `Accept-Language` header, ordered by quality value
//! 4. the configured default locale
//!
//! Only tags in the supported set are eligible; anything else is skipped and
//! the next candidate wins. The function is total: it always yields a
//! supported locale and never fails.

use super::{Locale, SupportedLocales};

/// Pick the effective locale for a request.
pub fn negotiate_locale(
    supported: &SupportedLocales,
    query_lang: Option<&str>,
    cookie_lang: Option<&str>,
    accept_language: Option<&str>,
) -> Locale {
    if let Some(tag) = query_lang.filter(|tag| supported.contains(tag)) {
        return Locale::from(tag);
    }
    if let Some(tag) = cookie_lang.filter(|tag| supported.contains(tag)) {
        return Locale::from(tag);
    }
    if let Some(header) = accept_language {
        for tag in accepted_tags(header) {
            if supported.contains(&tag) {
                return Locale::new(tag);
            }
        }
    }
    supported.default_locale().clone()
}

/// Parse an `Accept-Language` header into tags ordered by quality value.
///
/// Entries look like `cs-CZ`, `en;q=0.8`, or `*;q=0.1`. Malformed quality
/// values are treated as `q=1`; the wildcard entry is dropped since it can
/// only ever mean the default locale, which is the fallback anyway. Sorting
/// is stable, so equal-quality tags keep their header order.
fn accepted_tags(header: &str) -> Vec<String> {
    let mut entries: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = parts
                .find_map(|param| {
                    let param = param.trim();
                    param.strip_prefix("q=").and_then(|q| q.parse::<f32>().ok())
                })
                .unwrap_or(1.0);
            Some((tag.to_owned(), quality))
        })
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.into_iter().map(|(tag, _)| tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn supported() -> SupportedLocales {
        SupportedLocales::parse("en-US,cs-CZ").unwrap()
    }

    #[test]
    fn test_query_beats_cookie_and_header() {
        let locale = negotiate_locale(
            &supported(),
            Some("cs-CZ"),
            Some("en-US"),
            Some("en-US,cs-CZ;q=0.5"),
        );
        assert_eq!(locale.as_str(), "cs-CZ");
    }

    #[test]
    fn test_cookie_beats_header() {
        let locale = negotiate_locale(&supported(), None, Some("cs-CZ"), Some("en-US"));
        assert_eq!(locale.as_str(), "cs-CZ");
    }

    #[test]
    fn test_header_quality_ordering() {
        let locale = negotiate_locale(
            &supported(),
            None,
            None,
            Some("de-DE,cs-CZ;q=0.9,en-US;q=0.4"),
        );
        assert_eq!(locale.as_str(), "cs-CZ");
    }

    #[test]
    fn test_unsupported_candidates_are_skipped() {
        let locale = negotiate_locale(&supported(), Some("fr-FR"), Some("de-DE"), Some("ja-JP"));
        assert_eq!(locale.as_str(), "en-US");
    }

    #[test]
    fn test_default_when_nothing_requested() {
        let locale = negotiate_locale(&supported(), None, None, None);
        assert_eq!(locale.as_str(), "en-US");
    }

    #[test]
    fn test_malformed_quality_treated_as_full() {
        let tags = accepted_tags("cs-CZ;q=oops,en-US;q=0.2");
        assert_eq!(tags, vec!["cs-CZ".to_owned(), "en-US".to_owned()]);
    }

    #[test]
    fn test_wildcard_is_dropped() {
        let tags = accepted_tags("*;q=0.8,en-US;q=0.2");
        assert_eq!(tags, vec!["en-US".to_owned()]);
    }

    proptest! {
        // Whatever the inputs look like, negotiation must stay total and
        // land on a supported tag.
        #[test]
        fn prop_negotiation_always_yields_supported(
            query in proptest::option::of("[a-zA-Z,;=*. -]{0,24}"),
            cookie in proptest::option::of("[a-zA-Z,;=*. -]{0,24}"),
            header in proptest::option::of("[a-zA-Z0-9,;=*.q -]{0,64}"),
        ) {
            let supported = supported();
            let locale = negotiate_locale(
                &supported,
                query.as_deref(),
                cookie.as_deref(),
                header.as_deref(),
            );
            prop_assert!(supported.contains(locale.as_str()));
        }
    }
}

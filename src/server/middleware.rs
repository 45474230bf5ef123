//! Language middleware.
//!
//! The request-language concerns that run before route resolution: query
//! and cookie parsing, locale negotiation glue, the `/lang/{locale}` switch
//! URL, and the `lang` cookie the handler attaches after a successful
//! catalog load.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};

use crate::intl::{negotiate_locale, Locale, SupportedLocales};

/// `lang` cookie lifetime: 10 years, in seconds.
const LANG_COOKIE_MAX_AGE: u64 = 315_360_000;

/// Parse a raw query string into a key/value map.
///
/// Later duplicates win; pairs without `=` are dropped. Values are taken
/// verbatim (locale tags never need percent-decoding).
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .unwrap_or("")
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key.is_empty() {
                return None;
            }
            Some((key.to_owned(), value.to_owned()))
        })
        .collect()
}

/// Parse the `Cookie` header into a name/value map.
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let raw = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    raw.split(';')
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name.is_empty() {
                return None;
            }
            Some((name.to_owned(), value.to_owned()))
        })
        .collect()
}

/// Negotiate the request's effective locale from its headers and query.
pub fn request_language(
    supported: &SupportedLocales,
    headers: &HeaderMap,
    query: &HashMap<String, String>,
) -> Locale {
    let cookies = parse_cookies(headers);
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    negotiate_locale(
        supported,
        query.get("lang").map(String::as_str),
        cookies.get("lang").map(String::as_str),
        accept_language,
    )
}

/// Recognize the `/lang/{locale}` switch URL.
///
/// Returns the chosen locale when the path is a switch request for a
/// supported tag. Unsupported tags return `None` and fall through to
/// ordinary route resolution (and its 404).
pub fn language_switch_target(supported: &SupportedLocales, path: &str) -> Option<Locale> {
    let tag = path.strip_prefix("/lang/")?;
    if tag.is_empty() || tag.contains('/') || !supported.contains(tag) {
        return None;
    }
    Some(Locale::from(tag))
}

/// The `Set-Cookie` value that pins a locale choice.
pub fn lang_cookie(locale: &Locale) -> String {
    format!("lang={}; path=/; max-age={}", locale, LANG_COOKIE_MAX_AGE)
}

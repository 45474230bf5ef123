//! Application configuration module
//!
//! Process-wide settings, read once at startup from the environment
//! (`dotenv` is honored by the binary before this runs) and immutable
//! afterwards. The struct is passed by reference into the server; nothing
//! reads ambient globals after boot.
//!
//! # Variables
//!
//! | Variable           | Default                  | Meaning                          |
//! |--------------------|--------------------------|----------------------------------|
//! | `PORT`             | `3000`                   | HTTP listen port                 |
//! | `WEBSITE_HOSTNAME` | `localhost:{port}`       | public host                      |
//! | `LOCALES`          | `en-US,cs-CZ`            | supported tags, first is default |
//! | `GOOGLE_TRACKING_ID` | unset                  | analytics id, optional           |
//! | `INTL_SOURCE`      | `rest`                   | `rest` or `query`                |
//! | `INTL_BASE_URL`    | `http://{host}`          | catalog source base URL          |
//! | `PUBLIC_DIR`       | `public`                 | static asset directory           |
//! | `ASSETS_MANIFEST`  | `{public_dir}/assets.json` | bundle manifest path           |

use std::path::PathBuf;

use thiserror::Error;

use crate::intl::SupportedLocales;

/// Which catalog source implementation to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntlSourceKind {
    /// `GET {base}/messages/{locale}.json`
    Rest,
    /// `POST {base}` with an intl query
    Query,
}

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// Public hostname, used for links and the default catalog base URL
    pub host: String,
    /// Supported locales; the first entry is the default
    pub locales: SupportedLocales,
    /// Google Analytics tracking id, rendered into the document when set
    pub analytics: Option<String>,
    /// Catalog source selection
    pub intl_source: IntlSourceKind,
    /// Base URL for the catalog source
    pub intl_base_url: String,
    /// Directory served as static assets
    pub public_dir: PathBuf,
    /// Path to the bundle manifest (`assets.json`)
    pub assets_manifest: PathBuf,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {value}")]
    InvalidPort { value: String },
    #[error("LOCALES must contain at least one tag")]
    EmptyLocales,
    #[error("unknown INTL_SOURCE: {value} (expected \"rest\" or \"query\")")]
    UnknownSource { value: String },
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` is a thin wrapper over this; tests inject their own
    /// lookup instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => 3000,
        };

        let host = lookup("WEBSITE_HOSTNAME").unwrap_or_else(|| format!("localhost:{port}"));

        let locales = lookup("LOCALES").unwrap_or_else(|| "en-US,cs-CZ".to_owned());
        let locales = SupportedLocales::parse(&locales).ok_or(ConfigError::EmptyLocales)?;

        let intl_source = match lookup("INTL_SOURCE").as_deref() {
            None | Some("rest") => IntlSourceKind::Rest,
            Some("query") => IntlSourceKind::Query,
            Some(other) => {
                return Err(ConfigError::UnknownSource {
                    value: other.to_owned(),
                })
            }
        };

        let intl_base_url = lookup("INTL_BASE_URL").unwrap_or_else(|| format!("http://{host}"));

        let public_dir = PathBuf::from(lookup("PUBLIC_DIR").unwrap_or_else(|| "public".to_owned()));
        let assets_manifest = lookup("ASSETS_MANIFEST")
            .map(PathBuf::from)
            .unwrap_or_else(|| public_dir.join("assets.json"));

        Ok(Self {
            port,
            host,
            locales,
            analytics: lookup("GOOGLE_TRACKING_ID").filter(|id| !id.is_empty()),
            intl_source,
            intl_base_url,
            public_dir,
            assets_manifest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "localhost:3000");
        assert_eq!(config.locales.default_locale().as_str(), "en-US");
        assert_eq!(config.intl_source, IntlSourceKind::Rest);
        assert_eq!(config.intl_base_url, "http://localhost:3000");
        assert_eq!(config.assets_manifest, PathBuf::from("public/assets.json"));
        assert!(config.analytics.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("WEBSITE_HOSTNAME", "example.com"),
            ("LOCALES", "cs-CZ,en-US"),
            ("GOOGLE_TRACKING_ID", "UA-12345-6"),
            ("INTL_SOURCE", "query"),
            ("INTL_BASE_URL", "http://intl.internal/graphql"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "example.com");
        assert_eq!(config.locales.default_locale().as_str(), "cs-CZ");
        assert_eq!(config.analytics.as_deref(), Some("UA-12345-6"));
        assert_eq!(config.intl_source, IntlSourceKind::Query);
        assert_eq!(config.intl_base_url, "http://intl.internal/graphql");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_empty_locales_are_rejected() {
        let err = Config::from_lookup(lookup(&[("LOCALES", " ,")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLocales));
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let err = Config::from_lookup(lookup(&[("INTL_SOURCE", "soap")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSource { .. }));
    }
}

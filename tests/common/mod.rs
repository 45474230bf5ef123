//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: canned catalog sources, a
//! known-good asset manifest, and a `TestServer` builder around the real
//! application assembly.

use async_trait::async_trait;
use axum_test::TestServer;

use sitekit::assets::AssetManifest;
use sitekit::config::Config;
use sitekit::error::AppError;
use sitekit::intl::{CatalogSource, Locale, MessageCatalog};
use sitekit::routes::RouteTable;
use sitekit::server::{create_app, AppState};

/// Manifest every test server boots with.
pub const TEST_MANIFEST: &str = r#"{
    "vendor": { "js": "/js/vendor.js" },
    "client": { "js": "/js/client.js" },
    "home":   { "js": "/js/home.chunk.js" },
    "admin":  { "js": "/js/admin.chunk.js" }
}"#;

/// A catalog source that always succeeds with the same messages.
pub struct StaticCatalogSource {
    pairs: Vec<(String, String)>,
}

impl StaticCatalogSource {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            pairs: pairs
                .iter()
                .map(|(id, message)| (id.to_string(), message.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load_catalog(&self, _locale: &Locale) -> Result<MessageCatalog, AppError> {
        Ok(self.pairs.iter().cloned().collect())
    }
}

/// A catalog source that always fails.
pub struct FailingCatalogSource;

#[async_trait]
impl CatalogSource for FailingCatalogSource {
    async fn load_catalog(&self, locale: &Locale) -> Result<MessageCatalog, AppError> {
        Err(AppError::catalog_shape(format!(
            "no catalog for {locale} in this test"
        )))
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default test config")
}

/// Boot a test server over the real app with the default route table.
pub fn server_with_source(source: Box<dyn CatalogSource>) -> TestServer {
    server_with(source, RouteTable::app_default())
}

/// Boot a test server with an explicit route table.
pub fn server_with(source: Box<dyn CatalogSource>, routes: RouteTable) -> TestServer {
    let assets = AssetManifest::from_json(TEST_MANIFEST).expect("test manifest");
    let state = AppState::with_routes(test_config(), assets, source, routes);
    TestServer::new(create_app(state)).expect("test server")
}

/// All `Set-Cookie` header values of a response.
pub fn set_cookies(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

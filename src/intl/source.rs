//! Catalog sources.
//!
//! A [`CatalogSource`] is the capability the locale loader uses to retrieve
//! message catalogs. Two interchangeable implementations exist, and exactly
//! one is selected at startup from configuration:
//!
//! - [`RestCatalogSource`] - fetches `{base}/messages/{locale}.json`, a flat
//!   `{id: message}` object
//! - [`QueryCatalogSource`] - posts an intl query to a data endpoint and
//!   reduces the `{data: {intl: [{id, message}, ...]}}` response into the
//!   same flat mapping
//!
//! Both yield a [`MessageCatalog`] or an [`AppError`]; the loader decides
//! what a failure means for the request.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{Config, IntlSourceKind};
use crate::error::AppError;
use crate::intl::{Locale, MessageCatalog};

/// Capability for retrieving one locale's message catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_catalog(&self, locale: &Locale) -> Result<MessageCatalog, AppError>;
}

/// Build the configured catalog source.
pub fn select_source(config: &Config) -> Box<dyn CatalogSource> {
    match config.intl_source {
        IntlSourceKind::Rest => Box::new(RestCatalogSource::new(&config.intl_base_url)),
        IntlSourceKind::Query => Box::new(QueryCatalogSource::new(&config.intl_base_url)),
    }
}

/// REST source: `GET {base}/messages/{locale}.json`.
pub struct RestCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl RestCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl CatalogSource for RestCatalogSource {
    async fn load_catalog(&self, locale: &Locale) -> Result<MessageCatalog, AppError> {
        let url = format!("{}/messages/{}.json", self.base_url, locale);
        let catalog = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<MessageCatalog>()
            .await?;
        Ok(catalog)
    }
}

/// Query source: posts an intl query and flattens the record list.
pub struct QueryCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl QueryCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    data: Option<QueryData>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    intl: Option<Vec<IntlRecord>>,
}

#[derive(Debug, Deserialize)]
struct IntlRecord {
    id: String,
    message: String,
}

#[async_trait]
impl CatalogSource for QueryCatalogSource {
    async fn load_catalog(&self, locale: &Locale) -> Result<MessageCatalog, AppError> {
        let body = serde_json::json!({
            "query": "query Intl($locale: String!) { intl(locale: $locale) { id message } }",
            "variables": { "locale": locale },
        });
        let response = self
            .client
            .post(&self.base_url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<QueryResponse>()
            .await?;
        reduce_records(response)
    }
}

/// Flatten `{data: {intl: [{id, message}]}}` into a catalog.
fn reduce_records(response: QueryResponse) -> Result<MessageCatalog, AppError> {
    let records = response
        .data
        .and_then(|data| data.intl)
        .ok_or_else(|| AppError::catalog_shape("query response is missing data.intl"))?;
    Ok(records
        .into_iter()
        .map(|record| (record.id, record.message))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_records_flattens_list() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"data": {"intl": [
                {"id": "app", "message": "My App"},
                {"id": "header.about", "message": "About"}
            ]}}"#,
        )
        .unwrap();
        let catalog = reduce_records(response).unwrap();
        assert_eq!(catalog.get("app"), Some("My App"));
        assert_eq!(catalog.get("header.about"), Some("About"));
    }

    #[test]
    fn test_reduce_records_rejects_missing_data() {
        let response: QueryResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        let err = reduce_records(response).unwrap_err();
        assert!(err.to_string().contains("data.intl"));
    }

    #[test]
    fn test_rest_source_trims_trailing_slash() {
        let source = RestCatalogSource::new("http://localhost:3000/");
        assert_eq!(source.base_url, "http://localhost:3000");
    }
}

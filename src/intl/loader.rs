//! Locale loader.
//!
//! Wraps a [`CatalogSource`] call with the three lifecycle events the rest
//! of the system observes (start, success, error) and converts the outcome
//! into a [`LocaleLoad`] value. No error crosses this boundary: a source
//! failure becomes `Failed` and the request proceeds with a degraded
//! catalog. The caller records the result in the request store and checks
//! [`LocaleLoad::is_loaded`] before assuming lookups will succeed.

use crate::intl::{CatalogSource, Locale, LocaleLoad};

/// Load the message catalog for `locale` through the given source.
///
/// Logs a start event immediately, then either a success event with the
/// message count or an error event with the failure reason. Never returns
/// [`LocaleLoad::Pending`].
pub async fn load_locale(source: &dyn CatalogSource, locale: &Locale) -> LocaleLoad {
    tracing::debug!(%locale, "locale load started");
    match source.load_catalog(locale).await {
        Ok(messages) => {
            tracing::info!(%locale, messages = messages.len(), "locale load succeeded");
            LocaleLoad::Loaded { messages }
        }
        Err(error) => {
            tracing::warn!(%locale, %error, "locale load failed");
            LocaleLoad::Failed {
                error: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::intl::MessageCatalog;
    use async_trait::async_trait;

    struct FixedSource {
        result: Result<Vec<(String, String)>, String>,
    }

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn load_catalog(&self, _locale: &Locale) -> Result<MessageCatalog, AppError> {
            match &self.result {
                Ok(pairs) => Ok(pairs.iter().cloned().collect()),
                Err(message) => Err(AppError::catalog_shape(message.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_success_yields_loaded_catalog() {
        let source = FixedSource {
            result: Ok(vec![("app".to_owned(), "My App".to_owned())]),
        };
        let load = load_locale(&source, &Locale::from("en-US")).await;
        assert!(load.is_loaded());
        assert_eq!(load.catalog().unwrap().get("app"), Some("My App"));
    }

    #[tokio::test]
    async fn test_failure_yields_failed_state() {
        let source = FixedSource {
            result: Err("no such locale".to_owned()),
        };
        let load = load_locale(&source, &Locale::from("de-DE")).await;
        assert!(!load.is_loaded());
        assert!(load.catalog().is_none());
        match load {
            LocaleLoad::Failed { error } => assert!(error.contains("no such locale")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}

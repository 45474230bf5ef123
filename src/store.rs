//! Request-scoped store.
//!
//! One [`Store`] is created at the top of each request pipeline, threaded
//! through route resolution by reference, serialized into the document for
//! client hydration, and dropped when the response is sent. Nothing in it
//! crosses requests.
//!
//! The shape mirrors what the client rehydrates: a `runtime` bag of named
//! variables (server timestamp, available locales), the `intl` slice with
//! the effective locale and catalog load state, and an optional `user`
//! payload.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::intl::{Locale, LocaleLoad, MessageCatalog, SupportedLocales};

/// Per-request application state.
#[derive(Debug, Serialize)]
pub struct Store {
    runtime: BTreeMap<String, Value>,
    intl: IntlState,
    user: Option<Value>,
}

#[derive(Debug, Serialize)]
struct IntlState {
    locale: Locale,
    #[serde(flatten)]
    load: LocaleLoad,
}

impl Store {
    /// Create a store seeded with the server timestamp and the configured
    /// locale list. The catalog starts out [`LocaleLoad::Pending`].
    pub fn new(initial_now: i64, locales: &SupportedLocales, locale: Locale) -> Self {
        let mut store = Self {
            runtime: BTreeMap::new(),
            intl: IntlState {
                locale,
                load: LocaleLoad::Pending,
            },
            user: None,
        };
        store.set_runtime_variable("initialNow", Value::from(initial_now));
        store.set_runtime_variable(
            "availableLocales",
            serde_json::to_value(locales).unwrap_or(Value::Null),
        );
        store
    }

    pub fn set_runtime_variable(&mut self, name: impl Into<String>, value: Value) {
        self.runtime.insert(name.into(), value);
    }

    pub fn set_locale_load(&mut self, load: LocaleLoad) {
        self.intl.load = load;
    }

    pub fn set_user(&mut self, user: Value) {
        self.user = Some(user);
    }

    pub fn locale(&self) -> &Locale {
        &self.intl.locale
    }

    pub fn catalog(&self) -> Option<&MessageCatalog> {
        self.intl.load.catalog()
    }

    /// Whether the requester carries an admin user payload.
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .and_then(|user| user.get("isAdmin"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Look up a localized message. Missing ids (and a missing catalog)
    /// fall back to the id itself so a degraded load still renders.
    pub fn message(&self, id: &str) -> String {
        self.catalog()
            .and_then(|catalog| catalog.get(id))
            .unwrap_or(id)
            .to_owned()
    }

    /// Serialize the store for the hydration payload.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}

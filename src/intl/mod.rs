//! Internationalization
//!
//! Locale types, the message-catalog data model, locale negotiation, and the
//! pluggable catalog sources that feed the loader.
//!
//! # Data Model
//!
//! - [`Locale`] - a language tag such as `en-US`
//! - [`SupportedLocales`] - the configured ordered set of tags; the first
//!   entry is the process-wide default
//! - [`MessageCatalog`] - mapping from message id to translated text for one
//!   locale; partial and empty catalogs are valid
//! - [`LocaleLoad`] - the per-request load state: `Pending`, `Loaded`, or
//!   `Failed`
//!
//! # Load Flow
//!
//! The request handler negotiates a locale ([`negotiate_locale`]), asks the
//! loader ([`load_locale`]) to pull the catalog through the configured
//! [`CatalogSource`], and records the resulting [`LocaleLoad`] in the store.
//! A failed load degrades the request (message lookups fall back to the
//! message id) instead of aborting it.

pub mod loader;
pub mod negotiate;
pub mod source;

pub use loader::load_locale;
pub use negotiate::negotiate_locale;
pub use source::{select_source, CatalogSource, QueryCatalogSource, RestCatalogSource};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A language tag, e.g. `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

/// The ordered set of locales the application serves.
///
/// The first entry is the default: negotiation falls back to it whenever no
/// requested tag is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SupportedLocales {
    tags: Vec<Locale>,
}

impl SupportedLocales {
    /// Build the set from an ordered list of tags.
    ///
    /// Returns `None` when the list is empty; an application without a
    /// default locale cannot negotiate anything.
    pub fn new(tags: Vec<Locale>) -> Option<Self> {
        if tags.is_empty() {
            None
        } else {
            Some(Self { tags })
        }
    }

    /// Parse a comma-separated list, e.g. `en-US,cs-CZ`.
    pub fn parse(list: &str) -> Option<Self> {
        let tags = list
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(Locale::from)
            .collect();
        Self::new(tags)
    }

    /// The default locale (the first configured entry).
    pub fn default_locale(&self) -> &Locale {
        &self.tags[0]
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|locale| locale.as_str() == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.tags.iter()
    }
}

/// Mapping from message id to translated text for one locale.
///
/// Empty and partial catalogs are valid; missing ids fall back to the id
/// itself at lookup time (see [`crate::store::Store::message`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog(BTreeMap<String, String>);

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn insert(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.0.insert(id.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-request catalog load state.
///
/// `Pending` is the store's state before the loader has run; the loader
/// itself only ever produces `Loaded` or `Failed`. Serializes with a
/// `status` discriminant so the client can hydrate the same tri-state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LocaleLoad {
    Pending,
    Loaded { messages: MessageCatalog },
    Failed { error: String },
}

impl LocaleLoad {
    /// Whether a catalog was loaded. This is the boolean callers must check
    /// before assuming message lookups will succeed.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn catalog(&self) -> Option<&MessageCatalog> {
        match self {
            Self::Loaded { messages } => Some(messages),
            _ => None,
        }
    }
}

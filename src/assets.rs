//! Asset manifest.
//!
//! The build pipeline emits `assets.json`, mapping bundle entry names to
//! their script URLs. The manifest is loaded once at startup. The `vendor`
//! and `client` entries are a startup invariant: every page embeds them, so
//! a manifest without them is a deployment error and the process refuses to
//! boot rather than 500 on every request.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Entry names every manifest must provide.
const REQUIRED_ENTRIES: [&str; 2] = ["vendor", "client"];

/// One bundle entry in `assets.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetEntry {
    /// URL of the entry's script bundle
    pub js: String,
}

/// The parsed bundle manifest.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    entries: HashMap<String, AssetEntry>,
}

/// Manifest loading errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read asset manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("asset manifest is missing the \"{name}\" entry")]
    MissingEntry { name: &'static str },
}

impl AssetManifest {
    /// Load and validate the manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse and validate a manifest from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        let entries: HashMap<String, AssetEntry> = serde_json::from_str(raw)?;
        for name in REQUIRED_ENTRIES {
            if !entries.contains_key(name) {
                return Err(ManifestError::MissingEntry { name });
            }
        }
        Ok(Self { entries })
    }

    /// Script URL for a named chunk, if the manifest has it.
    pub fn chunk(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|entry| entry.js.as_str())
    }

    /// The script URLs for a page: vendor bundle, client bundle, and the
    /// route's chunk bundle when one is declared and present.
    ///
    /// Each URL appears at most once, whatever the chunk is named.
    pub fn scripts_for(&self, chunk: Option<&str>) -> Vec<String> {
        let mut scripts = vec![
            self.entries["vendor"].js.clone(),
            self.entries["client"].js.clone(),
        ];
        if let Some(url) = chunk.and_then(|name| self.chunk(name)) {
            if !scripts.iter().any(|script| script == url) {
                scripts.push(url.to_owned());
            }
        }
        scripts
    }
}

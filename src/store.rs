//! Local view-model store.
//!
//! File-backed key/value persistence for the session: the user's identity,
//! the aggregated dashboard document, and the legacy astro-insights blob.
//! Reads are lenient (missing or malformed JSON becomes the empty document),
//! writes are synchronous last-writer-wins with no cross-key coupling.

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};

use crate::error::Result;
use crate::model::Identity;

pub const IDENTITY_KEY: &str = "user";
pub const DASHBOARD_KEY: &str = "ayurveda-dashboard";
pub const ASTRO_KEY: &str = "astro-insights";

/// Session-scoped store with an explicit lifecycle: opened at login, cleared
/// at logout. One JSON file per key under the store's root directory.
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted under the platform data directory.
    pub fn open_default() -> Self {
        let root = if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join("prana").join("session")
        } else {
            PathBuf::from("cache").join("session")
        };
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }

    pub fn read_raw(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    pub fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Lenient document read: a missing key or malformed JSON yields `{}`.
    pub fn read_document(&self, key: &str) -> Value {
        self.read_raw(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(|| json!({}))
    }

    pub fn write_document(&self, key: &str, value: &Value) -> Result<()> {
        self.write_raw(key, &value.to_string())
    }

    /// Stored identity, if one exists and parses.
    pub fn identity(&self) -> Option<Identity> {
        let raw = self.read_raw(IDENTITY_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Create-once identity write: an already stored identity wins, so a
    /// later login never overwrites the original credentials. Returns the
    /// identity that ended up stored.
    pub fn set_identity_if_absent(&self, candidate: Identity) -> Result<Identity> {
        if let Some(existing) = self.identity() {
            return Ok(existing);
        }
        self.write_raw(IDENTITY_KEY, &serde_json::to_string(&candidate)?)?;
        Ok(candidate)
    }

    pub fn view_model(&self) -> Value {
        self.read_document(DASHBOARD_KEY)
    }

    pub fn set_view_model(&self, document: &Value) -> Result<()> {
        self.write_document(DASHBOARD_KEY, document)
    }

    pub fn astro_insights(&self) -> Value {
        self.read_document(ASTRO_KEY)
    }

    pub fn set_astro_insights(&self, document: &Value) -> Result<()> {
        self.write_document(ASTRO_KEY, document)
    }

    /// Logout: drop every key this store owns.
    pub fn clear(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }
}

/// Sanitize a store key for filesystem use.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! store and services. Request handling never reads environment variables.

use crate::constants::DEFAULT_MONGODB_URI;
use crate::{NoteError, NoteResult};
use std::str::FromStr;

/// Which [`NoteStore`](crate::store::NoteStore) implementation backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = NoteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(NoteError::InvalidConfig(format!(
                "unsupported store backend `{other}`; expected mongodb|memory"
            ))),
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::MongoDb => write!(f, "mongodb"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct NotesConfig {
    mongodb_uri: String,
    store_backend: StoreBackend,
    seed_on_list: bool,
}

impl NotesConfig {
    /// Create a new `NotesConfig`.
    pub fn new(
        mongodb_uri: String,
        store_backend: StoreBackend,
        seed_on_list: bool,
    ) -> NoteResult<Self> {
        if mongodb_uri.trim().is_empty() {
            return Err(NoteError::InvalidConfig(
                "mongodb_uri cannot be empty".into(),
            ));
        }

        Ok(Self {
            mongodb_uri,
            store_backend,
            seed_on_list,
        })
    }

    /// Resolve configuration from raw environment values.
    ///
    /// Each argument is the value of the corresponding variable, if set:
    /// `MONGODB_URI`, `NOTES_STORE` and `NOTES_SEED_ON_LIST`.
    pub fn from_env_values(
        mongodb_uri: Option<String>,
        store_backend: Option<String>,
        seed_on_list: Option<String>,
    ) -> NoteResult<Self> {
        Self::new(
            mongodb_uri_from_env_value(mongodb_uri),
            store_backend_from_env_value(store_backend)?,
            seed_on_list_from_env_value(seed_on_list)?,
        )
    }

    /// Convenience wrapper reading the process environment.
    ///
    /// Call this once from `main`; do not call it while serving requests.
    pub fn from_env() -> NoteResult<Self> {
        Self::from_env_values(
            std::env::var("MONGODB_URI").ok(),
            std::env::var("NOTES_STORE").ok(),
            std::env::var("NOTES_SEED_ON_LIST").ok(),
        )
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.store_backend
    }

    /// Whether listing notes runs the seeder first.
    pub fn seed_on_list(&self) -> bool {
        self.seed_on_list
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Connection string, falling back to the local default when unset or blank.
pub fn mongodb_uri_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string())
}

/// Parse the store backend; unset or blank selects MongoDB.
pub fn store_backend_from_env_value(value: Option<String>) -> NoteResult<StoreBackend> {
    non_blank(value)
        .map(|v| v.parse::<StoreBackend>())
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Parse the seed-on-list flag; unset or blank means enabled.
pub fn seed_on_list_from_env_value(value: Option<String>) -> NoteResult<bool> {
    let Some(value) = non_blank(value) else {
        return Ok(true);
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(NoteError::InvalidConfig(format!(
            "NOTES_SEED_ON_LIST must be a boolean, got `{other}`"
        ))),
    }
}

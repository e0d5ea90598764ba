//! Application Configuration
//!
//! Compiled-in defaults for the API address, resync behaviour and logging.

use log::Level;
use reqwest::Url;
use thiserror::Error;

/// json-server's default address
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
pub const DEFAULT_COLLECTION: &str = "items";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Whether a mutation the server rejected (non-2xx) still triggers a resync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResyncPolicy {
    /// Only successful mutations resync; rejections keep the form as typed
    #[default]
    OnSuccess,
    /// Any response resyncs, rejected or not
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub collection: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl ApiConfig {
    /// Absolute URL of the collection endpoint, e.g. `http://localhost:3000/items`
    pub fn collection_url(&self) -> Result<Url, ConfigError> {
        let mut base = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "not a base URL".to_string(),
            });
        }
        // `join` replaces the last segment unless the path ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let collection = self.collection.trim_matches('/');
        base.join(collection).map_err(|e| ConfigError::InvalidUrl {
            url: format!("{}{}", base, collection),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub resync_policy: ResyncPolicy,
    /// Most verbose level forwarded to the browser console
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            resync_policy: ResyncPolicy::default(),
            log_level: Level::Info,
        }
    }
}

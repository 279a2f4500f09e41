use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Plain HTTP origin of the avatar service
pub const HTTP_HOST: &str = "http://www.gravatar.com";

/// Secure origin of the avatar service
pub const HTTPS_HOST: &str = "https://secure.gravatar.com";

/// Smallest image size the service accepts
pub const MIN_SIZE: u32 = 1;

/// Largest image size the service accepts
pub const MAX_SIZE: u32 = 2048;

/// Timeout in seconds used when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Construction options for [`crate::Gravatar`]
///
/// Keys mirror the recognized option names, so an options object can be
/// loaded straight from JSON with [`Options::from_json`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Download directory, defaults to the system temp directory
    pub destination: Option<PathBuf>,

    /// Image size in pixels
    pub size: Option<u32>,

    /// Use the secure origin
    pub https: Option<bool>,

    /// Content rating (g, pg, r, x)
    pub rating: Option<String>,

    /// Default image keyword or absolute URL
    #[serde(rename = "default")]
    pub default_image: Option<String>,

    /// Always serve the default image
    pub default_force: Option<bool>,

    /// Timeout in seconds for HTTP requests
    pub timeout_seconds: Option<u64>,

    /// Origin override, replaces the service host when set
    pub base_url: Option<String>,
}

impl Options {
    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the fields that are not covered by the builder setters
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            if url.trim().is_empty() {
                return Err(Error::Validation("Base URL cannot be empty".to_string()));
            }
        }

        if self.timeout_seconds == Some(0) {
            return Err(Error::Validation(
                "Timeout needs to be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the timeout in seconds, falling back to the default if not set
    pub fn get_timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    /// Get the destination, falling back to the system temp directory
    pub fn get_destination(&self) -> PathBuf {
        self.destination.clone().unwrap_or_else(std::env::temp_dir)
    }
}

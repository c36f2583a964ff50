//! Configuration constants and utilities for binlook
//!
//! Lookup-service settings live in an INI profile file with one section per
//! profile. A missing file or section falls back to the built-in defaults,
//! so the tool works out of the box against the public binlist service.

use std::time::Duration;

use anyhow::{Context, Result};
use ini::Ini;

/// Default profile file path for binlook
pub const DEFAULT_PROFILE_PATH: &str = "~/.binlook/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "BINLOOK_PROFILE_PATH";

/// Default BIN metadata endpoint
pub const DEFAULT_ENDPOINT: &str = "https://lookup.binlist.net";

/// Default HTTP timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default quiet period before a typed BIN is looked up, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 2_000;

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Settings for one lookup profile
#[derive(Debug, Clone, PartialEq)]
pub struct LookupProfile {
    endpoint: String,
    timeout: Duration,
    debounce: Duration,
}

impl Default for LookupProfile {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl LookupProfile {
    /// Load the named profile from the INI file at `path`.
    ///
    /// A missing file or missing section yields the default profile; a file
    /// that exists but cannot be parsed, or a malformed numeric value, is an
    /// error.
    pub fn load(profile_name: &str, path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();

        if !std::path::Path::new(&expanded).exists() {
            tracing::debug!("No profile file at '{}', using defaults", expanded);
            return Ok(Self::default());
        }

        let conf = Ini::load_from_file(&expanded)
            .with_context(|| format!("Failed to parse profile file '{expanded}'"))?;

        let Some(section) = conf.section(Some(profile_name)) else {
            tracing::debug!(
                "Profile '{}' not found in '{}', using defaults",
                profile_name,
                expanded
            );
            return Ok(Self::default());
        };

        let mut profile = Self::default();
        if let Some(endpoint) = section.get("endpoint") {
            profile.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = section.get("timeout_ms") {
            let ms: u64 = timeout
                .parse()
                .with_context(|| format!("Invalid timeout_ms '{timeout}' in profile"))?;
            profile.timeout = Duration::from_millis(ms);
        }
        if let Some(debounce) = section.get("debounce_ms") {
            let ms: u64 = debounce
                .parse()
                .with_context(|| format!("Invalid debounce_ms '{debounce}' in profile"))?;
            profile.debounce = Duration::from_millis(ms);
        }

        tracing::info!("Loaded profile '{}' from '{}'", profile_name, expanded);
        Ok(profile)
    }

    /// Base URL of the BIN metadata service
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Timeout applied to each lookup request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Quiet period before a typed BIN is looked up
    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}

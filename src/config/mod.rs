//! Configuration module for the volc-auc client
//!
//! Settings come from .env files, YAML files, and environment variables.
//! Priority: YAML > ENV vars > .env values > defaults. Command-line flags are
//! applied on top by the binary.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//! - `utils`: Utility functions for configuration parsing
//!
//! # Example
//! ```rust,no_run
//! use volc_auc::config::ClientConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ClientConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("volc-auc.yaml");
//! let config = ClientConfig::from_file(&config_path)?;
//!
//! println!("Submitting to {}", config.submit_url);
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::Duration;

mod merge;
mod utils;
mod validation;
mod yaml;

pub use utils::parse_bool;
pub use yaml::YamlConfig;

use crate::core::auc::{
    AUC_QUERY_URL, AUC_SUBMIT_URL, AucResource, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL,
    DEFAULT_UID, PollPolicy, RecognitionOptions,
};

/// Client configuration
///
/// Everything needed to talk to the recognition service except the
/// credentials, which are passed separately so they can be zeroized.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    // Endpoints
    pub submit_url: String,
    pub query_url: String,

    /// Value of `X-Api-Resource-Id`
    pub resource: AucResource,
    /// `user.uid` in the submit payload
    pub uid: String,
    /// `request` object of the submit payload
    pub recognition: RecognitionOptions,

    // Transport guards
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    /// Whole-call timeout, including redirects and body download
    pub request_timeout_secs: u64,

    // Polling
    pub poll_interval_ms: u64,
    /// Default: None (poll until a terminal status arrives)
    pub max_wait_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            submit_url: AUC_SUBMIT_URL.to_string(),
            query_url: AUC_QUERY_URL.to_string(),
            resource: AucResource::default(),
            uid: DEFAULT_UID.to_string(),
            recognition: RecognitionOptions::default(),
            connect_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            max_wait_secs: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// The .env file is loaded in main.rs at startup, so its values are
    /// already visible as environment variables here.
    ///
    /// # Errors
    /// Returns an error if a variable is malformed or validation fails.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Self::load(None)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let config = Self::load(Some(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration without validating it
    ///
    /// Used by the binary so command-line overrides can replace invalid
    /// file or environment values before `validate` runs.
    ///
    /// # Errors
    /// Returns an error if the YAML file cannot be read or a variable is
    /// malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml_config = path.map(yaml::YamlConfig::from_file).transpose()?;
        merge::merge_config(yaml_config)
    }

    /// Check endpoints, timeouts and poll settings.
    pub fn validate(&self) -> Result<(), String> {
        validation::validate_endpoint("submit_url", &self.submit_url)?;
        validation::validate_endpoint("query_url", &self.query_url)?;
        validation::validate_resource(&self.resource)?;
        validation::validate_timeouts(
            self.connect_timeout_secs,
            self.read_timeout_secs,
            self.request_timeout_secs,
        )?;
        validation::validate_poll(self.poll_interval_ms, self.max_wait_secs)?;
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Poll pacing derived from `poll_interval_ms` and `max_wait_secs`.
    pub fn poll_policy(&self) -> PollPolicy {
        let policy = PollPolicy::new(Duration::from_millis(self.poll_interval_ms));
        match self.max_wait_secs {
            Some(secs) => policy.with_max_wait(Duration::from_secs(secs)),
            None => policy,
        }
    }
}

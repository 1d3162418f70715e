//! Configuration types for the Volcengine BigASR file recognition API.
//!
//! This module contains:
//! - Endpoint and header constants
//! - Resource selection (BigASR, SeedASR model 2.0)
//! - Recognition options sent in the submit payload
//! - Credentials and polling policy

use serde::{Deserialize, Serialize};
use std::time::Duration;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// Constants
// =============================================================================

/// Submit endpoint for audio file recognition tasks.
pub const AUC_SUBMIT_URL: &str = "https://openspeech-direct.zijieapi.com/api/v3/auc/bigmodel/submit";

/// Query endpoint for audio file recognition tasks.
pub const AUC_QUERY_URL: &str = "https://openspeech-direct.zijieapi.com/api/v3/auc/bigmodel/query";

/// Default model name in the request payload.
pub const DEFAULT_MODEL_NAME: &str = "bigmodel";

/// Default user id in the request payload.
pub const DEFAULT_UID: &str = "fake_uid";

/// Default delay between query calls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default connect, read and overall call timeout.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Sequence marker sent with the submit request.
pub const SUBMIT_SEQUENCE: &str = "-1";

/// Request header names.
pub mod headers {
    pub const APP_KEY: &str = "X-Api-App-Key";
    pub const ACCESS_KEY: &str = "X-Api-Access-Key";
    pub const RESOURCE_ID: &str = "X-Api-Resource-Id";
    pub const REQUEST_ID: &str = "X-Api-Request-Id";
    pub const SEQUENCE: &str = "X-Api-Sequence";
    pub const STATUS_CODE: &str = "X-Api-Status-Code";
    pub const MESSAGE: &str = "X-Api-Message";
    pub const LOGID: &str = "X-Tt-Logid";
}

// =============================================================================
// Resource
// =============================================================================

/// Recognition resource addressed by `X-Api-Resource-Id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AucResource {
    /// BigASR file recognition (`volc.bigasr.auc`)
    #[default]
    BigAsr,
    /// Doubao file recognition model 2.0 (`volc.seedasr.auc`)
    SeedAsr,
    /// Any other resource id granted to the application
    Custom(String),
}

impl AucResource {
    /// Convert to the header value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::BigAsr => "volc.bigasr.auc",
            Self::SeedAsr => "volc.seedasr.auc",
            Self::Custom(id) => id,
        }
    }

    /// Parse from a resource id or short alias. Unknown ids are kept verbatim.
    pub fn from_str_or_custom(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "volc.bigasr.auc" | "bigasr" | "bigmodel" => Self::BigAsr,
            "volc.seedasr.auc" | "seedasr" | "seed" => Self::SeedAsr,
            _ => Self::Custom(s.trim().to_string()),
        }
    }
}

impl std::fmt::Display for AucResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Recognition Options
// =============================================================================

/// Hotword / correction context attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// Name of a correction table configured in the console
    pub correct_table_name: String,
    /// Free-form context text
    pub context: String,
}

/// The `request` object of the submit payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionOptions {
    pub model_name: String,
    /// Recognize each channel separately
    pub enable_channel_split: bool,
    /// Disfluency removal
    pub enable_ddc: bool,
    pub enable_speaker_info: bool,
    pub enable_punc: bool,
    /// Inverse text normalization
    pub enable_itn: bool,
    pub corpus: Corpus,
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            enable_channel_split: true,
            enable_ddc: true,
            enable_speaker_info: true,
            enable_punc: true,
            enable_itn: true,
            corpus: Corpus::default(),
        }
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// Application credentials sent on every request.
///
/// Both values are wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    app_id: String,
    access_token: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            access_token: access_token.into(),
        }
    }

    #[inline]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    #[inline]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Ensure both values are present and usable as header values.
    pub fn validate(&self) -> Result<(), String> {
        if self.app_id.trim().is_empty() {
            return Err("Application id is required".to_string());
        }
        if self.access_token.trim().is_empty() {
            return Err("Access token is required".to_string());
        }
        if reqwest::header::HeaderValue::from_str(&self.app_id).is_err() {
            return Err("Application id contains characters not allowed in a header".to_string());
        }
        if reqwest::header::HeaderValue::from_str(&self.access_token).is_err() {
            return Err("Access token contains characters not allowed in a header".to_string());
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Poll Policy
// =============================================================================

/// How the query loop paces itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between two query calls
    pub interval: Duration,
    /// Give up once a pending task has been polled for this long.
    /// `None` polls until a terminal status arrives.
    pub max_wait: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: None,
        }
    }
}

impl PollPolicy {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_wait: None,
        }
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }
}

//! Message types for the BigASR file recognition API.
//!
//! The submit payload is sent as JSON; task state travels in response
//! headers (`X-Api-Status-Code`, `X-Api-Message`, `X-Tt-Logid`), and the
//! query body carries the recognition result once the task succeeds.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use super::config::{RecognitionOptions, headers};

// =============================================================================
// Status Codes
// =============================================================================

/// Task finished; the query body holds the result.
pub const STATUS_SUCCESS: &str = "20000000";

/// Task accepted and being processed.
pub const STATUS_PROCESSING: &str = "20000001";

/// Task accepted and waiting in the queue.
pub const STATUS_QUEUED: &str = "20000002";

// =============================================================================
// Submit Request
// =============================================================================

/// Top-level submit payload.
///
/// Borrows its parts so inline audio is not copied before serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubmitRequest<'a> {
    pub user: UserInfo<'a>,
    pub audio: &'a AudioSource,
    pub request: &'a RecognitionOptions,
}

impl<'a> SubmitRequest<'a> {
    pub fn new(uid: &'a str, audio: &'a AudioSource, request: &'a RecognitionOptions) -> Self {
        Self {
            user: UserInfo { uid },
            audio,
            request,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserInfo<'a> {
    pub uid: &'a str,
}

/// Where the service should read the audio from.
///
/// Serializes to `{"url": ...}` or `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AudioSource {
    /// Publicly reachable audio URL
    Url { url: String },
    /// Base64-encoded audio bytes
    Data { data: String },
}

impl AudioSource {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// Short description for logs; never includes inline audio.
    pub fn describe(&self) -> String {
        match self {
            Self::Url { url } => url.clone(),
            Self::Data { data } => format!("<{} bytes of base64 audio>", data.len()),
        }
    }
}

// =============================================================================
// Status Headers
// =============================================================================

/// Task state read from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusHeaders {
    pub status_code: Option<String>,
    pub message: Option<String>,
    pub logid: Option<String>,
}

impl StatusHeaders {
    /// Parse status headers from an HTTP response.
    pub fn from_headers(map: &HeaderMap) -> Self {
        let read = |name: &str| {
            map.get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };

        Self {
            status_code: read(headers::STATUS_CODE),
            message: read(headers::MESSAGE),
            logid: read(headers::LOGID),
        }
    }

    #[inline]
    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_code(self.status_code.as_deref())
    }

    pub fn message_or_empty(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Render all headers for a diagnostic message.
pub fn format_headers(map: &HeaderMap) -> String {
    map.iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("<binary>")))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Task Status
// =============================================================================

/// Why a task is not finished yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingStage {
    /// `20000001`
    Processing,
    /// `20000002`
    Queued,
}

/// Outcome of a single status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Success,
    Pending(PendingStage),
    /// Any other code; empty when the header was missing.
    Failed(String),
}

impl TaskStatus {
    /// Codes are compared verbatim.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(STATUS_SUCCESS) => Self::Success,
            Some(STATUS_PROCESSING) => Self::Pending(PendingStage::Processing),
            Some(STATUS_QUEUED) => Self::Pending(PendingStage::Queued),
            Some(other) => Self::Failed(other.to_string()),
            None => Self::Failed(String::new()),
        }
    }
}

// =============================================================================
// Query Result Body
// =============================================================================

/// Success body of the query endpoint.
///
/// Only the fields needed for subtitle export are modelled; everything is
/// optional so partial results still parse. Besides the v3 `result` object,
/// the older `response.sentence_list` and top-level `words` layouts are
/// accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryResponse {
    pub audio_info: Option<AudioInfo>,
    pub result: Option<RecognitionResult>,
    pub response: Option<SentenceListResponse>,
    /// Word timings, `st`/`et` in milliseconds
    pub words: Vec<TimedSegment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioInfo {
    /// Audio duration in milliseconds.
    pub duration: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionResult {
    /// Full transcript.
    pub text: String,
    pub utterances: Vec<Utterance>,
    pub sentences: Vec<Sentence>,
}

/// One recognized sentence with timing in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Utterance {
    pub text: String,
    pub start_time: u64,
    pub end_time: u64,
}

/// Sentence with timing in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentence {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceListResponse {
    pub sentence_list: Vec<TimedSegment>,
}

/// Text span with `st`/`et` in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimedSegment {
    pub text: String,
    pub st: u64,
    pub et: u64,
}

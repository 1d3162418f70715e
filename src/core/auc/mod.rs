//! Volcengine BigASR audio file recognition (v3 `auc/bigmodel`).
//!
//! File recognition is asynchronous: a task is submitted once and its result
//! is fetched by polling a query endpoint with the identifiers returned at
//! submission.
//!
//! # Features
//!
//! - Audio by URL or inline base64 data
//! - Resource selection (`volc.bigasr.auc`, `volc.seedasr.auc`, custom ids)
//! - Speaker info, punctuation, ITN, disfluency removal and channel split
//!   flags
//! - Hotword / correction table context
//! - Fixed-interval polling with an optional deadline
//!
//! # Status Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `20000000` | Success; the query body holds the result |
//! | `20000001` | Processing |
//! | `20000002` | Queued |
//! | anything else | Failure |
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use volc_auc::config::ClientConfig;
//! use volc_auc::core::auc::{AucClient, AudioSource, Credentials, poll_until_complete};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let policy = config.poll_policy();
//!     let client = AucClient::new(config, Credentials::new("app-id", "access-token"))?;
//!
//!     let task = client
//!         .submit(&AudioSource::url("https://example.com/interview.mp3"))
//!         .await?;
//!     let result = poll_until_complete(&client, &task, &policy).await?;
//!     println!("{}", result.body);
//!     Ok(())
//! }
//! ```

mod client;
pub mod config;
pub mod messages;
mod poller;

#[cfg(test)]
mod tests;

pub use client::{AucClient, QueryOutcome, SubmittedTask};
pub use config::{
    AUC_QUERY_URL, AUC_SUBMIT_URL, AucResource, Corpus, Credentials, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_MODEL_NAME, DEFAULT_POLL_INTERVAL, DEFAULT_UID, PollPolicy, RecognitionOptions,
    SUBMIT_SEQUENCE, headers,
};
pub use messages::{
    AudioInfo, AudioSource, PendingStage, QueryResponse, RecognitionResult, STATUS_PROCESSING,
    STATUS_QUEUED, STATUS_SUCCESS, Sentence, SentenceListResponse, StatusHeaders, SubmitRequest,
    TaskStatus, TimedSegment, Utterance,
};
pub use poller::{TaskResult, poll_until_complete};

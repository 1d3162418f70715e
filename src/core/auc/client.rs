//! BigASR file recognition client.
//!
//! # Protocol
//!
//! 1. `submit` POSTs the typed payload with a fresh UUID as
//!    `X-Api-Request-Id`. Acceptance is signalled by `X-Api-Status-Code:
//!    20000000`; the `X-Tt-Logid` header returned with it identifies the task
//!    on the server side.
//! 2. `query` POSTs `{}` with the same request id and the logid, and reports
//!    the status code found in the response headers.
//!
//! The HTTP status line is not consulted; the service reports everything
//! through its own status header.

use reqwest::Client;
use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::config::{Credentials, PollPolicy, SUBMIT_SEQUENCE, headers};
use super::messages::{AudioSource, StatusHeaders, SubmitRequest, TaskStatus, format_headers};
use super::poller::{TaskResult, poll_until_complete};
use crate::config::ClientConfig;
use crate::errors::auc_error::{AucError, AucResult};

/// User-Agent header value for API requests.
const USER_AGENT: &str = concat!("volc-auc/", env!("CARGO_PKG_VERSION"));

/// A task accepted by the submit endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTask {
    /// Client-generated UUID, sent as `X-Api-Request-Id`
    pub task_id: String,
    /// Server-issued `X-Tt-Logid`, empty if the header was absent
    pub logid: String,
}

/// A single query response.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub status: TaskStatus,
    pub headers: StatusHeaders,
    /// Raw response body
    pub body: String,
}

/// Client for the submit and query endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use volc_auc::config::ClientConfig;
/// use volc_auc::core::auc::{AucClient, AudioSource, Credentials};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::default();
///     let policy = config.poll_policy();
///     let client = AucClient::new(config, Credentials::new("app-id", "token"))?;
///
///     let audio = AudioSource::url("https://example.com/meeting.wav");
///     let result = client.transcribe(&audio, &policy).await?;
///     println!("{}", result.body);
///     Ok(())
/// }
/// ```
pub struct AucClient {
    /// HTTP client for API requests (reused for connection pooling).
    http_client: Client,
    config: ClientConfig,
    credentials: Credentials,
}

impl AucClient {
    /// Create a client with validated configuration and credentials.
    ///
    /// # Errors
    /// * `AucError::ConfigurationError` - invalid settings, missing
    ///   credentials, or the HTTP client could not be built
    pub fn new(config: ClientConfig, credentials: Credentials) -> AucResult<Self> {
        config.validate().map_err(AucError::ConfigurationError)?;
        credentials
            .validate()
            .map_err(AucError::ConfigurationError)?;

        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .read_timeout(config.read_timeout())
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AucError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            http_client,
            config,
            credentials,
        })
    }

    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit an audio source for recognition.
    ///
    /// # Errors
    /// * `AucError::SubmitRejected` - status header missing or not `20000000`
    /// * `AucError::NetworkError` - transport failure
    pub async fn submit(&self, audio: &AudioSource) -> AucResult<SubmittedTask> {
        let task_id = Uuid::new_v4().to_string();
        info!("Submit task id: {}", task_id);

        let payload = SubmitRequest::new(&self.config.uid, audio, &self.config.recognition);
        debug!(
            audio = %audio.describe(),
            model = %self.config.recognition.model_name,
            resource = %self.config.resource,
            "Submit request"
        );

        let response = self
            .http_client
            .post(&self.config.submit_url)
            .header(headers::APP_KEY, self.credentials.app_id())
            .header(headers::ACCESS_KEY, self.credentials.access_token())
            .header(headers::RESOURCE_ID, self.config.resource.as_str())
            .header(headers::REQUEST_ID, task_id.as_str())
            .header(headers::SEQUENCE, SUBMIT_SEQUENCE)
            .json(&payload)
            .send()
            .await?;

        let status = StatusHeaders::from_headers(response.headers());
        let header_dump = format_headers(response.headers());
        let http_status = response.status();
        let body = response.text().await?;
        debug!("Submit response body: {}", body);

        if status.status() != TaskStatus::Success {
            warn!(
                "Submit task failed (HTTP {}), response headers: {}",
                http_status, header_dump
            );
            return Err(AucError::SubmitRejected {
                code: status.status_code.clone().unwrap_or_default(),
                message: status.message_or_empty().to_string(),
            });
        }

        let logid = status.logid.unwrap_or_default();
        info!(
            "Submit task response: X-Api-Status-Code={} X-Api-Message={} X-Tt-Logid={}",
            status.status_code.as_deref().unwrap_or_default(),
            status.message.as_deref().unwrap_or_default(),
            logid
        );

        Ok(SubmittedTask { task_id, logid })
    }

    /// Query the current state of a submitted task.
    ///
    /// # Errors
    /// * `AucError::MissingStatusHeader` - response has no status header
    /// * `AucError::NetworkError` - transport failure
    pub async fn query(&self, task: &SubmittedTask) -> AucResult<QueryOutcome> {
        let response = self
            .http_client
            .post(&self.config.query_url)
            .header(headers::APP_KEY, self.credentials.app_id())
            .header(headers::ACCESS_KEY, self.credentials.access_token())
            .header(headers::RESOURCE_ID, self.config.resource.as_str())
            .header(headers::REQUEST_ID, task.task_id.as_str())
            .header(headers::LOGID, task.logid.as_str())
            .json(&json!({}))
            .send()
            .await?;

        let status = StatusHeaders::from_headers(response.headers());
        let Some(code) = status.status_code.as_deref() else {
            let header_dump = format_headers(response.headers());
            warn!("Query task failed, response headers: {}", header_dump);
            return Err(AucError::MissingStatusHeader {
                headers: header_dump,
            });
        };

        info!(
            "Query task response: X-Api-Status-Code={} X-Api-Message={} X-Tt-Logid={}",
            code,
            status.message_or_empty(),
            status.logid.as_deref().unwrap_or_default()
        );

        let body = response.text().await?;
        Ok(QueryOutcome {
            status: status.status(),
            headers: status,
            body,
        })
    }

    /// Submit the audio and poll until the task reaches a terminal state.
    pub async fn transcribe(
        &self,
        audio: &AudioSource,
        policy: &PollPolicy,
    ) -> AucResult<TaskResult> {
        let task = self.submit(audio).await?;
        poll_until_complete(self, &task, policy).await
    }
}

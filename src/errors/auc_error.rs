use std::time::Duration;

/// Errors produced while submitting or polling a recognition task.
///
/// The binary collapses every variant to exit code 1; the variants exist so
/// callers and tests can tell the failure modes apart.
#[derive(Debug, thiserror::Error)]
pub enum AucError {
    /// Invalid or incomplete client configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Audio URL or file could not be used as a recognition source
    #[error("Invalid audio source: {0}")]
    InvalidAudioSource(String),

    /// Local audio file could not be read
    #[error("Failed to read audio file: {0}")]
    AudioReadError(#[source] std::io::Error),

    /// Transport-level failure (connect, timeout, body read)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Submit endpoint did not answer with the success status code
    #[error("Submit task failed (X-Api-Status-Code: {code}, X-Api-Message: {message})")]
    SubmitRejected { code: String, message: String },

    /// Query response carried no `X-Api-Status-Code` header
    #[error("Query task failed, response has no X-Api-Status-Code header: {headers}")]
    MissingStatusHeader { headers: String },

    /// Query returned a terminal failure status code
    #[error("Task failed (X-Api-Status-Code: {code}, X-Api-Message: {message})")]
    TaskFailed { code: String, message: String },

    /// Task still pending after the configured maximum wait
    #[error("Task still pending after {0:?}")]
    DeadlineExceeded(Duration),

    /// Output file (SRT) could not be written
    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    /// Recognition result could not be converted to subtitles
    #[error("Subtitle error: {0}")]
    SubtitleError(String),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for AucError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AucError::NetworkError(format!("Request timed out: {err}"))
        } else if err.is_connect() {
            AucError::NetworkError(format!("Connection failed: {err}"))
        } else {
            AucError::NetworkError(format!("Request failed: {err}"))
        }
    }
}

// Result type alias for convenience
pub type AucResult<T> = Result<T, AucError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_rejected_display_includes_code_and_message() {
        let err = AucError::SubmitRejected {
            code: "45000001".to_string(),
            message: "invalid params".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("45000001"));
        assert!(text.contains("invalid params"));
    }

    #[test]
    fn test_audio_read_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.wav");
        let err = AucError::AudioReadError(io);
        assert!(err.to_string().starts_with("Failed to read audio file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_output_write_error_display() {
        let err = AucError::OutputWriteError("/tmp/out.srt: permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to write output file: /tmp/out.srt: permission denied"
        );
    }

    #[test]
    fn test_deadline_display() {
        let err = AucError::DeadlineExceeded(Duration::from_secs(5));
        assert_eq!(err.to_string(), "Task still pending after 5s");
    }
}

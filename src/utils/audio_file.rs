//! Build an [`AudioSource`] from command-line input.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use std::path::Path;
use tracing::debug;

use super::url_validation::validate_audio_url;
use crate::core::auc::AudioSource;
use crate::errors::auc_error::{AucError, AucResult};

/// Validate a URL and wrap it as an audio source.
///
/// The URL is sent as given (trimmed), not in its normalized form.
pub fn audio_source_from_url(url: &str) -> AucResult<AudioSource> {
    validate_audio_url(url).map_err(|e| AucError::InvalidAudioSource(e.to_string()))?;
    Ok(AudioSource::url(url.trim()))
}

/// Read a local file and embed it as base64 audio data.
pub async fn audio_source_from_file(path: &Path) -> AucResult<AudioSource> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(AucError::AudioReadError)?;
    if bytes.is_empty() {
        return Err(AucError::InvalidAudioSource(format!(
            "Audio file is empty: {}",
            path.display()
        )));
    }

    debug!("Encoding {} bytes from {}", bytes.len(), path.display());
    Ok(AudioSource::Data {
        data: BASE64.encode(&bytes),
    })
}

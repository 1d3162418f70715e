use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info};

use crate::core::auc::{QueryResponse, TimedSegment};
use crate::errors::auc_error::{AucError, AucResult};

/// Sentence terminators used when only plain text is available.
static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[。！？.!?]").expect("valid sentence regex"));

/// A single subtitle entry; times in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleCue {
    pub start_ms: u64,
    pub end_ms: u64,
    pub text: String,
}

/// Format milliseconds as an SRT timestamp (`HH:MM:SS,mmm`).
pub fn format_timestamp(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!(
        "{:02}:{:02}:{:02},{:03}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60,
        ms % 1000
    )
}

/// Extract cues from a parsed recognition result.
///
/// Sources are tried in order until one yields a cue:
/// 1. `result.utterances` (milliseconds)
/// 2. `response.sentence_list` (`st`/`et`, milliseconds)
/// 3. `result.sentences` (seconds)
/// 4. `result.text` split into sentences, with the audio duration spread
///    evenly across them; without a duration the whole transcript becomes
///    one cue
/// 5. top-level `words`, grouped by the second they start in
pub fn cues_from_response(response: &QueryResponse) -> Vec<SubtitleCue> {
    let result = response.result.as_ref();

    let utterances = result.map_or_else(Vec::new, |r| {
        timed_cues(r.utterances.iter().map(|u| (u.text.as_str(), u.start_time, u.end_time)))
    });
    if !utterances.is_empty() {
        return utterances;
    }

    let sentence_list = response.response.as_ref().map_or_else(Vec::new, |r| {
        timed_cues(r.sentence_list.iter().map(|s| (s.text.as_str(), s.st, s.et)))
    });
    if !sentence_list.is_empty() {
        return sentence_list;
    }

    let sentences = result.map_or_else(Vec::new, |r| {
        timed_cues(r.sentences.iter().map(|s| {
            (s.text.as_str(), seconds_to_ms(s.start_time), seconds_to_ms(s.end_time))
        }))
    });
    if !sentences.is_empty() {
        return sentences;
    }

    let duration = response.audio_info.as_ref().map_or(0, |a| a.duration);
    let plain = result.map_or_else(Vec::new, |r| plain_text_cues(&r.text, duration));
    if !plain.is_empty() {
        return plain;
    }

    word_cues(&response.words)
}

fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds * 1000.0) as u64
}

fn timed_cues<'a>(items: impl Iterator<Item = (&'a str, u64, u64)>) -> Vec<SubtitleCue> {
    items
        .filter(|(text, _, _)| !text.trim().is_empty())
        .map(|(text, start_ms, end_ms)| SubtitleCue {
            start_ms,
            end_ms: end_ms.max(start_ms),
            text: text.trim().to_string(),
        })
        .collect()
}

fn plain_text_cues(text: &str, duration: u64) -> Vec<SubtitleCue> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let sentences: Vec<&str> = SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if duration == 0 || sentences.is_empty() {
        debug!("No duration available, emitting a single cue");
        return vec![SubtitleCue {
            start_ms: 0,
            end_ms: duration,
            text: text.to_string(),
        }];
    }

    let per_sentence = duration / sentences.len() as u64;
    sentences
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| SubtitleCue {
            start_ms: i as u64 * per_sentence,
            end_ms: (i as u64 + 1) * per_sentence,
            text: sentence.to_string(),
        })
        .collect()
}

fn word_cues(words: &[TimedSegment]) -> Vec<SubtitleCue> {
    // second -> (latest end, joined text)
    let mut groups: BTreeMap<u64, (u64, String)> = BTreeMap::new();
    for word in words {
        let text = word.text.trim();
        if text.is_empty() {
            continue;
        }
        let (end_ms, joined) = groups
            .entry(word.st / 1000)
            .or_insert_with(|| (0, String::new()));
        *end_ms = (*end_ms).max(word.et);
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(text);
    }

    groups
        .into_iter()
        .map(|(second, (end_ms, text))| {
            let start_ms = second * 1000;
            SubtitleCue {
                start_ms,
                end_ms: end_ms.max(start_ms),
                text,
            }
        })
        .collect()
}

/// Render cues as SRT, numbered from 1.
pub fn render_srt(cues: &[SubtitleCue]) -> String {
    let mut out = String::new();
    for (index, cue) in cues.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            format_timestamp(cue.start_ms),
            format_timestamp(cue.end_ms),
            cue.text
        );
    }
    out
}

/// Convert a parsed recognition result into SRT text.
///
/// # Errors
/// * `AucError::SubtitleError` - result contains no transcript
pub fn srt_from_response(response: &QueryResponse) -> AucResult<String> {
    let cues = cues_from_response(response);
    if cues.is_empty() {
        return Err(AucError::SubtitleError(
            "recognition result contains no transcript".to_string(),
        ));
    }
    Ok(render_srt(&cues))
}

/// Convert a successful query body into SRT text.
///
/// # Errors
/// * `AucError::Serialization` - body is not JSON
/// * `AucError::SubtitleError` - body contains no transcript
pub fn generate_srt(body: &str) -> AucResult<String> {
    let response: QueryResponse = serde_json::from_str(body)?;
    srt_from_response(&response)
}

/// Write SRT content to `path`, creating parent directories.
///
/// # Errors
/// * `AucError::OutputWriteError` - directory or file could not be written
pub async fn write_srt(path: &Path, content: &str) -> AucResult<()> {
    let write_error =
        |e: std::io::Error| AucError::OutputWriteError(format!("{}: {e}", path.display()));

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }
    tokio::fs::write(path, content).await.map_err(write_error)?;
    info!("SRT written to {} ({} bytes)", path.display(), content.len());
    Ok(())
}

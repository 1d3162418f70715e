//! SubRip (SRT) export of recognition results.

mod srt;

pub use srt::{
    SubtitleCue, cues_from_response, format_timestamp, generate_srt, render_srt,
    srt_from_response, write_srt,
};

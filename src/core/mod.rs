pub mod auc;
pub mod subtitle;

// Re-export commonly used types for convenience
pub use auc::{
    AucClient, AucResource, AudioSource, Credentials, PollPolicy, RecognitionOptions,
    SubmittedTask, TaskResult, TaskStatus, poll_until_complete,
};

pub use subtitle::{generate_srt, srt_from_response, write_srt};

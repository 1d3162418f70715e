pub mod audio_file;
pub use audio_file::{audio_source_from_file, audio_source_from_url};
pub mod url_validation;
pub use url_validation::{UrlValidationError, validate_audio_url};

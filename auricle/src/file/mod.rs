//! Generic file handling utilities

mod audio_file;
mod file_type;
mod parsed_file;

pub use audio_file::AudioFile;
pub use file_type::{EXTENSIONS, FileType, MIME_TYPES};
pub use parsed_file::{ParseOutcome, ParsedFile};

//! WAV specific items
//!
//! ## File notes
//!
//! Only the canonical 44 byte PCM header is understood:
//!
//! ```text
//! offset  size  field
//! 0       4     "RIFF"
//! 4       4     RIFF chunk size
//! 8       4     "WAVE"
//! 12      4     "fmt "
//! 16      4     fmt chunk size
//! 20      2     format tag
//! 22      2     channels
//! 24      4     samples per second
//! 28      4     average bytes per second
//! 32      2     block align
//! 34      2     bits per sample
//! 36      4     "data"
//! 40      4     data chunk size
//! ```
//!
//! Chunks are not walked. A file with any other chunk between `fmt ` and `data`
//! (`LIST`, `fact`, an extended `fmt `, etc.) is rejected with
//! [`ErrorKind::UnrecognizedFormat`](crate::error::ErrorKind::UnrecognizedFormat).

mod properties;
mod read;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::{AudioFile, FileType, ParsedFile};
use crate::io::ByteStreamReader;

use std::io::{Read, Seek};

// Exports
pub use properties::{WavFormat, WavProperties};

/// A WAV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
	/// The file's audio properties
	pub(crate) properties: WavProperties,
}

impl AudioFile for WavFile {
	type Properties = WavProperties;

	fn read_from<R>(reader: &mut ByteStreamReader<R>, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		read::read_from(reader, parse_options)
	}

	fn properties(&self) -> &Self::Properties {
		&self.properties
	}
}

impl From<WavFile> for ParsedFile {
	fn from(input: WavFile) -> Self {
		Self {
			file_type: FileType::Wav,
			properties: input.properties.into(),
			tags: None,
		}
	}
}

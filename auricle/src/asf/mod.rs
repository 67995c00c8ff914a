//! ASF (WMA) specific items
//!
//! ## File notes
//!
//! An ASF file begins with a Header Object, which holds a number of top-level objects.
//! Each object starts with a 16 byte GUID and a 64-bit size that includes the object header
//! itself. The following objects are understood:
//!
//! * File Properties Object: play duration, preroll, flags and maximum bitrate
//! * Stream Properties Object: the `WAVEFORMATEX` of the first audio stream
//! * Content Description Object: title, artist, copyright, comment and rating
//! * Extended Content Description Object: arbitrary named attributes
//!
//! Every other object is skipped. An object that extends past the end of the Header Object is
//! an error ([`ErrorKind::TruncatedContainer`](crate::error::ErrorKind::TruncatedContainer)), as is a
//! stream that isn't audio ([`ErrorKind::UnsupportedStream`](crate::error::ErrorKind::UnsupportedStream)).
//!
//! The Data Object, which follows the Header Object, is never read.

pub mod guid;
mod object;
mod properties;
mod read;
mod tag;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::{AudioFile, FileType, ParsedFile};
use crate::io::ByteStreamReader;

use std::io::{Read, Seek};

// Exports
pub use guid::Guid;
pub use properties::AsfProperties;
pub use tag::{AttributeValue, TagFields};

/// An ASF file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsfFile {
	pub(crate) properties: AsfProperties,
	pub(crate) tags: Option<TagFields>,
}

impl AsfFile {
	/// The file's tags, if any were found and tag reading was enabled
	pub fn tags(&self) -> Option<&TagFields> {
		self.tags.as_ref()
	}
}

impl AudioFile for AsfFile {
	type Properties = AsfProperties;

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

impl From<AsfFile> for ParsedFile {
	fn from(input: AsfFile) -> Self {
		Self {
			file_type: FileType::Asf,
			properties: input.properties.into(),
			tags: input.tags,
		}
	}
}

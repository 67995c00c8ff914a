use super::parsed_file::ParsedFile;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::io::ByteStreamReader;

use std::io::{Read, Seek};

/// Provides a common interface between concrete container parsers
///
/// Every format reads from a [`ByteStreamReader`] and converts into the format agnostic
/// [`ParsedFile`], which is what [`FormatResolver`](crate::resolve::FormatResolver) hands back.
pub trait AudioFile: Into<ParsedFile> {
	/// The struct the file uses for audio properties
	///
	/// Not all formats can use [`AudioProperties`](crate::properties::AudioProperties) since they
	/// may contain additional information
	type Properties;

	/// Read a file from a reader
	///
	/// The container is read starting at offset 0 of the reader.
	///
	/// # Errors
	///
	/// Errors depend on the file being read. See [`ErrorKind`](crate::error::ErrorKind)
	fn read_from<R>(reader: &mut ByteStreamReader<R>, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
		Self: Sized;

	/// Returns a reference to the file's properties
	fn properties(&self) -> &Self::Properties;
}

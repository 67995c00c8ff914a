use super::file_type::FileType;
use crate::asf::TagFields;
use crate::error::Result;
use crate::properties::AudioProperties;

/// The result of a single parse
///
/// A parse either succeeds with a complete [`ParsedFile`], or fails with an
/// [`AuricleError`](crate::error::AuricleError). There is no partially populated state.
pub type ParseOutcome = Result<ParsedFile>;

/// A format agnostic representation of a parsed file
///
/// This is produced by [`FormatResolver`](crate::resolve::FormatResolver), or by converting any
/// concrete file type (such as [`WavFile`](crate::iff::wav::WavFile)) with [`Into`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
	pub(crate) file_type: FileType,
	pub(crate) properties: AudioProperties,
	pub(crate) tags: Option<TagFields>,
}

impl ParsedFile {
	/// Returns the file's [`FileType`]
	pub fn file_type(&self) -> FileType {
		self.file_type
	}

	/// Returns the file's [`AudioProperties`]
	pub fn properties(&self) -> &AudioProperties {
		&self.properties
	}

	/// Returns the file's tags, if the format has any and they were read
	pub fn tags(&self) -> Option<&TagFields> {
		self.tags.as_ref()
	}

	/// Take the tags out of the file
	pub fn into_tags(self) -> Option<TagFields> {
		self.tags
	}
}

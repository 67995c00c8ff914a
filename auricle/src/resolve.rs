//! Format resolution and dispatch
//!
//! A [`FormatResolver`] picks exactly one parser for a path. A MIME type supplied by the host
//! takes priority, the path's extension is used as a fallback.
//!
//! No content sniffing is performed. A file whose MIME type and extension are both unknown is
//! rejected without being opened.

use crate::asf::AsfFile;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::file::{AudioFile, FileType, ParseOutcome, ParsedFile};
use crate::iff::wav::WavFile;
use crate::io::ByteStreamReader;
use crate::macros::err;

use std::io::{Read, Seek};
use std::path::Path;

/// Dispatches a file to the parser for its format
///
/// The resolver holds no state besides its [`ParseOptions`], and can be freely copied and shared
/// between threads.
///
/// # Examples
///
/// ```rust
/// use auricle::file::FileType;
/// use auricle::resolve::FormatResolver;
///
/// let resolver = FormatResolver::new();
///
/// // The MIME type always wins
/// assert_eq!(
/// 	resolver.resolve("track.wav", Some("audio/x-ms-wma")),
/// 	Some(FileType::Asf)
/// );
///
/// // Unknown MIME types fall back to the extension
/// assert_eq!(
/// 	resolver.resolve("track.wav", Some("application/octet-stream")),
/// 	Some(FileType::Wav)
/// );
///
/// assert_eq!(resolver.resolve("track.xyz", None), None);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatResolver {
	options: ParseOptions,
}

impl FormatResolver {
	/// Create a new `FormatResolver` using the default [`ParseOptions`]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			options: ParseOptions::new(),
		}
	}

	/// Set the [`ParseOptions`] handed to every parser
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::config::{ParseOptions, ParsingMode};
	/// use auricle::resolve::FormatResolver;
	///
	/// let resolver =
	/// 	FormatResolver::new().options(ParseOptions::new().parsing_mode(ParsingMode::Strict));
	/// ```
	#[must_use]
	pub const fn options(mut self, options: ParseOptions) -> Self {
		self.options = options;
		self
	}

	/// Determine the [`FileType`] for a path, without opening it
	///
	/// `mime` is matched exactly against [`MIME_TYPES`](crate::file::MIME_TYPES), then the
	/// extension of `path` is tried.
	#[allow(clippy::unused_self)]
	pub fn resolve<P>(&self, path: P, mime: Option<&str>) -> Option<FileType>
	where
		P: AsRef<Path>,
	{
		if let Some(file_type) = mime.and_then(FileType::from_mime) {
			log::debug!("Resolved {file_type:?} from MIME type");
			return Some(file_type);
		}

		let file_type = FileType::from_path(path);
		if let Some(file_type) = file_type {
			log::debug!("Resolved {file_type:?} from extension");
		}

		file_type
	}

	/// Parse the file at `path`
	///
	/// The parser's outcome is returned as is, no fallback to another format is attempted.
	///
	/// # Errors
	///
	/// * [`ErrorKind::UnrecognizedFormat`](crate::error::ErrorKind::UnrecognizedFormat) if neither
	///   `mime` nor the extension resolve to a format. The file is not opened in this case.
	/// * [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) and friends if the file can't be opened
	/// * Any error from the parser, see [`AudioFile::read_from`]
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> auricle::error::Result<()> {
	/// use auricle::resolve::FormatResolver;
	///
	/// let parsed = FormatResolver::new().parse("track.wav", None)?;
	/// println!("{} channels", parsed.properties().channels());
	/// # Ok(()) }
	/// ```
	pub fn parse<P>(&self, path: P, mime: Option<&str>) -> ParseOutcome
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();

		let Some(file_type) = self.resolve(path, mime) else {
			log::debug!("No format found for `{}`", path.display());
			err!(UnrecognizedFormat);
		};

		let mut reader = ByteStreamReader::open(path)?;
		self.parse_reader(&mut reader, file_type)
	}

	/// Parse an already open stream of a known [`FileType`]
	///
	/// # Errors
	///
	/// Any error from the parser, see [`AudioFile::read_from`]
	pub fn parse_reader<R>(&self, reader: &mut ByteStreamReader<R>, file_type: FileType) -> ParseOutcome
	where
		R: Read + Seek,
	{
		match file_type {
			FileType::Wav => read_as::<WavFile, R>(reader, self.options),
			FileType::Asf => read_as::<AsfFile, R>(reader, self.options),
		}
	}
}

fn read_as<F, R>(reader: &mut ByteStreamReader<R>, parse_options: ParseOptions) -> Result<ParsedFile>
where
	F: AudioFile,
	R: Read + Seek,
{
	F::read_from(reader, parse_options).map(Into::into)
}

/// Read a file from a path, resolving its format from the extension
///
/// This is a shorthand for `FormatResolver::new().parse(path, None)`.
///
/// # Errors
///
/// See [`FormatResolver::parse`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> auricle::error::Result<()> {
/// let parsed = auricle::read_from_path("track.wma")?;
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P) -> ParseOutcome
where
	P: AsRef<Path>,
{
	FormatResolver::new().parse(path, None)
}

/// Read a file from a path, preferring `mime` over the extension
///
/// This is a shorthand for `FormatResolver::new().parse(path, Some(mime))`.
///
/// # Errors
///
/// See [`FormatResolver::parse`]
pub fn read_from_path_with_mime<P>(path: P, mime: &str) -> ParseOutcome
where
	P: AsRef<Path>,
{
	FormatResolver::new().parse(path, Some(mime))
}

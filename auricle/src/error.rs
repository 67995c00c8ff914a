//! Contains the errors that can arise within auricle
//!
//! The primary error is [`AuricleError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::file::FileType;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, AuricleError>`
pub type Result<T> = std::result::Result<T, AuricleError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Opening
	/// The file does not exist
	NotFound,
	/// The file exists, but could not be opened for reading
	PermissionDenied,

	// Reading
	/// Fewer bytes remain in the stream than were requested
	UnexpectedEof,
	/// Attempted to seek outside of the stream
	InvalidOffset,

	// File format related errors
	/// The data does not match the expected container, or no parser exists for it
	UnrecognizedFormat,
	/// The container holds a stream that isn't audio
	UnsupportedStream,
	/// An object declares a size extending past the boundary of its parent
	TruncatedContainer,
	/// A required divisor (such as the average byte rate) is zero
	DivisionByZero,

	// File data related errors
	/// Expected the data to be a different size than provided
	///
	/// This occurs when the size of an item is written as one value, but that size is either too
	/// big or small to be valid within the bounds of that item.
	SizeMismatch,
	/// Attempting to read an abnormally large amount of data
	TooMuchData,
	/// Errors that arise while decoding text
	TextDecode(&'static str),

	// Conversions for external errors
	/// Represents all other cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotFound => write!(f, "The file could not be found"),
			Self::PermissionDenied => write!(f, "Permission denied while opening the file"),
			Self::UnexpectedEof => write!(f, "Reached the end of the stream unexpectedly"),
			Self::InvalidOffset => write!(f, "Attempted to seek to an offset outside of the stream"),
			Self::UnrecognizedFormat => {
				write!(f, "No format could be determined from the provided file")
			},
			Self::UnsupportedStream => write!(f, "Encountered a non-audio stream"),
			Self::TruncatedContainer => write!(
				f,
				"An object extends past the size declared by its container"
			),
			Self::DivisionByZero => write!(f, "Encountered a zero divisor while computing properties"),
			Self::SizeMismatch => write!(
				f,
				"Encountered an invalid item size, either too big or too small to be valid"
			),
			Self::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
			Self::TextDecode(message) => write!(f, "Text decoding: {message}"),

			// Conversions
			Self::Io(err) => write!(f, "{err}"),
			Self::Alloc(err) => write!(f, "{err}"),
		}
	}
}

#[derive(Copy, Clone)]
struct ErrorContext {
	format: Option<FileType>,
	description: &'static str,
}

/// Errors that could occur within auricle
pub struct AuricleError {
	pub(crate) kind: ErrorKind,
	context: Option<ErrorContext>,
}

impl AuricleError {
	/// Create an `AuricleError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::error::{AuricleError, ErrorKind};
	///
	/// let unrecognized = AuricleError::new(ErrorKind::UnrecognizedFormat);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self {
			kind,
			context: None,
		}
	}

	/// Create an `AuricleError` bound to a [`FileType`], with a description of what went wrong
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::error::{AuricleError, ErrorKind};
	/// use auricle::file::FileType;
	///
	/// let err = AuricleError::decoding(
	/// 	FileType::Wav,
	/// 	ErrorKind::UnrecognizedFormat,
	/// 	"WAV file doesn't contain a RIFF chunk",
	/// );
	///
	/// assert_eq!(err.format(), Some(FileType::Wav));
	/// ```
	#[must_use]
	pub const fn decoding(format: FileType, kind: ErrorKind, description: &'static str) -> Self {
		Self {
			kind,
			context: Some(ErrorContext {
				format: Some(format),
				description,
			}),
		}
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::error::{AuricleError, ErrorKind};
	///
	/// let unrecognized = AuricleError::new(ErrorKind::UnrecognizedFormat);
	/// if let ErrorKind::UnrecognizedFormat = unrecognized.kind() {
	/// 	println!("What's the format?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the associated [`FileType`], if one exists
	pub fn format(&self) -> Option<FileType> {
		self.context.and_then(|context| context.format)
	}

	/// Returns the error description, if one exists
	pub fn description(&self) -> Option<&'static str> {
		self.context.map(|context| context.description)
	}
}

impl std::error::Error for AuricleError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			ErrorKind::Alloc(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for AuricleError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.context {
			Some(ErrorContext {
				format: Some(format),
				description,
			}) => write!(f, "{:?}: {:?} ({:?})", format, self.kind, description),
			Some(ErrorContext { description, .. }) => {
				write!(f, "{:?} ({:?})", self.kind, description)
			},
			None => write!(f, "{:?}", self.kind),
		}
	}
}

impl Display for AuricleError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.context {
			Some(ErrorContext {
				format: Some(format),
				description,
			}) => write!(f, "{:?}: {}", format, description),
			Some(ErrorContext { description, .. }) => write!(f, "{}", description),
			None => write!(f, "{}", self.kind),
		}
	}
}

impl From<ErrorKind> for AuricleError {
	fn from(input: ErrorKind) -> Self {
		Self::new(input)
	}
}

impl From<std::io::Error> for AuricleError {
	fn from(input: std::io::Error) -> Self {
		let kind = match input.kind() {
			std::io::ErrorKind::NotFound => ErrorKind::NotFound,
			std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
			std::io::ErrorKind::UnexpectedEof => ErrorKind::UnexpectedEof,
			_ => ErrorKind::Io(input),
		};

		Self::new(kind)
	}
}

impl From<TryReserveError> for AuricleError {
	fn from(input: TryReserveError) -> Self {
		Self::new(ErrorKind::Alloc(input))
	}
}

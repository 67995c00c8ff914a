use std::ffi::OsStr;
use std::path::Path;

/// List of common audio extensions
///
/// This contains all extensions for the supported [`FileType`]s, and can be used a filter
/// when scanning directories.
///
/// # Examples
///
/// ```rust,no_run
/// use auricle::file::EXTENSIONS;
/// use std::fs;
///
/// # fn main() -> auricle::error::Result<()> {
/// for entry in fs::read_dir(".")? {
/// 	let entry = entry?;
///
/// 	let path = entry.path();
/// 	let Some(extension) = path.extension() else {
/// 		continue;
/// 	};
///
/// 	// Skip any non-audio file extensions
/// 	if !EXTENSIONS.iter().any(|e| *e == extension) {
/// 		continue;
/// 	}
///
/// 	// `entry` is *most likely* a supported file at this point
/// 	let parsed = auricle::read_from_path(path)?;
/// }
/// # Ok(()) }
/// ```
pub const EXTENSIONS: &[&str] = &[
	// Also update `FileType::from_ext()` below
	"wav", "wave", "wma", "asf",
];

/// Recognized MIME types, and the [`FileType`] they map to
///
/// These are matched exactly (case sensitive), see [`FileType::from_mime`].
pub const MIME_TYPES: &[(&str, FileType)] = &[
	("audio/wav", FileType::Wav),
	("audio/x-wav", FileType::Wav),
	("audio/wave", FileType::Wav),
	("audio/vnd.wave", FileType::Wav),
	("audio/x-ms-wma", FileType::Asf),
	("audio/x-ms-asf", FileType::Asf),
	("video/x-ms-asf", FileType::Asf),
	("application/vnd.ms-asf", FileType::Asf),
];

/// The type of file read
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[non_exhaustive]
pub enum FileType {
	/// RIFF/WAVE
	Wav,
	/// Advanced Systems Format (WMA)
	Asf,
}

impl FileType {
	/// Attempts to extract a [`FileType`] from an extension
	///
	/// The extension is matched case-insensitively.
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::file::FileType;
	///
	/// assert_eq!(FileType::from_ext("WMA"), Some(FileType::Asf));
	/// assert_eq!(FileType::from_ext("xyz"), None);
	/// ```
	pub fn from_ext<E>(ext: E) -> Option<Self>
	where
		E: AsRef<OsStr>,
	{
		let ext = ext.as_ref().to_str()?.to_ascii_lowercase();

		// Also update `EXTENSIONS` above
		match ext.as_str() {
			"wav" | "wave" => Some(Self::Wav),
			"wma" | "asf" => Some(Self::Asf),
			_ => None,
		}
	}

	/// Attempts to determine a [`FileType`] from a path
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::file::FileType;
	/// use std::path::Path;
	///
	/// let path = Path::new("path/to/my.wav");
	/// assert_eq!(FileType::from_path(path), Some(FileType::Wav));
	/// ```
	pub fn from_path<P>(path: P) -> Option<Self>
	where
		P: AsRef<Path>,
	{
		let ext = path.as_ref().extension();
		ext.and_then(Self::from_ext)
	}

	/// Attempts to determine a [`FileType`] from a MIME type
	///
	/// This is an exact lookup in [`MIME_TYPES`], no normalization is performed.
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::file::FileType;
	///
	/// assert_eq!(FileType::from_mime("audio/x-ms-wma"), Some(FileType::Asf));
	/// assert_eq!(FileType::from_mime("audio/mpeg"), None);
	/// ```
	pub fn from_mime(mime: &str) -> Option<Self> {
		MIME_TYPES
			.iter()
			.find(|(known, _)| *known == mime)
			.map(|(_, file_type)| *file_type)
	}

	/// The preferred MIME type for the [`FileType`]
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::file::FileType;
	///
	/// assert_eq!(FileType::Wav.mime_type(), "audio/wav");
	/// ```
	pub fn mime_type(&self) -> &'static str {
		match self {
			Self::Wav => "audio/wav",
			Self::Asf => "audio/x-ms-wma",
		}
	}
}

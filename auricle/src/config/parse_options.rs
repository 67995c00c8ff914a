/// Options to control how auricle parses a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_properties: bool,
	pub(crate) read_tags: bool,
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) allocation_limit: usize,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_properties: true,
	/// 	read_tags: true,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	allocation_limit: 16 * 1024 * 1024,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default allocation limit for any single item
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_properties: true,
			read_tags: true,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
		}
	}

	/// Whether or not to read the audio properties
	///
	/// When disabled, the returned properties are all zero, but the container is still validated.
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::config::ParseOptions;
	///
	/// // Only the ASF tags are needed
	/// let parsing_options = ParseOptions::new().read_properties(false);
	/// ```
	pub fn read_properties(&mut self, read_properties: bool) -> Self {
		self.read_properties = read_properties;
		*self
	}

	/// Whether or not to read the tags
	///
	/// This only has an effect on formats that carry tags (ASF).
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::config::ParseOptions;
	///
	/// // Only the audio properties of ASF files are needed
	/// let parsing_options = ParseOptions::new().read_tags(false);
	/// ```
	pub fn read_tags(&mut self, read_tags: bool) -> Self {
		self.read_tags = read_tags;
		*self
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::config::{ParseOptions, ParsingMode};
	///
	/// // Reject any file with undecodable text or unknown attribute types
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// The maximum number of bytes to allocate for any single item
	///
	/// Object payloads and attribute values are sized by the file itself. Any single read larger
	/// than this limit fails with [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData)
	/// instead of allocating.
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::config::ParseOptions;
	///
	/// // Allow embedded cover art of up to 64 MiB
	/// let parsing_options = ParseOptions::new().allocation_limit(64 * 1024 * 1024);
	/// ```
	pub fn allocation_limit(&mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		*self
	}
}

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use auricle::config::{ParseOptions, ParsingMode};
/// use auricle::resolve::FormatResolver;
///
/// # fn main() -> auricle::error::Result<()> {
/// // Undecodable text fails the whole parse
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let parsed = FormatResolver::new().options(parsing_options).parse("foo.wma", None)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Fail on the first malformed field
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - `ErrorKind::TextDecode`
	/// * Unknown ASF attribute type - `ErrorKind::UnrecognizedFormat`
	Strict,
	/// Recover what can be recovered from malformed fields (default)
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - Invalid sequences are replaced with `U+FFFD` and the parser moves on
	/// * Unknown ASF attribute type - The value is kept as raw bytes
	#[default]
	BestAttempt,
	/// Drop malformed fields entirely
	///
	/// ## Examples of behavior
	///
	/// * Unable to decode text - The entire field is discarded and the parser moves on
	/// * Unknown ASF attribute type - The value is kept as raw bytes
	Relaxed,
}

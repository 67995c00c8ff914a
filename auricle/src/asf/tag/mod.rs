pub(super) mod read;

use indexmap::IndexMap;

/// The value of an extended content descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
	/// A UTF-16 string (type 0)
	Text(String),
	/// Raw bytes (type 1), also used for unknown types outside of strict parsing
	Binary(Vec<u8>),
	/// A 32-bit boolean (type 2)
	Bool(bool),
	/// A 32-bit integer (type 3)
	DWord(u32),
	/// A 64-bit integer (type 4)
	QWord(u64),
	/// A 16-bit integer (type 5)
	Word(u16),
}

impl AttributeValue {
	/// Returns the value as a string slice, if it is [`AttributeValue::Text`]
	pub fn text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the value as an integer, if it is one of the numeric types
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::asf::AttributeValue;
	///
	/// assert_eq!(AttributeValue::Word(7).integer(), Some(7));
	/// assert_eq!(AttributeValue::Text(String::from("7")).integer(), None);
	/// ```
	pub fn integer(&self) -> Option<u64> {
		match self {
			Self::Word(value) => Some(u64::from(*value)),
			Self::DWord(value) => Some(u64::from(*value)),
			Self::QWord(value) => Some(*value),
			_ => None,
		}
	}
}

/// Textual metadata extracted from an ASF file
///
/// This combines the fixed fields of the Content Description Object with the attributes of the
/// Extended Content Description Object.
///
/// Extended attributes keep the order they were first encountered in. Names are case sensitive,
/// and inserting an existing name replaces its value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagFields {
	pub(crate) title: Option<String>,
	pub(crate) artist: Option<String>,
	pub(crate) copyright: Option<String>,
	pub(crate) comment: Option<String>,
	pub(crate) rating: Option<String>,
	pub(crate) extended: IndexMap<String, AttributeValue>,
}

impl TagFields {
	/// The title, from the Content Description Object
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// The artist, from the Content Description Object
	pub fn artist(&self) -> Option<&str> {
		self.artist.as_deref()
	}

	/// The copyright notice, from the Content Description Object
	pub fn copyright(&self) -> Option<&str> {
		self.copyright.as_deref()
	}

	/// The comment, from the Content Description Object
	pub fn comment(&self) -> Option<&str> {
		self.comment.as_deref()
	}

	/// The rating, from the Content Description Object
	pub fn rating(&self) -> Option<&str> {
		self.rating.as_deref()
	}

	/// The album title (`WM/AlbumTitle`)
	pub fn album(&self) -> Option<&str> {
		self.get("WM/AlbumTitle").and_then(AttributeValue::text)
	}

	/// The genre (`WM/Genre`)
	pub fn genre(&self) -> Option<&str> {
		self.get("WM/Genre").and_then(AttributeValue::text)
	}

	/// The release year (`WM/Year`)
	pub fn year(&self) -> Option<&str> {
		self.get("WM/Year").and_then(AttributeValue::text)
	}

	/// The track number (`WM/TrackNumber`)
	///
	/// This is stored as text by some encoders and as an integer by others, both are accepted.
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::asf::{AttributeValue, TagFields};
	///
	/// let mut tags = TagFields::default();
	/// tags.insert("WM/TrackNumber", AttributeValue::Text(String::from("4")));
	/// assert_eq!(tags.track_number(), Some(4));
	///
	/// tags.insert("WM/TrackNumber", AttributeValue::DWord(5));
	/// assert_eq!(tags.track_number(), Some(5));
	/// ```
	pub fn track_number(&self) -> Option<u32> {
		match self.get("WM/TrackNumber")? {
			AttributeValue::Text(text) => text.trim().parse().ok(),
			other => other.integer().and_then(|n| u32::try_from(n).ok()),
		}
	}

	/// Get an extended attribute by name
	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.extended.get(name)
	}

	/// Insert an extended attribute, returning the previous value if `name` already existed
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::asf::{AttributeValue, TagFields};
	///
	/// let mut tags = TagFields::default();
	/// assert!(tags.insert("WM/Genre", AttributeValue::Text(String::from("Rock"))).is_none());
	///
	/// // Names are case sensitive
	/// tags.insert("wm/genre", AttributeValue::Text(String::from("Jazz")));
	/// assert_eq!(tags.genre(), Some("Rock"));
	///
	/// // The last write wins
	/// tags.insert("WM/Genre", AttributeValue::Text(String::from("Pop")));
	/// assert_eq!(tags.genre(), Some("Pop"));
	/// assert_eq!(tags.len(), 2);
	/// ```
	pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) -> Option<AttributeValue> {
		// An existing entry keeps its position
		self.extended.insert(name.into(), value)
	}

	/// An iterator over the extended attributes, in the order they were first encountered
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.extended
			.iter()
			.map(|(name, value)| (name.as_str(), value))
	}

	/// The number of extended attributes
	pub fn len(&self) -> usize {
		self.extended.len()
	}

	/// Whether there are no fields at all, fixed or extended
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.artist.is_none()
			&& self.copyright.is_none()
			&& self.comment.is_none()
			&& self.rating.is_none()
			&& self.extended.is_empty()
	}
}

use crate::error::{AuricleError, ErrorKind, Result};

fn utf16le_words(bytes: &[u8]) -> impl Iterator<Item = u16> {
	bytes
		.chunks_exact(2)
		.map(|word| u16::from_le_bytes([word[0], word[1]]))
}

/// Decode UTF-16LE text, erroring on unpaired surrogates
///
/// Trailing NULs are removed. A trailing odd byte is ignored.
pub(crate) fn utf16le_decode(bytes: &[u8]) -> Result<String> {
	let mut text = char::decode_utf16(utf16le_words(bytes))
		.collect::<std::result::Result<String, _>>()
		.map_err(|_| AuricleError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))?;

	trim_end_nulls(&mut text);
	Ok(text)
}

/// Decode UTF-16LE text, replacing unpaired surrogates with `U+FFFD`
pub(crate) fn utf16le_decode_lossy(bytes: &[u8]) -> String {
	let mut text = char::decode_utf16(utf16le_words(bytes))
		.map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
		.collect::<String>();

	trim_end_nulls(&mut text);
	text
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}

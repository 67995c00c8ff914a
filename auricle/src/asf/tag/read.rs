use super::{AttributeValue, TagFields};
use crate::config::ParsingMode;
use crate::error::Result;
use crate::io::ByteStreamReader;
use crate::macros::{decode_err, parse_mode_choice};
use crate::util::text::{utf16le_decode, utf16le_decode_lossy};

use std::io::{Read, Seek};

const TYPE_TEXT: u16 = 0;
const TYPE_BINARY: u16 = 1;
const TYPE_BOOL: u16 = 2;
const TYPE_DWORD: u16 = 3;
const TYPE_QWORD: u16 = 4;
const TYPE_WORD: u16 = 5;

// `None` means the text was discarded
fn decode_text(bytes: &[u8], parsing_mode: ParsingMode) -> Result<Option<String>> {
	match utf16le_decode(bytes) {
		Ok(text) => Ok(Some(text)),
		Err(e) => parse_mode_choice!(
			parsing_mode,
			STRICT: Err(e),
			BESTATTEMPT: {
				log::warn!("Replacing invalid UTF-16 sequences");
				Ok(Some(utf16le_decode_lossy(bytes)))
			},
			DEFAULT: {
				log::warn!("Discarding invalid UTF-16 text");
				Ok(None)
			}
		),
	}
}

fn read_text<R>(
	payload: &mut ByteStreamReader<R>,
	len: u16,
	parsing_mode: ParsingMode,
) -> Result<Option<String>>
where
	R: Read + Seek,
{
	if len == 0 {
		return Ok(None);
	}

	let bytes = payload.read_exact(u64::from(len))?;
	Ok(decode_text(&bytes, parsing_mode)?.filter(|text| !text.is_empty()))
}

pub(in crate::asf) fn read_content_description<R>(
	payload: &mut ByteStreamReader<R>,
	tags: &mut TagFields,
	parsing_mode: ParsingMode,
) -> Result<()>
where
	R: Read + Seek,
{
	let title_len = payload.read_u16_le()?;
	let artist_len = payload.read_u16_le()?;
	let copyright_len = payload.read_u16_le()?;
	let comment_len = payload.read_u16_le()?;
	let rating_len = payload.read_u16_le()?;

	let total = [title_len, artist_len, copyright_len, comment_len, rating_len]
		.into_iter()
		.map(u64::from)
		.sum::<u64>();
	if total > payload.remaining() {
		decode_err!(@BAIL Asf, SizeMismatch, "Content Description fields exceed the object size");
	}

	tags.title = read_text(payload, title_len, parsing_mode)?;
	tags.artist = read_text(payload, artist_len, parsing_mode)?;
	tags.copyright = read_text(payload, copyright_len, parsing_mode)?;
	tags.comment = read_text(payload, comment_len, parsing_mode)?;
	tags.rating = read_text(payload, rating_len, parsing_mode)?;

	Ok(())
}

fn fixed<const N: usize>(value: &[u8]) -> Result<[u8; N]> {
	if value.len() < N {
		decode_err!(@BAIL Asf, SizeMismatch, "Extended attribute value is too short for its type");
	}

	if value.len() > N {
		log::warn!(
			"Extended attribute value has {} trailing bytes, ignoring",
			value.len() - N
		);
	}

	let mut bytes = [0; N];
	bytes.copy_from_slice(&value[..N]);
	Ok(bytes)
}

fn decode_value(
	value_type: u16,
	value: Vec<u8>,
	parsing_mode: ParsingMode,
) -> Result<Option<AttributeValue>> {
	let decoded = match value_type {
		TYPE_TEXT => decode_text(&value, parsing_mode)?.map(AttributeValue::Text),
		TYPE_BINARY => Some(AttributeValue::Binary(value)),
		TYPE_BOOL => Some(AttributeValue::Bool(
			u32::from_le_bytes(fixed::<4>(&value)?) != 0,
		)),
		TYPE_DWORD => Some(AttributeValue::DWord(u32::from_le_bytes(fixed::<4>(
			&value,
		)?))),
		TYPE_QWORD => Some(AttributeValue::QWord(u64::from_le_bytes(fixed::<8>(
			&value,
		)?))),
		TYPE_WORD => Some(AttributeValue::Word(u16::from_le_bytes(fixed::<2>(&value)?))),
		_ => {
			log::debug!("Encountered unknown extended attribute type {value_type}");
			parse_mode_choice!(
				parsing_mode,
				STRICT: decode_err!(@BAIL Asf, UnrecognizedFormat, "Unknown extended attribute type"),
				DEFAULT: Some(AttributeValue::Binary(value))
			)
		},
	};

	Ok(decoded)
}

pub(in crate::asf) fn read_extended_content_description<R>(
	payload: &mut ByteStreamReader<R>,
	tags: &mut TagFields,
	parsing_mode: ParsingMode,
) -> Result<()>
where
	R: Read + Seek,
{
	let descriptor_count = payload.read_u16_le()?;
	log::debug!("Reading {descriptor_count} extended content descriptors");

	for _ in 0..descriptor_count {
		let name_len = payload.read_u16_le()?;
		let name = payload.read_exact(u64::from(name_len))?;
		let name = decode_text(&name, parsing_mode)?;

		let value_type = payload.read_u16_le()?;
		let value_len = payload.read_u16_le()?;
		let value = payload.read_exact(u64::from(value_len))?;

		let Some(name) = name else {
			continue;
		};

		if name.is_empty() {
			log::warn!("Skipping extended attribute with an empty name");
			continue;
		}

		let Some(value) = decode_value(value_type, value, parsing_mode)? else {
			continue;
		};

		if tags.insert(name, value).is_some() {
			log::warn!("Duplicate extended attribute found, replacing previous value");
		}
	}

	Ok(())
}

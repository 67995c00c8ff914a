use super::WavFile;
use super::properties::{WavProperties, read_properties};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::io::ByteStreamReader;
use crate::macros::decode_err;

use std::io::{Cursor, Read, Seek};

pub(super) const WAV_HEADER_SIZE: u64 = 44;

// The fixed header, decoded field by field
#[derive(Copy, Clone, Debug)]
pub(super) struct WavHeader {
	pub(super) format_tag: u16,
	pub(super) channels: u16,
	pub(super) sample_rate: u32,
	pub(super) bytes_per_second: u32,
	pub(super) block_align: u16,
	pub(super) bits_per_sample: u16,
	pub(super) data_len: u32,
}

fn parse_header(header: Vec<u8>) -> Result<WavHeader> {
	let mut header = ByteStreamReader::new(Cursor::new(header))?;

	if header.read_array::<4>()? != *b"RIFF" {
		decode_err!(@BAIL Wav, UnrecognizedFormat, "WAV file doesn't contain a RIFF chunk");
	}

	// RIFF chunk size, unused
	header.skip(4)?;

	if header.read_array::<4>()? != *b"WAVE" {
		decode_err!(@BAIL Wav, UnrecognizedFormat, "Found RIFF file, format is not WAVE");
	}

	if header.read_array::<4>()? != *b"fmt " {
		decode_err!(@BAIL Wav, UnrecognizedFormat, "Expected a \"fmt \" chunk at offset 12");
	}

	// fmt chunk size, the layout is fixed regardless
	header.skip(4)?;

	let format_tag = header.read_u16_le()?;
	let channels = header.read_u16_le()?;
	let sample_rate = header.read_u32_le()?;
	let bytes_per_second = header.read_u32_le()?;
	let block_align = header.read_u16_le()?;
	let bits_per_sample = header.read_u16_le()?;

	if header.read_array::<4>()? != *b"data" {
		decode_err!(@BAIL Wav, UnrecognizedFormat, "Expected a \"data\" chunk at offset 36");
	}

	let data_len = header.read_u32_le()?;

	Ok(WavHeader {
		format_tag,
		channels,
		sample_rate,
		bytes_per_second,
		block_align,
		bits_per_sample,
		data_len,
	})
}

pub(super) fn read_from<R>(
	reader: &mut ByteStreamReader<R>,
	parse_options: ParseOptions,
) -> Result<WavFile>
where
	R: Read + Seek,
{
	let header = reader.with_allocation_limit(parse_options.allocation_limit, |reader| {
		reader.seek(0)?;
		parse_header(reader.read_exact(WAV_HEADER_SIZE)?)
	})?;
	log::debug!("File verified to be WAV");

	let properties = if parse_options.read_properties {
		read_properties(header)?
	} else {
		WavProperties::default()
	};

	Ok(WavFile { properties })
}

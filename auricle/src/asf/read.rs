use super::AsfFile;
use super::guid::{
	CONTENT_DESCRIPTION_OBJECT, EXTENDED_CONTENT_DESCRIPTION_OBJECT, FILE_PROPERTIES_OBJECT,
	Guid, HEADER_OBJECT, STREAM_PROPERTIES_OBJECT,
};
use super::object::{OBJECT_HEADER_SIZE, ObjectHeader};
use super::properties::{
	AsfProperties, read_file_properties, read_stream_properties, verify_audio_stream,
};
use super::tag::TagFields;
use super::tag::read::{read_content_description, read_extended_content_description};
use crate::config::ParseOptions;
use crate::error::Result;
use crate::io::ByteStreamReader;
use crate::macros::decode_err;

use std::io::{Cursor, Read, Seek};

// GUID (16), size (8), object count (4), reserved (2)
const HEADER_OBJECT_SIZE: u64 = 30;

// Copies an object's payload out of the stream, so that nothing can read past the object
fn read_payload<R>(
	reader: &mut ByteStreamReader<R>,
	object: &ObjectHeader,
) -> Result<ByteStreamReader<Cursor<Vec<u8>>>>
where
	R: Read + Seek,
{
	reader.seek(object.payload_offset())?;
	let content = reader.read_exact(object.payload_len())?;
	ByteStreamReader::new(Cursor::new(content))
}

pub(super) fn read_from<R>(
	reader: &mut ByteStreamReader<R>,
	parse_options: ParseOptions,
) -> Result<AsfFile>
where
	R: Read + Seek,
{
	reader.with_allocation_limit(parse_options.allocation_limit, |reader| {
		read_header_object(reader, parse_options)
	})
}

fn read_header_object<R>(
	reader: &mut ByteStreamReader<R>,
	parse_options: ParseOptions,
) -> Result<AsfFile>
where
	R: Read + Seek,
{
	reader.seek(0)?;

	if Guid(reader.read_array::<16>()?) != HEADER_OBJECT {
		decode_err!(@BAIL Asf, UnrecognizedFormat, "File doesn't start with a Header Object");
	}

	let header_size = reader.read_u64_le()?;
	let object_count = reader.read_u32_le()?;
	// Reserved
	reader.skip(2)?;

	if header_size < HEADER_OBJECT_SIZE {
		decode_err!(@BAIL Asf, SizeMismatch, "Header Object is smaller than its fixed fields");
	}

	log::debug!("File verified to be ASF, header contains {object_count} objects");

	let mut properties = AsfProperties::default();
	let mut tags = TagFields::default();
	let mut found_audio_stream = false;

	for _ in 0..object_count {
		if reader.tell() + OBJECT_HEADER_SIZE > header_size {
			decode_err!(@BAIL Asf, TruncatedContainer, "Header Object ended before all objects were read");
		}

		let object = ObjectHeader::read(reader)?;

		let end = match object.end() {
			Some(end) if end <= header_size => end,
			_ => {
				log::debug!(
					"Object {} at offset {} declares a size of {}, header size is {header_size}",
					object.guid,
					object.start,
					object.size
				);
				decode_err!(@BAIL Asf, TruncatedContainer, "Found an object extending past the Header Object");
			},
		};

		match object.guid {
			FILE_PROPERTIES_OBJECT if parse_options.read_properties => {
				log::debug!("Reading File Properties Object");

				let mut payload = read_payload(reader, &object)?;
				read_file_properties(&mut payload, &mut properties)?;
			},
			STREAM_PROPERTIES_OBJECT => {
				log::debug!("Reading Stream Properties Object");

				let mut payload = read_payload(reader, &object)?;
				verify_audio_stream(&mut payload)?;

				if found_audio_stream {
					log::debug!("Skipping additional audio stream");
				} else if parse_options.read_properties {
					read_stream_properties(&mut payload, &mut properties)?;
					found_audio_stream = true;
				}
			},
			CONTENT_DESCRIPTION_OBJECT if parse_options.read_tags => {
				log::debug!("Reading Content Description Object");

				let mut payload = read_payload(reader, &object)?;
				read_content_description(&mut payload, &mut tags, parse_options.parsing_mode)?;
			},
			EXTENDED_CONTENT_DESCRIPTION_OBJECT if parse_options.read_tags => {
				log::debug!("Reading Extended Content Description Object");

				let mut payload = read_payload(reader, &object)?;
				read_extended_content_description(
					&mut payload,
					&mut tags,
					parse_options.parsing_mode,
				)?;
			},
			_ => {
				log::trace!(
					"Skipping object {} ({} bytes)",
					object.guid,
					object.payload_len()
				);
			},
		}

		reader.seek(end)?;
	}

	Ok(AsfFile {
		properties,
		tags: (!tags.is_empty()).then_some(tags),
	})
}

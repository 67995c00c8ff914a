use super::guid::Guid;
use crate::error::Result;
use crate::io::ByteStreamReader;
use crate::macros::decode_err;

use std::io::{Read, Seek};

/// GUID + 64-bit size
pub(super) const OBJECT_HEADER_SIZE: u64 = 24;

/// A top-level object header, read once during the walk
#[derive(Copy, Clone, Debug)]
pub(crate) struct ObjectHeader {
	pub(crate) guid: Guid,
	pub(crate) size: u64,
	pub(crate) start: u64,
}

impl ObjectHeader {
	pub(crate) fn read<R>(reader: &mut ByteStreamReader<R>) -> Result<Self>
	where
		R: Read + Seek,
	{
		let start = reader.tell();
		let guid = Guid(reader.read_array::<16>()?);
		let size = reader.read_u64_le()?;

		if size < OBJECT_HEADER_SIZE {
			decode_err!(@BAIL Asf, SizeMismatch, "Found an object smaller than its own header");
		}

		Ok(Self { guid, size, start })
	}

	pub(crate) fn payload_offset(&self) -> u64 {
		self.start + OBJECT_HEADER_SIZE
	}

	pub(crate) fn payload_len(&self) -> u64 {
		self.size - OBJECT_HEADER_SIZE
	}

	// `None` on overflow
	pub(crate) fn end(&self) -> Option<u64> {
		self.start.checked_add(self.size)
	}
}

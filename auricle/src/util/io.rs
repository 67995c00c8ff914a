//! Bounded access to file-like objects
//!
//! Every parser in auricle reads through a [`ByteStreamReader`], which tracks the cursor and the
//! stream length so that no read or seek can leave the bounds of the underlying data.

use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{err, try_vec};

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

/// A bounds-checked reader over a seekable byte source
///
/// This is a wrapper around a reader that provides:
///
/// * `read_*` methods to read integers with an explicit endianness.
/// * Bounds checking on reads and seeks to prevent going outside the stream.
/// * An allocation limit on [`Self::read_exact`], since sizes are read from untrusted data.
///
/// The reader owns its source. When opened from a path ([`Self::open`]), the file is closed when the
/// reader is dropped, regardless of whether parsing succeeded.
///
/// # Examples
///
/// ```rust
/// # fn main() -> auricle::error::Result<()> {
/// use auricle::io::ByteStreamReader;
/// use std::io::Cursor;
///
/// let mut reader = ByteStreamReader::new(Cursor::new(b"RIFF\x24\x00\x00\x00"))?;
///
/// assert_eq!(reader.read_array::<4>()?, *b"RIFF");
/// assert_eq!(reader.read_u32_le()?, 36);
/// assert_eq!(reader.tell(), 8);
///
/// // There is nothing left to read
/// assert!(reader.read_u16_le().is_err());
/// # Ok(()) }
/// ```
pub struct ByteStreamReader<R> {
	inner: R,
	position: u64,
	len: u64,
	allocation_limit: usize,
}

impl ByteStreamReader<BufReader<File>> {
	/// Open the file at `path` for reading
	///
	/// # Errors
	///
	/// * [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) if the file doesn't exist
	/// * [`ErrorKind::PermissionDenied`](crate::error::ErrorKind::PermissionDenied) if it can't be read
	/// * [`ErrorKind::Io`](crate::error::ErrorKind::Io) for any other failure
	pub fn open<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Opening `{}` for reading", path.display());

		let file = File::open(path)?;
		Self::new(BufReader::new(file))
	}
}

impl<R> ByteStreamReader<R>
where
	R: Read + Seek,
{
	/// Wrap an existing reader
	///
	/// The length of the stream is determined once, up front. The cursor is left at the reader's
	/// current position.
	///
	/// # Errors
	///
	/// The reader fails to seek
	pub fn new(mut reader: R) -> Result<Self> {
		let position = reader.stream_position()?;
		let len = reader.seek(SeekFrom::End(0))?;
		reader.seek(SeekFrom::Start(position))?;

		Ok(Self {
			inner: reader,
			position,
			len,
			allocation_limit: ParseOptions::DEFAULT_ALLOCATION_LIMIT,
		})
	}

	pub(crate) fn allocation_limit(&self) -> usize {
		self.allocation_limit
	}

	// Runs `f` with `allocation_limit` in place, the previous limit is restored afterwards
	pub(crate) fn with_allocation_limit<T, F>(&mut self, allocation_limit: usize, f: F) -> Result<T>
	where
		F: FnOnce(&mut Self) -> Result<T>,
	{
		let previous = std::mem::replace(&mut self.allocation_limit, allocation_limit);
		let ret = f(self);
		self.allocation_limit = previous;

		ret
	}

	/// The total length of the stream
	pub fn len(&self) -> u64 {
		self.len
	}

	/// The current position of the cursor
	pub fn tell(&self) -> u64 {
		self.position
	}

	/// The number of bytes between the cursor and the end of the stream
	pub fn remaining(&self) -> u64 {
		self.len.saturating_sub(self.position)
	}

	/// Consume the reader, returning the underlying source
	pub fn into_inner(self) -> R {
		self.inner
	}

	// Fails if fewer than `len` bytes remain, without moving the cursor
	fn check_available(&self, len: u64) -> Result<()> {
		if len > self.remaining() {
			log::debug!(
				"Attempted to read {len} bytes at offset {}, only {} remain",
				self.position,
				self.remaining()
			);
			err!(UnexpectedEof);
		}

		Ok(())
	}

	/// Read exactly `len` bytes
	///
	/// # Errors
	///
	/// * [`ErrorKind::UnexpectedEof`](crate::error::ErrorKind::UnexpectedEof) if fewer than `len` bytes remain.
	///   This is checked prior to allocating.
	/// * [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData) if `len` exceeds the allocation limit
	pub fn read_exact(&mut self, len: u64) -> Result<Vec<u8>> {
		self.check_available(len)?;

		let Ok(size) = usize::try_from(len) else {
			err!(TooMuchData);
		};

		let mut content = try_vec![0; size, self.allocation_limit];
		self.inner.read_exact(&mut content)?;
		self.position += len;

		Ok(content)
	}

	/// Read exactly `N` bytes into an array
	///
	/// # Errors
	///
	/// [`ErrorKind::UnexpectedEof`](crate::error::ErrorKind::UnexpectedEof) if fewer than `N` bytes remain
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		self.check_available(N as u64)?;

		let mut content = [0; N];
		self.inner.read_exact(&mut content)?;
		self.position += N as u64;

		Ok(content)
	}

	/// Read a single byte
	///
	/// # Errors
	///
	/// The stream is exhausted
	pub fn read_u8(&mut self) -> Result<u8> {
		self.check_available(1)?;

		let value = self.inner.read_u8()?;
		self.position += 1;

		Ok(value)
	}

	/// Read a little-endian `u16`
	///
	/// # Errors
	///
	/// Fewer than 2 bytes remain
	pub fn read_u16_le(&mut self) -> Result<u16> {
		self.check_available(2)?;

		let value = self.inner.read_u16::<LittleEndian>()?;
		self.position += 2;

		Ok(value)
	}

	/// Read a little-endian `u32`
	///
	/// # Errors
	///
	/// Fewer than 4 bytes remain
	pub fn read_u32_le(&mut self) -> Result<u32> {
		self.check_available(4)?;

		let value = self.inner.read_u32::<LittleEndian>()?;
		self.position += 4;

		Ok(value)
	}

	/// Read a little-endian `u64`
	///
	/// # Errors
	///
	/// Fewer than 8 bytes remain
	pub fn read_u64_le(&mut self) -> Result<u64> {
		self.check_available(8)?;

		let value = self.inner.read_u64::<LittleEndian>()?;
		self.position += 8;

		Ok(value)
	}

	/// Read a big-endian `u16`
	///
	/// # Errors
	///
	/// Fewer than 2 bytes remain
	pub fn read_u16_be(&mut self) -> Result<u16> {
		self.check_available(2)?;

		let value = self.inner.read_u16::<BigEndian>()?;
		self.position += 2;

		Ok(value)
	}

	/// Read a big-endian `u32`
	///
	/// # Errors
	///
	/// Fewer than 4 bytes remain
	pub fn read_u32_be(&mut self) -> Result<u32> {
		self.check_available(4)?;

		let value = self.inner.read_u32::<BigEndian>()?;
		self.position += 4;

		Ok(value)
	}

	/// Seek to an absolute offset
	///
	/// Seeking to the very end of the stream is permitted.
	///
	/// # Errors
	///
	/// [`ErrorKind::InvalidOffset`](crate::error::ErrorKind::InvalidOffset) if `offset` is past the end of the stream
	pub fn seek(&mut self, offset: u64) -> Result<()> {
		if offset > self.len {
			log::debug!("Refusing to seek to {offset}, stream length is {}", self.len);
			err!(InvalidOffset);
		}

		if offset != self.position {
			self.inner.seek(SeekFrom::Start(offset))?;
			self.position = offset;
		}

		Ok(())
	}

	/// Advance the cursor by `len` bytes
	///
	/// # Errors
	///
	/// [`ErrorKind::InvalidOffset`](crate::error::ErrorKind::InvalidOffset) if the new position is past the end of the stream
	pub fn skip(&mut self, len: u64) -> Result<()> {
		let Some(offset) = self.position.checked_add(len) else {
			err!(InvalidOffset);
		};

		self.seek(offset)
	}
}

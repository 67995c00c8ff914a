use super::guid::{AUDIO_MEDIA, Guid};
use crate::error::Result;
use crate::io::ByteStreamReader;
use crate::macros::decode_err;
use crate::properties::AudioProperties;

use std::io::{Read, Seek};
use std::time::Duration;

// Play durations are stored in 100 nanosecond units
const HUNDRED_NS_PER_SECOND: u64 = 10_000_000;

/// An ASF file's audio properties
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct AsfProperties {
	pub(crate) length_seconds: u64,
	pub(crate) play_duration: u64,
	pub(crate) preroll_ms: u64,
	pub(crate) flags: u32,
	pub(crate) max_bitrate: u32,
	pub(crate) codec_id: u16,
	pub(crate) bitrate: u32,
	pub(crate) sample_rate: u32,
	pub(crate) bytes_per_second: u32,
	pub(crate) block_align: u16,
	pub(crate) bit_depth: u16,
	pub(crate) channels: u16,
}

impl From<AsfProperties> for AudioProperties {
	fn from(input: AsfProperties) -> Self {
		let AsfProperties {
			length_seconds,
			bitrate,
			sample_rate,
			channels,
			..
		} = input;

		Self {
			length_seconds,
			bitrate,
			sample_rate,
			channels,
		}
	}
}

impl AsfProperties {
	/// Length of the audio in whole seconds
	///
	/// NOTE: This is derived from the raw play duration, which includes the preroll.
	pub fn length_seconds(&self) -> u64 {
		self.length_seconds
	}

	/// Length of the audio as a [`Duration`], with 100ns precision
	pub fn duration(&self) -> Duration {
		Duration::from_secs(self.play_duration / HUNDRED_NS_PER_SECOND)
			+ Duration::from_nanos((self.play_duration % HUNDRED_NS_PER_SECOND) * 100)
	}

	/// The raw play duration (100 nanosecond units)
	pub fn play_duration(&self) -> u64 {
		self.play_duration
	}

	/// Amount of buffered time before playback starts (milliseconds)
	pub fn preroll_ms(&self) -> u64 {
		self.preroll_ms
	}

	/// The File Properties Object flags
	///
	/// Bit 0 is the broadcast flag, bit 1 is the seekable flag.
	pub fn flags(&self) -> u32 {
		self.flags
	}

	/// Maximum instantaneous bitrate of the whole file (bps)
	pub fn max_bitrate(&self) -> u32 {
		self.max_bitrate
	}

	/// The `WAVEFORMATEX` codec ID (ex. `0x0161` for WMA version 2)
	pub fn codec_id(&self) -> u16 {
		self.codec_id
	}

	/// Audio bitrate (kbps)
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Average bytes per second, as declared by the stream
	pub fn bytes_per_second(&self) -> u32 {
		self.bytes_per_second
	}

	/// Block alignment of the stream
	pub fn block_align(&self) -> u16 {
		self.block_align
	}

	/// Bits per sample
	pub fn bit_depth(&self) -> u16 {
		self.bit_depth
	}

	/// Channel count
	pub fn channels(&self) -> u16 {
		self.channels
	}
}

// File ID (16), file size (8), creation date (8), data packets count (8)
const FILE_PROPERTIES_SKIP: u64 = 40;
// Send duration (8), preroll (8), flags (4), min/max data packet size (4 + 4), max bitrate (4)
const FILE_PROPERTIES_TRAILER: u64 = 32;

pub(super) fn read_file_properties<R>(
	payload: &mut ByteStreamReader<R>,
	properties: &mut AsfProperties,
) -> Result<()>
where
	R: Read + Seek,
{
	payload.skip(FILE_PROPERTIES_SKIP)?;

	let play_duration = payload.read_u64_le()?;
	properties.play_duration = play_duration;
	properties.length_seconds = play_duration / HUNDRED_NS_PER_SECOND;

	if payload.remaining() < FILE_PROPERTIES_TRAILER {
		log::warn!("File Properties Object is missing its trailing fields");
		return Ok(());
	}

	let _send_duration = payload.read_u64_le()?;
	properties.preroll_ms = payload.read_u64_le()?;
	properties.flags = payload.read_u32_le()?;
	let _min_packet_size = payload.read_u32_le()?;
	let _max_packet_size = payload.read_u32_le()?;
	properties.max_bitrate = payload.read_u32_le()?;

	Ok(())
}

// Error correction type (16), time offset (8), type-specific data length (4),
// error correction data length (4), flags (2), reserved (4)
const STREAM_PROPERTIES_SKIP: u64 = 38;

/// Verifies the stream type, returning an error for anything but audio
pub(super) fn verify_audio_stream<R>(payload: &mut ByteStreamReader<R>) -> Result<()>
where
	R: Read + Seek,
{
	let stream_type = Guid(payload.read_array::<16>()?);
	if stream_type != AUDIO_MEDIA {
		log::debug!("Encountered stream type {stream_type}");
		decode_err!(@BAIL Asf, UnsupportedStream, "Found a non-audio stream");
	}

	Ok(())
}

/// Reads the `WAVEFORMATEX` of an audio stream, the stream type must already be verified
pub(super) fn read_stream_properties<R>(
	payload: &mut ByteStreamReader<R>,
	properties: &mut AsfProperties,
) -> Result<()>
where
	R: Read + Seek,
{
	payload.skip(STREAM_PROPERTIES_SKIP)?;

	properties.codec_id = payload.read_u16_le()?;
	properties.channels = payload.read_u16_le()?;
	properties.sample_rate = payload.read_u32_le()?;
	properties.bytes_per_second = payload.read_u32_le()?;
	properties.block_align = payload.read_u16_le()?;
	properties.bit_depth = payload.read_u16_le()?;
	properties.bitrate = (u64::from(properties.bytes_per_second) * 8 / 1000) as u32;

	log::debug!(
		"Found audio stream: codec {:#06x}, {} channels, {} Hz",
		properties.codec_id,
		properties.channels,
		properties.sample_rate
	);

	Ok(())
}

use super::read::WavHeader;
use crate::error::Result;
use crate::macros::decode_err;
use crate::properties::AudioProperties;

use std::time::Duration;

const PCM: u16 = 0x0001;
const IEEE_FLOAT: u16 = 0x0003;

/// A WAV file's format
#[allow(missing_docs, non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WavFormat {
	PCM,
	IEEE_FLOAT,
	Other(u16),
}

impl Default for WavFormat {
	fn default() -> Self {
		Self::Other(0)
	}
}

impl From<u16> for WavFormat {
	fn from(input: u16) -> Self {
		match input {
			PCM => Self::PCM,
			IEEE_FLOAT => Self::IEEE_FLOAT,
			other => Self::Other(other),
		}
	}
}

/// A WAV file's audio properties
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct WavProperties {
	pub(crate) format: WavFormat,
	pub(crate) length_seconds: u64,
	pub(crate) bitrate: u32,
	pub(crate) sample_rate: u32,
	pub(crate) bytes_per_second: u32,
	pub(crate) block_align: u16,
	pub(crate) bit_depth: u16,
	pub(crate) channels: u16,
	pub(crate) data_len: u32,
}

impl From<WavProperties> for AudioProperties {
	fn from(input: WavProperties) -> Self {
		let WavProperties {
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

impl WavProperties {
	/// Length of the audio in whole seconds
	pub fn length_seconds(&self) -> u64 {
		self.length_seconds
	}

	/// Length of the audio as a [`Duration`]
	pub fn duration(&self) -> Duration {
		Duration::from_secs(self.length_seconds)
	}

	/// Audio bitrate (kbps)
	pub fn bitrate(&self) -> u32 {
		self.bitrate
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Average bytes per second, as declared in the header
	pub fn bytes_per_second(&self) -> u32 {
		self.bytes_per_second
	}

	/// Block alignment (bytes per sample frame)
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

	/// Size of the `data` chunk, as declared in the header
	pub fn data_len(&self) -> u32 {
		self.data_len
	}

	/// WAV format
	pub fn format(&self) -> &WavFormat {
		&self.format
	}
}

pub(super) fn read_properties(header: WavHeader) -> Result<WavProperties> {
	let WavHeader {
		format_tag,
		channels,
		sample_rate,
		bytes_per_second,
		block_align,
		bits_per_sample,
		data_len,
	} = header;

	if bytes_per_second == 0 {
		decode_err!(@BAIL Wav, DivisionByZero, "File declares an average byte rate of 0");
	}

	let format = WavFormat::from(format_tag);
	if format != WavFormat::PCM {
		log::warn!("Non-PCM format identified ({format:?}), properties may be inaccurate");
	}

	let bitrate = (u64::from(bytes_per_second) * 8 / 1000) as u32;
	let length_seconds = u64::from(data_len / bytes_per_second);

	log::debug!("Calculated duration ({length_seconds}s) from stream length/byte rate");

	Ok(WavProperties {
		format,
		length_seconds,
		bitrate,
		sample_rate,
		bytes_per_second,
		block_align,
		bit_depth: bits_per_sample,
		channels,
		data_len,
	})
}

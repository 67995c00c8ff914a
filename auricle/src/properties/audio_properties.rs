use std::time::Duration;

/// Various *immutable* audio properties
///
/// Every field defaults to zero when the value could not be determined.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[non_exhaustive]
pub struct AudioProperties {
	pub(crate) length_seconds: u64,
	pub(crate) bitrate: u32,
	pub(crate) sample_rate: u32,
	pub(crate) channels: u16,
}

impl AudioProperties {
	/// Create a new `AudioProperties`
	#[must_use]
	pub const fn new(length_seconds: u64, bitrate: u32, sample_rate: u32, channels: u16) -> Self {
		Self {
			length_seconds,
			bitrate,
			sample_rate,
			channels,
		}
	}

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

	/// Channel count
	pub fn channels(&self) -> u16 {
		self.channels
	}

	/// Used for tests
	#[doc(hidden)]
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

//! Object and stream type identifiers

use std::fmt::{Display, Formatter};

/// A 16 byte ASF object identifier
///
/// The bytes are stored in their on-disk order, where the first three fields of the canonical
/// text form are little-endian.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Guid(pub(crate) [u8; 16]);

impl Guid {
	/// Create a `Guid` from its canonical text form fields
	///
	/// # Examples
	///
	/// ```rust
	/// use auricle::asf::Guid;
	///
	/// // 75B22630-668E-11CF-A6D9-00AA0062CE6C
	/// let guid = Guid::from_fields(
	/// 	0x75B2_2630,
	/// 	0x668E,
	/// 	0x11CF,
	/// 	[0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C],
	/// );
	///
	/// assert_eq!(guid.to_string(), "75B22630-668E-11CF-A6D9-00AA0062CE6C");
	/// assert_eq!(&guid.as_bytes()[..4], &[0x30, 0x26, 0xB2, 0x75]);
	/// ```
	#[must_use]
	pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
		let d1 = data1.to_le_bytes();
		let d2 = data2.to_le_bytes();
		let d3 = data3.to_le_bytes();

		Self([
			d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], data4[0], data4[1], data4[2],
			data4[3], data4[4], data4[5], data4[6], data4[7],
		])
	}

	/// Create a `Guid` from its on-disk bytes
	#[must_use]
	pub const fn from_bytes(bytes: [u8; 16]) -> Self {
		Self(bytes)
	}

	/// The on-disk bytes of the `Guid`
	pub fn as_bytes(&self) -> &[u8; 16] {
		&self.0
	}
}

impl Display for Guid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let b = &self.0;
		write!(
			f,
			"{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
			u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
			u16::from_le_bytes([b[4], b[5]]),
			u16::from_le_bytes([b[6], b[7]]),
			b[8],
			b[9],
			b[10],
			b[11],
			b[12],
			b[13],
			b[14],
			b[15]
		)
	}
}

/// The Header Object, which must begin every ASF file
pub const HEADER_OBJECT: Guid = Guid::from_fields(
	0x75B2_2630,
	0x668E,
	0x11CF,
	[0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C],
);

/// The File Properties Object
pub const FILE_PROPERTIES_OBJECT: Guid = Guid::from_fields(
	0x8CAB_DCA1,
	0xA947,
	0x11CF,
	[0x8E, 0xE4, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65],
);

/// The Stream Properties Object
pub const STREAM_PROPERTIES_OBJECT: Guid = Guid::from_fields(
	0xB7DC_0791,
	0xA9B7,
	0x11CF,
	[0x8E, 0xE6, 0x00, 0xC0, 0x0C, 0x20, 0x53, 0x65],
);

/// The Audio Media stream type, found within a Stream Properties Object
pub const AUDIO_MEDIA: Guid = Guid::from_fields(
	0xF869_9E40,
	0x5B4D,
	0x11CF,
	[0xA8, 0xFD, 0x00, 0x80, 0x5F, 0x5C, 0x44, 0x2B],
);

/// The Content Description Object
pub const CONTENT_DESCRIPTION_OBJECT: Guid = Guid::from_fields(
	0x75B2_2633,
	0x668E,
	0x11CF,
	[0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C],
);

/// The Extended Content Description Object
pub const EXTENDED_CONTENT_DESCRIPTION_OBJECT: Guid = Guid::from_fields(
	0xD2D0_A440,
	0xE307,
	0x11D2,
	[0x97, 0xF0, 0x00, 0xA0, 0xC9, 0x5E, 0xA8, 0x50],
);

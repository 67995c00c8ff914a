use auricle::asf::Guid;
use auricle::asf::guid::{
	AUDIO_MEDIA, CONTENT_DESCRIPTION_OBJECT, EXTENDED_CONTENT_DESCRIPTION_OBJECT,
	FILE_PROPERTIES_OBJECT, HEADER_OBJECT, STREAM_PROPERTIES_OBJECT,
};
use auricle::config::ParseOptions;
use auricle::io::ByteStreamReader;
use auricle::resolve::FormatResolver;

use std::fs::File;
use std::io::{BufReader, Write as _};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write `content` to `name` within a new temporary directory
///
/// The directory is deleted once the returned [`TempDir`] is dropped
pub fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join(name);

	let mut file = File::create(&path).unwrap();
	file.write_all(content).unwrap();
	file.flush().unwrap();

	(dir, path)
}

/// Open `path` as a [`ByteStreamReader`]
pub fn open(path: impl AsRef<Path>) -> ByteStreamReader<BufReader<File>> {
	ByteStreamReader::open(path).unwrap()
}

/// Verify that no audio properties are read when requested
pub fn no_properties_test(name: &str, content: &[u8]) {
	let (_dir, path) = temp_file(name, content);

	let parsed = FormatResolver::new()
		.options(ParseOptions::new().read_properties(false))
		.parse(&path, None)
		.unwrap();
	assert!(parsed.properties().is_empty());
}

/// A canonical 44 byte WAV header
pub struct WavBuilder {
	pub riff: [u8; 4],
	pub format_tag: u16,
	pub channels: u16,
	pub sample_rate: u32,
	pub bytes_per_second: u32,
	pub block_align: u16,
	pub bit_depth: u16,
	pub data_len: u32,
}

impl Default for WavBuilder {
	fn default() -> Self {
		Self {
			riff: *b"RIFF",
			format_tag: 1,
			channels: 2,
			sample_rate: 44100,
			bytes_per_second: 176_400,
			block_align: 4,
			bit_depth: 16,
			data_len: 1_764_000,
		}
	}
}

impl WavBuilder {
	pub fn build(&self) -> Vec<u8> {
		let mut bytes = Vec::with_capacity(44);
		bytes.extend_from_slice(&self.riff);
		bytes.extend_from_slice(&self.data_len.wrapping_add(36).to_le_bytes());
		bytes.extend_from_slice(b"WAVEfmt ");
		bytes.extend_from_slice(&16u32.to_le_bytes());
		bytes.extend_from_slice(&self.format_tag.to_le_bytes());
		bytes.extend_from_slice(&self.channels.to_le_bytes());
		bytes.extend_from_slice(&self.sample_rate.to_le_bytes());
		bytes.extend_from_slice(&self.bytes_per_second.to_le_bytes());
		bytes.extend_from_slice(&self.block_align.to_le_bytes());
		bytes.extend_from_slice(&self.bit_depth.to_le_bytes());
		bytes.extend_from_slice(b"data");
		bytes.extend_from_slice(&self.data_len.to_le_bytes());
		bytes
	}
}

/// Encode `text` as NUL terminated UTF-16LE
pub fn utf16(text: &str) -> Vec<u8> {
	let mut bytes: Vec<u8> = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
	bytes.extend_from_slice(&[0, 0]);
	bytes
}

/// Builds an ASF Header Object from its child objects
#[derive(Default)]
pub struct AsfBuilder {
	objects: Vec<Vec<u8>>,
}

impl AsfBuilder {
	pub fn object(mut self, guid: Guid, payload: &[u8]) -> Self {
		let mut object = guid.as_bytes().to_vec();
		object.extend_from_slice(&(payload.len() as u64 + 24).to_le_bytes());
		object.extend_from_slice(payload);

		self.objects.push(object);
		self
	}

	pub fn file_properties(self, play_duration: u64, preroll_ms: u64) -> Self {
		let mut payload = vec![0; 40];
		payload.extend_from_slice(&play_duration.to_le_bytes());
		payload.extend_from_slice(&play_duration.to_le_bytes());
		payload.extend_from_slice(&preroll_ms.to_le_bytes());
		payload.extend_from_slice(&0x02u32.to_le_bytes());
		payload.extend_from_slice(&3200u32.to_le_bytes());
		payload.extend_from_slice(&3200u32.to_le_bytes());
		payload.extend_from_slice(&128_000u32.to_le_bytes());

		self.object(FILE_PROPERTIES_OBJECT, &payload)
	}

	pub fn stream(self, stream_type: Guid, channels: u16, sample_rate: u32, bytes_per_second: u32) -> Self {
		let mut payload = stream_type.as_bytes().to_vec();
		payload.extend_from_slice(&[0; 38]);
		payload.extend_from_slice(&0x0161u16.to_le_bytes());
		payload.extend_from_slice(&channels.to_le_bytes());
		payload.extend_from_slice(&sample_rate.to_le_bytes());
		payload.extend_from_slice(&bytes_per_second.to_le_bytes());
		payload.extend_from_slice(&2973u16.to_le_bytes());
		payload.extend_from_slice(&16u16.to_le_bytes());

		self.object(STREAM_PROPERTIES_OBJECT, &payload)
	}

	pub fn audio_stream(self, channels: u16, sample_rate: u32, bytes_per_second: u32) -> Self {
		self.stream(AUDIO_MEDIA, channels, sample_rate, bytes_per_second)
	}

	pub fn content_description(self, fields: [&str; 5]) -> Self {
		let fields = fields.map(|field| {
			if field.is_empty() {
				Vec::new()
			} else {
				utf16(field)
			}
		});

		let mut payload = Vec::new();
		for field in &fields {
			payload.extend_from_slice(&(field.len() as u16).to_le_bytes());
		}
		for field in &fields {
			payload.extend_from_slice(field);
		}

		self.object(CONTENT_DESCRIPTION_OBJECT, &payload)
	}

	/// Adds an Extended Content Description Object, with `(name, type, value)` descriptors
	pub fn extended_content_description(self, descriptors: &[(&str, u16, Vec<u8>)]) -> Self {
		let mut payload = (descriptors.len() as u16).to_le_bytes().to_vec();
		for (name, value_type, value) in descriptors {
			let name = utf16(name);

			payload.extend_from_slice(&(name.len() as u16).to_le_bytes());
			payload.extend_from_slice(&name);
			payload.extend_from_slice(&value_type.to_le_bytes());
			payload.extend_from_slice(&(value.len() as u16).to_le_bytes());
			payload.extend_from_slice(value);
		}

		self.object(EXTENDED_CONTENT_DESCRIPTION_OBJECT, &payload)
	}

	pub fn build(&self) -> Vec<u8> {
		let size = 30 + self.objects.iter().map(Vec::len).sum::<usize>() as u64;

		let mut bytes = HEADER_OBJECT.as_bytes().to_vec();
		bytes.extend_from_slice(&size.to_le_bytes());
		bytes.extend_from_slice(&(self.objects.len() as u32).to_le_bytes());
		bytes.extend_from_slice(&[0x01, 0x02]);
		for object in &self.objects {
			bytes.extend_from_slice(object);
		}

		bytes
	}
}

/// A typical WMA file header, with an audio stream and both tag objects
pub fn full_test_asf() -> Vec<u8> {
	AsfBuilder::default()
		.file_properties(1_805_000_000, 3100)
		.audio_stream(2, 44100, 16000)
		.content_description(["Foo title", "Bar artist", "", "Qux comment", ""])
		.extended_content_description(&[
			("WM/AlbumTitle", 0, utf16("Baz album")),
			("WM/Genre", 0, utf16("Classical")),
			("WM/TrackNumber", 3, 1u32.to_le_bytes().to_vec()),
			("IsVBR", 2, 0u32.to_le_bytes().to_vec()),
		])
		.build()
}

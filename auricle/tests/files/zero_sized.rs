use crate::util::{AsfBuilder, WavBuilder, temp_file};

use auricle::asf::AsfFile;
use auricle::config::{ParseOptions, ParsingMode};
use auricle::iff::wav::WavFile;
use auricle::prelude::*;

fn read_file_with_properties<A: AudioFile>(content: &[u8]) -> bool {
	let (_dir, path) = temp_file("zero", content);
	let res = <A as AudioFile>::read_from(
		&mut crate::util::open(&path),
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	);
	res.is_ok()
}

fn read_file_no_properties<A: AudioFile>(content: &[u8]) -> bool {
	let (_dir, path) = temp_file("zero", content);
	let res = <A as AudioFile>::read_from(
		&mut crate::util::open(&path),
		ParseOptions::new().read_properties(false),
	);
	res.is_ok()
}

#[test_log::test]
fn zero_audio_wav() {
	let content = WavBuilder {
		data_len: 0,
		..WavBuilder::default()
	}
	.build();

	// An empty data chunk is still a valid file, it just has no length
	assert!(read_file_with_properties::<WavFile>(&content));
	assert!(read_file_no_properties::<WavFile>(&content));
}

#[test_log::test]
fn zero_byte_rate_wav() {
	let content = WavBuilder {
		bytes_per_second: 0,
		..WavBuilder::default()
	}
	.build();

	// A WAV file with a byte rate of 0 will error when attempting to read properties
	assert!(!read_file_with_properties::<WavFile>(&content));
	assert!(read_file_no_properties::<WavFile>(&content));
}

#[test_log::test]
fn zero_objects_asf() {
	let content = AsfBuilder::default().build();

	assert!(read_file_with_properties::<AsfFile>(&content));
	assert!(read_file_no_properties::<AsfFile>(&content));
}

#[test_log::test]
fn zero_sized_file() {
	assert!(!read_file_with_properties::<WavFile>(&[]));
	assert!(!read_file_no_properties::<AsfFile>(&[]));
}

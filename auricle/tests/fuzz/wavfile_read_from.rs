use crate::{corruptions, get_reader, oom_test, truncations};
use auricle::config::ParseOptions;
use auricle::iff::wav::WavFile;
use auricle::prelude::*;

fn header() -> Vec<u8> {
	let mut header = Vec::with_capacity(44);
	header.extend_from_slice(b"RIFF");
	header.extend_from_slice(&36u32.to_le_bytes());
	header.extend_from_slice(b"WAVEfmt ");
	header.extend_from_slice(&16u32.to_le_bytes());
	header.extend_from_slice(&1u16.to_le_bytes());
	header.extend_from_slice(&2u16.to_le_bytes());
	header.extend_from_slice(&44100u32.to_le_bytes());
	header.extend_from_slice(&176_400u32.to_le_bytes());
	header.extend_from_slice(&4u16.to_le_bytes());
	header.extend_from_slice(&16u16.to_le_bytes());
	header.extend_from_slice(b"data");
	header.extend_from_slice(&u32::MAX.to_le_bytes());
	header
}

#[test_log::test]
fn truncated() {
	let header = header();
	for content in truncations(&header) {
		let res = WavFile::read_from(&mut get_reader(content), ParseOptions::new());
		assert_eq!(res.is_ok(), content.len() == header.len());
	}
}

#[test_log::test]
fn corrupted() {
	for replacement in [0x00, 0xFF] {
		for content in corruptions(&header(), replacement) {
			let _ = WavFile::read_from(&mut get_reader(&content), ParseOptions::new());
		}
	}
}

#[test_log::test]
fn oom1() {
	// The declared sizes are never used for allocation
	oom_test::<WavFile>(header());
}

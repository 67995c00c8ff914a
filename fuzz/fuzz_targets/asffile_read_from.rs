#![no_main]

use std::io::Cursor;

use auricle::asf::AsfFile;
use auricle::config::{ParseOptions, ParsingMode};
use auricle::file::AudioFile;
use auricle::io::ByteStreamReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	if let Ok(mut reader) = ByteStreamReader::new(Cursor::new(data)) {
		let _ = AsfFile::read_from(
			&mut reader,
			ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
		);
	}
});

#![no_main]

use std::io::Cursor;

use auricle::config::ParseOptions;
use auricle::file::AudioFile;
use auricle::iff::wav::WavFile;
use auricle::io::ByteStreamReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	if let Ok(mut reader) = ByteStreamReader::new(Cursor::new(data)) {
		let _ = WavFile::read_from(&mut reader, ParseOptions::new());
	}
});

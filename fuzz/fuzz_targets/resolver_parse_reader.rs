#![no_main]

use std::io::Cursor;

use auricle::file::FileType;
use auricle::io::ByteStreamReader;
use auricle::resolve::FormatResolver;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let resolver = FormatResolver::new();

	for file_type in [FileType::Wav, FileType::Asf] {
		if let Ok(mut reader) = ByteStreamReader::new(Cursor::new(data.as_slice())) {
			let _ = resolver.parse_reader(&mut reader, file_type);
		}
	}
});

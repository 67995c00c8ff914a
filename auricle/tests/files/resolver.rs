use crate::util::{WavBuilder, full_test_asf, temp_file};

use auricle::error::ErrorKind;
use auricle::file::{EXTENSIONS, FileType, MIME_TYPES};
use auricle::prelude::*;

#[test_log::test]
fn by_extension() {
	let (_dir, path) = temp_file("track.wav", &WavBuilder::default().build());

	let parsed = FormatResolver::new().parse(&path, None).unwrap();
	assert_eq!(parsed.file_type(), FileType::Wav);
}

#[test_log::test]
fn by_mime() {
	let (_dir, path) = temp_file("track.unknownext", &full_test_asf());

	let parsed = auricle::read_from_path_with_mime(&path, "audio/x-ms-wma").unwrap();
	assert_eq!(parsed.file_type(), FileType::Asf);
	assert_eq!(parsed.properties().length_seconds(), 180);
}

#[test_log::test]
fn unknown_extension() {
	let (_dir, path) = temp_file("track.xyz", &WavBuilder::default().build());

	let err = auricle::read_from_path(&path).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnrecognizedFormat));
}

#[test_log::test]
fn unknown_mime_falls_back() {
	let (_dir, path) = temp_file("track.WMA", &full_test_asf());

	let parsed = auricle::read_from_path_with_mime(&path, "application/octet-stream").unwrap();
	assert_eq!(parsed.file_type(), FileType::Asf);
}

#[test_log::test]
fn video_mime_is_not_audio() {
	let (_dir, path) = temp_file("track.bin", &full_test_asf());

	let err = auricle::read_from_path_with_mime(&path, "video/x-ms-wmv").unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnrecognizedFormat));
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();

	let err = auricle::read_from_path(dir.path().join("track.wma")).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NotFound));
}

#[test_log::test]
fn every_table_entry_resolves() {
	let resolver = FormatResolver::new();

	for ext in EXTENSIONS {
		let path = format!("track.{ext}");
		assert!(resolver.resolve(&path, None).is_some(), "{path}");
	}

	for (mime, file_type) in MIME_TYPES {
		assert_eq!(resolver.resolve("track", Some(mime)), Some(*file_type));
	}
}

#[test_log::test]
fn shared_between_threads() {
	let (_dir, path) = temp_file("track.wma", &full_test_asf());
	let resolver = FormatResolver::new();

	let outcomes = std::thread::scope(|scope| {
		let handles = (0..4)
			.map(|_| scope.spawn(|| resolver.parse(&path, None).unwrap()))
			.collect::<Vec<_>>();

		handles
			.into_iter()
			.map(|handle| handle.join().unwrap())
			.collect::<Vec<_>>()
	});

	assert!(outcomes.windows(2).all(|pair| pair[0] == pair[1]));
}

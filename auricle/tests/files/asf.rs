use crate::util::{AsfBuilder, full_test_asf, no_properties_test, open, temp_file, utf16};

use auricle::asf::guid::AUDIO_MEDIA;
use auricle::asf::{AsfFile, AttributeValue, Guid};
use auricle::config::{ParseOptions, ParsingMode};
use auricle::error::ErrorKind;
use auricle::file::FileType;
use auricle::prelude::*;

// 59DACFC0-59E6-11D0-A3AC-00A0C90348F6, the Command Media stream type
const COMMAND_MEDIA: Guid = Guid::from_fields(
	0x59DA_CFC0,
	0x59E6,
	0x11D0,
	[0xA3, 0xAC, 0x00, 0xA0, 0xC9, 0x03, 0x48, 0xF6],
);

#[test_log::test]
fn read() {
	let (_dir, path) = temp_file("track.wma", &full_test_asf());

	let parsed = auricle::read_from_path(&path).unwrap();
	assert_eq!(parsed.file_type(), FileType::Asf);

	let properties = parsed.properties();
	assert_eq!(properties.length_seconds(), 180);
	assert_eq!(properties.bitrate(), 128);
	assert_eq!(properties.sample_rate(), 44100);
	assert_eq!(properties.channels(), 2);

	let tags = parsed.tags().unwrap();
	assert_eq!(tags.title(), Some("Foo title"));
	assert_eq!(tags.artist(), Some("Bar artist"));
	assert_eq!(tags.copyright(), None);
	assert_eq!(tags.comment(), Some("Qux comment"));
	assert_eq!(tags.rating(), None);

	assert_eq!(tags.album(), Some("Baz album"));
	assert_eq!(tags.genre(), Some("Classical"));
	assert_eq!(tags.track_number(), Some(1));
	assert_eq!(tags.get("IsVBR"), Some(&AttributeValue::Bool(false)));
	assert_eq!(tags.len(), 4);
}

#[test_log::test]
fn read_concrete() {
	let (_dir, path) = temp_file("track.asf", &full_test_asf());

	let asf = AsfFile::read_from(&mut open(&path), ParseOptions::new()).unwrap();
	let properties = asf.properties();

	assert_eq!(properties.codec_id(), 0x0161);
	assert_eq!(properties.preroll_ms(), 3100);
	assert_eq!(properties.max_bitrate(), 128_000);
	assert_eq!(properties.duration().as_millis(), 180_500);
}

#[test_log::test]
fn read_twice() {
	let (_dir, path) = temp_file("track.wma", &full_test_asf());

	let first = auricle::read_from_path(&path).unwrap();
	let second = auricle::read_from_path(&path).unwrap();

	assert_eq!(first.tags(), second.tags());
	assert_eq!(first, second);
}

#[test_log::test]
fn read_no_tags() {
	let (_dir, path) = temp_file("track.wma", &full_test_asf());

	let parsed = FormatResolver::new()
		.options(ParseOptions::new().read_tags(false))
		.parse(&path, None)
		.unwrap();

	assert!(parsed.tags().is_none());
	assert_eq!(parsed.properties().length_seconds(), 180);
}

#[test_log::test]
fn read_no_properties() {
	no_properties_test("track.wma", &full_test_asf());
}

#[test_log::test]
fn truncated_last_object() {
	let mut content = full_test_asf();

	// Shrink the declared header size by a single byte, the last object now overruns it
	let header_size = u64::from_le_bytes(content[16..24].try_into().unwrap());
	content[16..24].copy_from_slice(&(header_size - 1).to_le_bytes());

	let (_dir, path) = temp_file("track.wma", &content);

	let err = auricle::read_from_path(&path).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedContainer));
}

#[test_log::test]
fn unsupported_stream() {
	let content = AsfBuilder::default()
		.file_properties(10_000_000, 0)
		.stream(COMMAND_MEDIA, 0, 0, 0)
		.build();

	let (_dir, path) = temp_file("track.asf", &content);

	let err = auricle::read_from_path(&path).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnsupportedStream));
}

#[test_log::test]
fn stream_after_unknown_objects() {
	// 1806D474-CADF-4509-A4BA-9AABCB96AAE8, a Padding Object
	let padding = Guid::from_fields(
		0x1806_D474,
		0xCADF,
		0x4509,
		[0xA4, 0xBA, 0x9A, 0xAB, 0xCB, 0x96, 0xAA, 0xE8],
	);

	let content = AsfBuilder::default()
		.object(padding, &[0xFF; 512])
		.object(padding, &[])
		.stream(AUDIO_MEDIA, 1, 32000, 6000)
		.build();

	let (_dir, path) = temp_file("track.wma", &content);

	let parsed = auricle::read_from_path(&path).unwrap();
	assert_eq!(parsed.properties().sample_rate(), 32000);
	assert_eq!(parsed.properties().bitrate(), 48);
	// No File Properties Object
	assert_eq!(parsed.properties().length_seconds(), 0);
}

#[test_log::test]
fn invalid_text() {
	let content = AsfBuilder::default()
		.audio_stream(2, 44100, 16000)
		.extended_content_description(&[
			("WM/Genre", 0, vec![0x00, 0xD8, 0x41, 0x00]),
			("WM/Year", 0, utf16("2004")),
		])
		.build();

	let (_dir, path) = temp_file("track.wma", &content);

	let strict = FormatResolver::new().options(ParseOptions::new().parsing_mode(ParsingMode::Strict));
	let err = strict.parse(&path, None).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));

	let best_attempt = FormatResolver::new().parse(&path, None).unwrap();
	let tags = best_attempt.tags().unwrap();
	assert_eq!(tags.genre(), Some("\u{FFFD}A"));
	assert_eq!(tags.year(), Some("2004"));

	let relaxed = FormatResolver::new()
		.options(ParseOptions::new().parsing_mode(ParsingMode::Relaxed))
		.parse(&path, None)
		.unwrap();
	let tags = relaxed.tags().unwrap();
	assert_eq!(tags.genre(), None);
	assert_eq!(tags.year(), Some("2004"));
}

#[test_log::test]
fn allocation_limit() {
	let content = AsfBuilder::default()
		.audio_stream(2, 44100, 16000)
		.extended_content_description(&[("WM/Picture", 1, vec![0; 4096])])
		.build();

	let (_dir, path) = temp_file("track.wma", &content);

	let err = FormatResolver::new()
		.options(ParseOptions::new().allocation_limit(1024))
		.parse(&path, None)
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));

	let parsed = auricle::read_from_path(&path).unwrap();
	assert_eq!(
		parsed.tags().and_then(|tags| tags.get("WM/Picture")),
		Some(&AttributeValue::Binary(vec![0; 4096]))
	);
}

//! Read audio properties and tags from WAV and ASF (WMA) containers.
//!
//! # Supported Formats
//!
//! | Format   | Extensions    | Properties | Tags                                            |
//! |----------|---------------|------------|-------------------------------------------------|
//! | WAV      | `wav`, `wave` | Yes        | No                                              |
//! | ASF      | `wma`, `asf`  | Yes        | Content Description, Extended Content Description |
//!
//! # Examples
//!
//! ## Reading a file from a path
//!
//! ```rust,no_run
//! # fn main() -> auricle::error::Result<()> {
//! use auricle::read_from_path;
//!
//! // The format is resolved from the extension ("wma" in this case)
//! let parsed = read_from_path("track.wma")?;
//!
//! println!("{} seconds", parsed.properties().length_seconds());
//! if let Some(tags) = parsed.tags() {
//! 	println!("Title: {:?}", tags.title());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using a MIME type
//!
//! When the host has already sniffed a MIME type, it takes priority over the extension.
//!
//! ```rust,no_run
//! # fn main() -> auricle::error::Result<()> {
//! use auricle::file::FileType;
//! use auricle::resolve::FormatResolver;
//!
//! let parsed = FormatResolver::new().parse("download.bin", Some("audio/x-ms-wma"))?;
//! assert_eq!(parsed.file_type(), FileType::Asf);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using concrete file types
//!
//! ```rust
//! # fn main() -> auricle::error::Result<()> {
//! use auricle::config::ParseOptions;
//! use auricle::file::AudioFile;
//! use auricle::iff::wav::WavFile;
//! use auricle::io::ByteStreamReader;
//! use std::io::Cursor;
//!
//! # let mut header = Vec::new();
//! # header.extend_from_slice(b"RIFF");
//! # header.extend_from_slice(&36u32.to_le_bytes());
//! # header.extend_from_slice(b"WAVEfmt ");
//! # header.extend_from_slice(&16u32.to_le_bytes());
//! # header.extend_from_slice(&1u16.to_le_bytes());
//! # header.extend_from_slice(&2u16.to_le_bytes());
//! # header.extend_from_slice(&44100u32.to_le_bytes());
//! # header.extend_from_slice(&176_400u32.to_le_bytes());
//! # header.extend_from_slice(&4u16.to_le_bytes());
//! # header.extend_from_slice(&16u16.to_le_bytes());
//! # header.extend_from_slice(b"data");
//! # header.extend_from_slice(&1_764_000u32.to_le_bytes());
//! let mut reader = ByteStreamReader::new(Cursor::new(header))?;
//!
//! // We are expecting a WAV file
//! let wav = WavFile::read_from(&mut reader, ParseOptions::new())?;
//!
//! assert_eq!(wav.properties().channels(), 2);
//! assert_eq!(wav.properties().length_seconds(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! # Important format-specific notes
//!
//! * WAV files are read from the canonical 44 byte PCM header. Files with additional chunks
//!   between `fmt ` and `data` are rejected rather than guessed at.
//! * Only audio streams are supported in ASF files, a video stream will fail the parse.

pub mod asf;
pub mod config;
pub mod error;
pub mod file;
pub mod iff;
pub mod properties;
pub mod resolve;

pub(crate) mod macros;
mod util;

pub use crate::resolve::{read_from_path, read_from_path_with_mime};

pub use util::io;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use auricle::prelude::*;
	//! ```

	pub use crate::file::AudioFile;
	pub use crate::resolve::FormatResolver;
}

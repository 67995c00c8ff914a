//! Generic audio properties
//!
//! Many audio formats have their own custom properties, but there are some properties that are
//! common to all formats. When using a [`ParsedFile`](crate::file::ParsedFile), any custom
//! properties will simply be converted to [`AudioProperties`].

mod audio_properties;

pub use audio_properties::AudioProperties;

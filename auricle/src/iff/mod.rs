//! RIFF based formats

pub mod wav;

//! Various configuration options to control auricle

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};

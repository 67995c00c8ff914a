#![allow(missing_docs)]

mod asf;
mod resolver;
pub(crate) mod util;
mod zero_sized;

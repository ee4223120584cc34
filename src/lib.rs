pub mod codec;
pub mod error;
pub mod types;
pub mod web;

pub use error::{Result, TextcodecError, TransformError};
pub use types::{CaseSensitivity, CodecMeta, Context, Direction, Encoding, InputSource, OutputDest};

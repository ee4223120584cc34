mod base2_8;
mod base64;
mod braille;
mod hex;
mod morse;
mod punycode;
pub mod registry;
mod rot;
mod urlencoding;
pub(crate) mod util;

pub use registry::Registry;

use crate::error::TransformError;
use crate::types::CodecMeta;

/// One encoding scheme: a pure text-to-text transform in each direction.
pub trait Codec: Send + Sync {
    fn meta(&self) -> CodecMeta;
    fn encode(&self, input: &str) -> String;
    fn decode(&self, input: &str) -> Result<String, TransformError>;

    fn name(&self) -> &'static str {
        self.meta().name
    }
}

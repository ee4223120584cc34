use serde::Serialize;

use crate::io::read_input;
use textcodec::error::Result;
use textcodec::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct DecodeResult {
    pub encoding: String,
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
}

pub fn run_decode(ctx: &Context, encoding_name: &str, input: &InputSource) -> Result<String> {
    let codec = ctx.registry.get(encoding_name)?;
    let text = read_input(input)?;
    Ok(codec.decode(&text)?)
}

/// Like `run_decode`, but a decode failure is reported in the result
/// instead of as an error.
pub fn run_decode_json(ctx: &Context, encoding_name: &str, input: &InputSource) -> Result<DecodeResult> {
    let codec = ctx.registry.get(encoding_name)?;
    let text = read_input(input)?;
    let (output, error) = match codec.decode(&text) {
        Ok(decoded) => (Some(decoded), None),
        Err(e) => (None, Some(e.to_string())),
    };

    Ok(DecodeResult {
        encoding: codec.name().to_string(),
        input: text,
        output,
        error,
    })
}

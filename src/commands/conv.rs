use serde::Serialize;

use crate::io::read_input;
use textcodec::error::Result;
use textcodec::types::{Context, InputSource};

#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub from_encoding: String,
    pub to_encoding: String,
    pub input: String,
    pub output: String,
}

pub fn run_conv(ctx: &Context, from: &str, to: &str, input: &InputSource) -> Result<ConvertResult> {
    let decoder = ctx.registry.get(from)?;
    let encoder = ctx.registry.get(to)?;

    let text = read_input(input)?;
    let decoded = decoder.decode(&text)?;
    let output = encoder.encode(&decoded);

    Ok(ConvertResult {
        from_encoding: decoder.name().to_string(),
        to_encoding: encoder.name().to_string(),
        input: text,
        output,
    })
}

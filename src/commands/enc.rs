use serde::Serialize;

use crate::io::read_input;
use textcodec::error::Result;
use textcodec::types::{Context, Encoding, InputSource};

#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub encoding: String,
    pub input: String,
    pub output: String,
}

pub fn run_encode(ctx: &Context, encoding_name: &str, input: &InputSource) -> Result<EncodeResult> {
    let codec = ctx.registry.get(encoding_name)?;
    let text = read_input(input)?;
    let output = codec.encode(&text);

    Ok(EncodeResult {
        encoding: codec.name().to_string(),
        input: text,
        output,
    })
}

pub fn run_encode_all(ctx: &Context, input: &InputSource) -> Result<Vec<EncodeResult>> {
    let text = read_input(input)?;

    Ok(Encoding::ALL
        .into_iter()
        .map(|encoding| EncodeResult {
            encoding: encoding.to_string(),
            input: text.clone(),
            output: ctx.registry.codec(encoding).encode(&text),
        })
        .collect())
}

pub fn format_encode_all(results: &[EncodeResult]) -> String {
    let mut lines = vec![format!("{:<10} {}", "ENCODING", "ENCODED"), "-".repeat(70)];
    for r in results {
        let display = if r.output.chars().count() > 58 {
            format!("{}...", r.output.chars().take(55).collect::<String>())
        } else {
            r.output.clone()
        };
        lines.push(format!("{:<10} {}", r.encoding, display));
    }
    lines.join("\n")
}

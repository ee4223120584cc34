use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::prelude::*;
use base64::Engine;

use super::Codec;
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

const STANDARD_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard alphabet, stray low bits in the last symbol tolerated. Padding is
/// checked by `unpad` before the engine sees the data.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

fn is_base64_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

/// Strips padding from already filtered input. A `=` only counts once two or
/// more data symbols of the current quad are present; enough of them to fill
/// the quad end the input and anything after is ignored. Otherwise the data
/// must fill whole quads.
fn unpad(cleaned: &str) -> Result<String, String> {
    let mut data = String::with_capacity(cleaned.len());
    let mut quad_pos = 0;
    let mut pads = 0;

    for c in cleaned.chars() {
        if c == '=' {
            if quad_pos >= 2 {
                pads += 1;
                if quad_pos + pads >= 4 {
                    return Ok(data);
                }
            }
            continue;
        }
        data.push(c);
        pads = 0;
        quad_pos = (quad_pos + 1) % 4;
    }

    match quad_pos {
        0 => Ok(data),
        1 => Err(format!("{} data symbols is one more than a multiple of 4", data.len())),
        _ => Err("incorrect padding".to_string()),
    }
}

pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "base64",
            alphabet: STANDARD_ALPHABET,
            case_sensitivity: CaseSensitivity::Sensitive,
            fallible: true,
            description: "RFC4648 Base64 with padding",
        }
    }

    fn encode(&self, input: &str) -> String {
        BASE64_STANDARD.encode(input.as_bytes())
    }

    // Characters outside the alphabet are discarded before decoding.
    fn decode(&self, input: &str) -> Result<String, TransformError> {
        let cleaned: String = input.chars().filter(|&c| is_base64_symbol(c)).collect();
        let data = unpad(&cleaned).map_err(|detail| TransformError::InvalidBase64 { detail })?;
        let bytes = FORGIVING
            .decode(data.as_bytes())
            .map_err(|e| TransformError::InvalidBase64 { detail: e.to_string() })?;
        String::from_utf8(bytes).map_err(|e| TransformError::InvalidBase64 { detail: e.to_string() })
    }
}

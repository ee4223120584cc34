use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use super::Codec;
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

const ALPHABET: &str = "0123456789abcdef";

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Collects the digit pairs of `input`. Whitespace may appear only between
/// pairs, never inside one.
fn collect_pairs(input: &str) -> Result<String, String> {
    let mut pairs = String::with_capacity(input.len());
    let mut chars = input.chars().enumerate();

    while let Some((pos, hi)) = chars.next() {
        if is_separator(hi) {
            continue;
        }
        match chars.next() {
            Some((_, lo)) if !is_separator(lo) => {
                pairs.push(hi);
                pairs.push(lo);
            }
            Some((lo_pos, _)) => return Err(format!("whitespace inside the pair at position {}", lo_pos)),
            None => return Err(format!("unpaired digit at position {}", pos)),
        }
    }
    Ok(pairs)
}

/// Parses hex pairs (either case) and decodes the bytes as UTF-8. The error
/// is a description of what went wrong.
fn decode_hex_text(input: &str) -> Result<String, String> {
    let cleaned = collect_pairs(input)?;
    let bytes = HEXLOWER_PERMISSIVE
        .decode(cleaned.as_bytes())
        .map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

pub struct Utf8Hex;

impl Codec for Utf8Hex {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "utf8",
            alphabet: ALPHABET,
            case_sensitivity: CaseSensitivity::Insensitive,
            fallible: true,
            description: "UTF-8 bytes as lowercase hex pairs",
        }
    }

    fn encode(&self, input: &str) -> String {
        HEXLOWER.encode(input.as_bytes())
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        decode_hex_text(input).map_err(|detail| TransformError::InvalidUtf8Hex { detail })
    }
}

pub struct Hex;

impl Codec for Hex {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "hex",
            alphabet: ALPHABET,
            case_sensitivity: CaseSensitivity::Insensitive,
            fallible: true,
            description: "Hexadecimal (base16) of the text's bytes",
        }
    }

    fn encode(&self, input: &str) -> String {
        HEXLOWER.encode(input.as_bytes())
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        decode_hex_text(input).map_err(|detail| TransformError::InvalidHex { detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encode() {
        assert_eq!(Hex.encode("Hello"), "48656c6c6f");
        assert_eq!(Utf8Hex.encode("é"), "c3a9");
        assert_eq!(Utf8Hex.encode("世"), "e4b896");
    }

    #[test]
    fn test_hex_decode() {
        assert_eq!(Hex.decode("48656c6c6f").unwrap(), "Hello");
        assert_eq!(Utf8Hex.decode("c3a9").unwrap(), "é");
    }

    #[test]
    fn test_hex_decode_uppercase() {
        assert_eq!(Hex.decode("48656C6C6F").unwrap(), "Hello");
    }

    #[test]
    fn test_hex_decode_whitespace() {
        assert_eq!(Hex.decode("48 65 6c 6c 6f\n").unwrap(), "Hello");
    }

    #[test]
    fn test_hex_whitespace_between_pairs_only() {
        assert_eq!(Hex.decode("48 65").unwrap(), "He");
        assert_eq!(Utf8Hex.decode("48 65").unwrap(), "He");
        assert_eq!(Hex.decode("4 8").unwrap_err().to_string(), "Invalid Hex Input");
        assert_eq!(Utf8Hex.decode("4 8").unwrap_err().to_string(), "Invalid UTF-8 Hex Input");
        assert_eq!(Hex.decode("48 6\n5").unwrap_err().to_string(), "Invalid Hex Input");
    }

    #[test]
    fn test_hex_invalid_digit() {
        let err = Hex.decode("zz").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Hex Input");
    }

    #[test]
    fn test_hex_odd_length() {
        assert_eq!(Hex.decode("4865a").unwrap_err().to_string(), "Invalid Hex Input");
    }

    #[test]
    fn test_hex_invalid_utf8() {
        assert_eq!(Hex.decode("ff").unwrap_err().to_string(), "Invalid Hex Input");
        assert_eq!(Utf8Hex.decode("c3").unwrap_err().to_string(), "Invalid UTF-8 Hex Input");
        assert_eq!(Utf8Hex.decode("xyz").unwrap_err().to_string(), "Invalid UTF-8 Hex Input");
    }

    #[test]
    fn test_hex_empty() {
        assert_eq!(Hex.encode(""), "");
        assert_eq!(Hex.decode("").unwrap(), "");
    }

    #[test]
    fn test_utf8_roundtrip() {
        let text = "Hello, 世界! ü";
        assert_eq!(Utf8Hex.decode(&Utf8Hex.encode(text)).unwrap(), text);
    }
}

use super::Codec;
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

pub struct Rot13;

fn rot13_char(c: char) -> char {
    match c {
        'A'..='Z' => ((((c as u8 - b'A') + 13) % 26) + b'A') as char,
        'a'..='z' => ((((c as u8 - b'a') + 13) % 26) + b'a') as char,
        _ => c,
    }
}

impl Codec for Rot13 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "rot13",
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
            case_sensitivity: CaseSensitivity::Sensitive,
            fallible: false,
            description: "ROT13 letter substitution (A-Z rotated by 13)",
        }
    }

    fn encode(&self, input: &str) -> String {
        input.chars().map(rot13_char).collect()
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        Ok(self.encode(input))
    }
}

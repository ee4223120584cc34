use super::{util, Codec};
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

pub struct Binary;

impl Codec for Binary {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "binary",
            alphabet: "01 ",
            case_sensitivity: CaseSensitivity::Insensitive,
            fallible: true,
            description: "Code points as 8-bit (or wider) binary, space separated",
        }
    }

    fn encode(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| format!("{:08b}", c as u32))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        util::parse_code_points(input, 2).map_err(|detail| TransformError::InvalidBinary { detail })
    }
}

pub struct Octal;

impl Codec for Octal {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "octal",
            alphabet: "01234567 ",
            case_sensitivity: CaseSensitivity::Insensitive,
            fallible: true,
            description: "Code points in octal, space separated",
        }
    }

    fn encode(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| format!("{:o}", c as u32))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        util::parse_code_points(input, 8).map_err(|detail| TransformError::InvalidOctal { detail })
    }
}

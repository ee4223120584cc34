use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::codec::Registry;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

/// The closed set of supported encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Utf8,
    Url,
    Hex,
    Rot13,
    Binary,
    Octal,
    Punycode,
    Morse,
    Braille,
    Base64,
}

impl Encoding {
    pub const ALL: [Encoding; 10] = [
        Encoding::Utf8,
        Encoding::Url,
        Encoding::Hex,
        Encoding::Rot13,
        Encoding::Binary,
        Encoding::Octal,
        Encoding::Punycode,
        Encoding::Morse,
        Encoding::Braille,
        Encoding::Base64,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Url => "url",
            Encoding::Hex => "hex",
            Encoding::Rot13 => "rot13",
            Encoding::Binary => "binary",
            Encoding::Octal => "octal",
            Encoding::Punycode => "punycode",
            Encoding::Morse => "morse",
            Encoding::Braille => "braille",
            Encoding::Base64 => "base64",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ();

    // Exact match: the form posts the names verbatim.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Encoding::ALL.into_iter().find(|e| e.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Direction::Encode),
            "decode" => Ok(Direction::Decode),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => InputSource::Literal(s.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub name: &'static str,
    pub alphabet: &'static str,
    pub case_sensitivity: CaseSensitivity,
    pub fallible: bool,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_names_roundtrip() {
        for enc in Encoding::ALL {
            assert_eq!(enc.as_str().parse::<Encoding>(), Ok(enc));
        }
    }

    #[test]
    fn test_encoding_exact_match() {
        assert!("HEX".parse::<Encoding>().is_err());
        assert!("nonexistent".parse::<Encoding>().is_err());
        assert!("".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("encode".parse::<Direction>(), Ok(Direction::Encode));
        assert_eq!("decode".parse::<Direction>(), Ok(Direction::Decode));
        assert!("Encode".parse::<Direction>().is_err());
        assert!("convert".parse::<Direction>().is_err());
    }

    #[test]
    fn test_input_source_parse() {
        assert!(matches!(InputSource::parse("-"), InputSource::Stdin));
        assert!(matches!(InputSource::parse("@in.txt"), InputSource::File(p) if p == PathBuf::from("in.txt")));
        assert!(matches!(InputSource::parse("hello"), InputSource::Literal(s) if s == "hello"));
    }

    #[test]
    fn test_encoding_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Encoding::Rot13).unwrap(), "\"rot13\"");
    }
}

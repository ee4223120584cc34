use super::Codec;
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

pub struct UrlEncoding;

fn is_unescaped(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b'/')
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl Codec for UrlEncoding {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "url",
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.~/%",
            case_sensitivity: CaseSensitivity::Sensitive,
            fallible: false,
            description: "URL percent-encoding ('/' left as is)",
        }
    }

    fn encode(&self, input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        for &byte in input.as_bytes() {
            if is_unescaped(byte) {
                result.push(byte as char);
            } else {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
        result
    }

    // Malformed escapes pass through untouched; invalid UTF-8 becomes U+FFFD.
    fn decode(&self, input: &str) -> Result<String, TransformError> {
        let bytes = input.as_bytes();
        let mut result = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'%' && i + 2 < bytes.len() {
                if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    result.push(hi << 4 | lo);
                    i += 3;
                    continue;
                }
            }
            result.push(bytes[i]);
            i += 1;
        }

        Ok(String::from_utf8_lossy(&result).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encode() {
        assert_eq!(UrlEncoding.encode("Hello"), "Hello");
        assert_eq!(UrlEncoding.encode("Hello World"), "Hello%20World");
        assert_eq!(UrlEncoding.encode("test@example.com"), "test%40example.com");
        assert_eq!(UrlEncoding.encode("a+b=c"), "a%2Bb%3Dc");
        assert_eq!(UrlEncoding.encode("/path/to"), "/path/to");
    }

    #[test]
    fn test_url_encode_utf8() {
        assert_eq!(UrlEncoding.encode("é"), "%C3%A9");
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(UrlEncoding.decode("Hello%20World").unwrap(), "Hello World");
        assert_eq!(UrlEncoding.decode("test%40example.com").unwrap(), "test@example.com");
        assert_eq!(UrlEncoding.decode("%c3%a9").unwrap(), "é");
    }

    #[test]
    fn test_url_plus_is_literal() {
        assert_eq!(UrlEncoding.decode("a+b").unwrap(), "a+b");
    }

    #[test]
    fn test_url_malformed_passthrough() {
        assert_eq!(UrlEncoding.decode("100%").unwrap(), "100%");
        assert_eq!(UrlEncoding.decode("%2").unwrap(), "%2");
        assert_eq!(UrlEncoding.decode("%ZZ%41").unwrap(), "%ZZA");
    }

    #[test]
    fn test_url_invalid_utf8_replaced() {
        assert_eq!(UrlEncoding.decode("%FF").unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_url_roundtrip() {
        let data = "Hello, World! @#$%^&*() 世界";
        assert_eq!(UrlEncoding.decode(&UrlEncoding.encode(data)).unwrap(), data);
    }

    #[test]
    fn test_url_empty() {
        assert_eq!(UrlEncoding.encode(""), "");
        assert_eq!(UrlEncoding.decode("").unwrap(), "");
    }
}

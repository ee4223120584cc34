use super::Codec;
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

pub struct Punycode;

const BASE: u32 = 36;
const TMIN: u32 = 1;
const TMAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

fn adapt(mut delta: u64, numpoints: u64, firsttime: bool) -> u32 {
    delta = if firsttime { delta / DAMP as u64 } else { delta / 2 };
    delta += delta / numpoints;

    let mut k = 0;
    while delta > (((BASE - TMIN) * TMAX) / 2) as u64 {
        delta /= (BASE - TMIN) as u64;
        k += BASE;
    }

    k + (((BASE - TMIN + 1) as u64 * delta) / (delta + SKEW as u64)) as u32
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

fn encode_digit(d: u32) -> char {
    if d < 26 {
        (b'a' + d as u8) as char
    } else {
        (b'0' + (d - 26) as u8) as char
    }
}

fn decode_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some((c as u8 - b'a') as u32),
        'A'..='Z' => Some((c as u8 - b'A') as u32),
        '0'..='9' => Some(26 + (c as u8 - b'0') as u32),
        _ => None,
    }
}

fn overflow() -> TransformError {
    TransformError::invalid_punycode("overflow")
}

impl Codec for Punycode {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "punycode",
            alphabet: "abcdefghijklmnopqrstuvwxyz0123456789-",
            case_sensitivity: CaseSensitivity::Insensitive,
            fallible: true,
            description: "Punycode (RFC 3492) of the whole string",
        }
    }

    /// Basic code points come first, followed by a delimiter whenever there
    /// are any, then the encoded insertions.
    fn encode(&self, input: &str) -> String {
        let chars: Vec<u32> = input.chars().map(|c| c as u32).collect();

        let mut output: String = input.chars().filter(|c| c.is_ascii()).collect();
        let b = output.len() as u64;
        if b > 0 {
            output.push(DELIMITER);
        }

        let mut n = INITIAL_N;
        let mut delta = 0u64;
        let mut bias = INITIAL_BIAS;
        let mut h = b;

        while h < chars.len() as u64 {
            let Some(m) = chars.iter().copied().filter(|&c| c >= n).min() else {
                break;
            };

            delta += (m - n) as u64 * (h + 1);
            n = m;

            for &c in &chars {
                if c < n {
                    delta += 1;
                } else if c == n {
                    let mut q = delta;
                    let mut k = BASE;

                    loop {
                        let t = threshold(k, bias) as u64;
                        if q < t {
                            break;
                        }
                        output.push(encode_digit((t + (q - t) % (BASE as u64 - t)) as u32));
                        q = (q - t) / (BASE as u64 - t);
                        k += BASE;
                    }

                    output.push(encode_digit(q as u32));
                    bias = adapt(delta, h + 1, h == b);
                    delta = 0;
                    h += 1;
                }
            }

            delta += 1;
            n += 1;
        }

        output
    }

    /// The last delimiter separates basic code points from the encoded part;
    /// without one, the whole input is the encoded part.
    fn decode(&self, input: &str) -> Result<String, TransformError> {
        if !input.is_ascii() {
            return Err(TransformError::invalid_punycode("non-ASCII input"));
        }

        let (basic, encoded) = match input.rfind(DELIMITER) {
            Some(pos) => (&input[..pos], &input[pos + 1..]),
            None => ("", input),
        };

        let mut output: Vec<char> = basic.chars().collect();
        let mut n = INITIAL_N;
        let mut i = 0u32;
        let mut bias = INITIAL_BIAS;
        let mut digits = encoded.chars();

        while !digits.as_str().is_empty() {
            let oldi = i;
            let mut w = 1u32;
            let mut k = BASE;

            loop {
                let c = digits
                    .next()
                    .ok_or_else(|| TransformError::invalid_punycode("truncated input"))?;
                let digit = decode_digit(c)
                    .ok_or_else(|| TransformError::invalid_punycode(format!("invalid punycode digit: '{}'", c)))?;

                i = digit
                    .checked_mul(w)
                    .and_then(|dw| i.checked_add(dw))
                    .ok_or_else(overflow)?;

                let t = threshold(k, bias);
                if digit < t {
                    break;
                }

                w = w.checked_mul(BASE - t).ok_or_else(overflow)?;
                k += BASE;
            }

            let len = output.len() as u32 + 1;
            bias = adapt((i - oldi) as u64, len as u64, oldi == 0);
            n = n.checked_add(i / len).ok_or_else(overflow)?;
            i %= len;

            let ch = char::from_u32(n)
                .ok_or_else(|| TransformError::invalid_punycode(format!("invalid code point: U+{:X}", n)))?;
            output.insert(i as usize, ch);
            i += 1;
        }

        Ok(output.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punycode_known_vectors() {
        assert_eq!(Punycode.encode("bücher"), "bcher-kva");
        assert_eq!(Punycode.decode("bcher-kva").unwrap(), "bücher");
        assert_eq!(Punycode.encode("mañana"), "maana-pta");
        assert_eq!(Punycode.decode("maana-pta").unwrap(), "mañana");
    }

    #[test]
    fn test_punycode_ascii_gets_trailing_delimiter() {
        assert_eq!(Punycode.encode("hello"), "hello-");
        assert_eq!(Punycode.decode("hello-").unwrap(), "hello");
    }

    #[test]
    fn test_punycode_no_basic_code_points() {
        let encoded = Punycode.encode("ü");
        assert!(!encoded.contains('-'));
        assert_eq!(Punycode.decode(&encoded).unwrap(), "ü");
    }

    #[test]
    fn test_punycode_roundtrip_ascii() {
        for original in ["test", "a-b", "Hello, World!", " -- ", "x"] {
            let encoded = Punycode.encode(original);
            assert_eq!(Punycode.decode(&encoded).unwrap(), original, "roundtrip failed for {:?}", original);
        }
    }

    #[test]
    fn test_punycode_roundtrip_unicode() {
        for original in ["München", "日本語", "Ω≈ç√ hi"] {
            let encoded = Punycode.encode(original);
            assert!(encoded.is_ascii());
            assert_eq!(Punycode.decode(&encoded).unwrap(), original);
        }
    }

    #[test]
    fn test_punycode_decode_case_insensitive_digits() {
        assert_eq!(Punycode.decode("bcher-KVA").unwrap(), "bücher");
    }

    #[test]
    fn test_punycode_basic_part_keeps_case() {
        assert_eq!(Punycode.decode("BCHER-kva").unwrap(), "BüCHER");
    }

    #[test]
    fn test_punycode_invalid() {
        assert_eq!(Punycode.decode("bcher-kv!").unwrap_err().to_string(), "Invalid Punycode Input");
        assert_eq!(Punycode.decode("bücher").unwrap_err().to_string(), "Invalid Punycode Input");
        // last digit not below threshold, number never terminates
        assert_eq!(Punycode.decode("abc-z").unwrap_err().to_string(), "Invalid Punycode Input");
    }

    #[test]
    fn test_punycode_empty() {
        assert_eq!(Punycode.encode(""), "");
        assert_eq!(Punycode.decode("").unwrap(), "");
    }
}

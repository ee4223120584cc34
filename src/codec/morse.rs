use std::sync::OnceLock;

use super::util::{self, CodeTable, ReverseCodeTable};
use super::Codec;
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (' ', "/"),
];

fn morse_table() -> &'static CodeTable {
    static TABLE: OnceLock<CodeTable> = OnceLock::new();
    TABLE.get_or_init(|| util::forward_table(MORSE_TABLE))
}

fn reverse_morse_table() -> &'static ReverseCodeTable {
    static TABLE: OnceLock<ReverseCodeTable> = OnceLock::new();
    TABLE.get_or_init(|| util::reverse_table(MORSE_TABLE))
}

pub struct Morse;

impl Codec for Morse {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "morse",
            alphabet: ".-/ ",
            case_sensitivity: CaseSensitivity::Insensitive,
            fallible: false,
            description: "International Morse code, space separated, '/' for space",
        }
    }

    fn encode(&self, input: &str) -> String {
        util::encode_with_table(input, morse_table())
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        Ok(util::decode_with_table(input, reverse_morse_table()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morse_encode() {
        assert_eq!(Morse.encode("SOS"), "... --- ...");
        assert_eq!(Morse.encode("HELLO"), ".... . .-.. .-.. ---");
    }

    #[test]
    fn test_morse_decode() {
        assert_eq!(Morse.decode("... --- ...").unwrap(), "SOS");
        assert_eq!(Morse.decode(".... . .-.. .-.. ---").unwrap(), "HELLO");
    }

    #[test]
    fn test_morse_with_spaces() {
        let encoded = Morse.encode("A B");
        assert_eq!(encoded, ".- / -...");
        assert_eq!(Morse.decode(&encoded).unwrap(), "A B");
    }

    #[test]
    fn test_morse_case_insensitive() {
        assert_eq!(Morse.encode("hello"), Morse.encode("HELLO"));
    }

    #[test]
    fn test_morse_unmapped() {
        assert_eq!(Morse.encode("HI!"), ".... .. ?");
        assert_eq!(Morse.decode(".- .-.-.- -").unwrap(), "A?T");
    }

    #[test]
    fn test_morse_digits_roundtrip() {
        let digits = "0123456789";
        assert_eq!(Morse.decode(&Morse.encode(digits)).unwrap(), digits);
    }

    #[test]
    fn test_morse_alphabet_roundtrip() {
        let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
        assert_eq!(Morse.decode(&Morse.encode(text)).unwrap(), text);
    }

    #[test]
    fn test_morse_empty() {
        assert_eq!(Morse.encode(""), "");
        assert_eq!(Morse.decode("").unwrap(), "");
        assert_eq!(Morse.decode("   ").unwrap(), "");
    }
}

use std::sync::OnceLock;

use super::util::{self, CodeTable, ReverseCodeTable};
use super::Codec;
use crate::error::TransformError;
use crate::types::{CaseSensitivity, CodecMeta};

// Six-dot cells written as dots 1-6 in order. Digits reuse the cells of
// A-J without a number sign, so they collide with those letters.
const BRAILLE_TABLE: &[(char, &str)] = &[
    ('A', "100000"),
    ('B', "101000"),
    ('C', "110000"),
    ('D', "110100"),
    ('E', "100100"),
    ('F', "111000"),
    ('G', "111100"),
    ('H', "101100"),
    ('I', "011000"),
    ('J', "011100"),
    ('K', "100010"),
    ('L', "101010"),
    ('M', "110010"),
    ('N', "110110"),
    ('O', "100110"),
    ('P', "111010"),
    ('Q', "111110"),
    ('R', "101110"),
    ('S', "011010"),
    ('T', "011110"),
    ('U', "100011"),
    ('V', "101011"),
    ('W', "011101"),
    ('X', "110011"),
    ('Y', "110111"),
    ('Z', "100111"),
    ('1', "100000"),
    ('2', "101000"),
    ('3', "110000"),
    ('4', "110100"),
    ('5', "100100"),
    ('6', "111000"),
    ('7', "111100"),
    ('8', "101100"),
    ('9', "011000"),
    ('0', "011100"),
    (' ', "000000"),
];

fn braille_table() -> &'static CodeTable {
    static TABLE: OnceLock<CodeTable> = OnceLock::new();
    TABLE.get_or_init(|| util::forward_table(BRAILLE_TABLE))
}

/// Digits are inserted after A-J, so the shared cells decode to digits.
fn reverse_braille_table() -> &'static ReverseCodeTable {
    static TABLE: OnceLock<ReverseCodeTable> = OnceLock::new();
    TABLE.get_or_init(|| util::reverse_table(BRAILLE_TABLE))
}

pub struct Braille;

impl Codec for Braille {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "braille",
            alphabet: "01 ",
            case_sensitivity: CaseSensitivity::Insensitive,
            fallible: false,
            description: "Six-dot Braille cells as 0/1 patterns, space separated",
        }
    }

    fn encode(&self, input: &str) -> String {
        util::encode_with_table(input, braille_table())
    }

    fn decode(&self, input: &str) -> Result<String, TransformError> {
        Ok(util::decode_with_table(input, reverse_braille_table()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_encode() {
        assert_eq!(Braille.encode("A"), "100000");
        assert_eq!(Braille.encode("abc"), "100000 101000 110000");
        assert_eq!(Braille.encode("k z"), "100010 000000 100111");
    }

    #[test]
    fn test_braille_letter_digit_share_cell() {
        assert_eq!(Braille.encode("A"), Braille.encode("1"));
        assert_eq!(Braille.encode("J"), Braille.encode("0"));
    }

    #[test]
    fn test_braille_shared_cell_decodes_to_digit() {
        assert_eq!(Braille.decode("100000").unwrap(), "1");
        assert_eq!(Braille.decode("011100").unwrap(), "0");
        assert_eq!(Braille.decode("110100 100100 110110").unwrap(), "45N");
    }

    #[test]
    fn test_braille_roundtrip_outside_collisions() {
        let text = "KLMNOP QRSTUVWXYZ 1234567890";
        assert_eq!(Braille.decode(&Braille.encode(text)).unwrap(), text);
    }

    #[test]
    fn test_braille_unmapped() {
        assert_eq!(Braille.encode("k!"), "100010 ?");
        assert_eq!(Braille.decode("111111 100010").unwrap(), "?K");
    }

    #[test]
    fn test_braille_empty() {
        assert_eq!(Braille.encode(""), "");
        assert_eq!(Braille.decode("").unwrap(), "");
    }
}

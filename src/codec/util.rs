use std::collections::HashMap;

/// Placeholder for characters or tokens missing from a code table.
pub const UNKNOWN: char = '?';

pub type CodeTable = HashMap<char, &'static str>;
pub type ReverseCodeTable = HashMap<&'static str, char>;

pub fn forward_table(pairs: &[(char, &'static str)]) -> CodeTable {
    pairs.iter().copied().collect()
}

/// Inverts a code table. Pairs are inserted in slice order, so when two
/// characters share a code the later one wins.
pub fn reverse_table(pairs: &[(char, &'static str)]) -> ReverseCodeTable {
    pairs.iter().map(|&(ch, code)| (code, ch)).collect()
}

/// Uppercases a character only when the result is a single character;
/// expansions such as `ß` -> `SS` yield `None`.
pub fn single_uppercase(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

pub fn encode_with_table(input: &str, table: &CodeTable) -> String {
    input
        .chars()
        .map(|ch| {
            single_uppercase(ch)
                .and_then(|up| table.get(&up).copied())
                .unwrap_or("?")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn decode_with_table(input: &str, table: &ReverseCodeTable) -> String {
    input
        .split_whitespace()
        .map(|code| table.get(code).copied().unwrap_or(UNKNOWN))
        .collect()
}

/// Parses one integer literal in `radix` (2 or 8). Accepts an optional sign,
/// the matching `0b`/`0o` prefix, and single underscores between digits.
fn parse_radix_token(token: &str, radix: u32) -> Result<i64, String> {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let prefix = match radix {
        2 => Some('b'),
        8 => Some('o'),
        _ => None,
    };
    let digits = match (prefix, unsigned.get(..2)) {
        (Some(p), Some(head)) if head.eq_ignore_ascii_case(&format!("0{}", p)) => {
            let rest = &unsigned[2..];
            rest.strip_prefix('_').unwrap_or(rest)
        }
        _ => unsigned,
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c == '_' || c.is_digit(radix));
    if !well_formed {
        return Err("invalid digit".to_string());
    }

    let plain: String = digits.chars().filter(|&c| c != '_').collect();
    let value = i64::from_str_radix(&plain, radix).map_err(|e| e.to_string())?;
    Ok(if negative { -value } else { value })
}

/// Parses whitespace-separated code points in the given radix.
/// The error carries a description of the offending token.
pub fn parse_code_points(input: &str, radix: u32) -> Result<String, String> {
    input
        .split_whitespace()
        .map(|token| {
            let value = parse_radix_token(token, radix).map_err(|e| format!("'{}': {}", token, e))?;
            u32::try_from(value)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| format!("'{}': not a Unicode scalar value", token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: &[(char, &str)] = &[('A', "1"), ('B', "2"), ('C', "1")];

    #[test]
    fn test_reverse_table_last_wins() {
        let rev = reverse_table(PAIRS);
        assert_eq!(rev.get("1"), Some(&'C'));
        assert_eq!(rev.get("2"), Some(&'B'));
    }

    #[test]
    fn test_single_uppercase() {
        assert_eq!(single_uppercase('a'), Some('A'));
        assert_eq!(single_uppercase('7'), Some('7'));
        assert_eq!(single_uppercase('ß'), None);
    }

    #[test]
    fn test_encode_with_table_unknown() {
        let table = forward_table(PAIRS);
        assert_eq!(encode_with_table("ab!", &table), "1 2 ?");
        assert_eq!(encode_with_table("", &table), "");
    }

    #[test]
    fn test_decode_with_table_whitespace_runs() {
        let rev = reverse_table(PAIRS);
        assert_eq!(decode_with_table("  2   2\t9 ", &rev), "BB?");
    }

    #[test]
    fn test_parse_code_points() {
        assert_eq!(parse_code_points("1000001 1000010", 2).unwrap(), "AB");
        assert_eq!(parse_code_points("", 2).unwrap(), "");
        assert!(parse_code_points("12", 2).is_err());
        assert!(parse_code_points("1101100000000000", 2).is_err()); // U+D800
    }

    #[test]
    fn test_parse_code_points_integer_literals() {
        assert_eq!(parse_code_points("0b1000001 0B1000010", 2).unwrap(), "AB");
        assert_eq!(parse_code_points("0o101 0O102", 8).unwrap(), "AB");
        assert_eq!(parse_code_points("100_0001 0b_100_0010", 2).unwrap(), "AB");
        assert_eq!(parse_code_points("+101 -0", 8).unwrap(), "A\0");
    }

    #[test]
    fn test_parse_code_points_rejects_malformed_literals() {
        for token in ["-101", "_101", "101_", "1__01", "0o", "0b_", "0o101", "++1", "+-1"] {
            assert!(parse_code_points(token, 2).is_err(), "{} should fail", token);
        }
        assert!(parse_code_points("0b101", 8).is_err());
    }
}

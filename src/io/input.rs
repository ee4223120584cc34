use std::fs;
use std::io::{self, Read};

use textcodec::error::{Result, TextcodecError};
use textcodec::types::InputSource;

/// Reads the input as text. One trailing newline is dropped from stdin and
/// file input; literal arguments are taken as given.
pub fn read_input(source: &InputSource) -> Result<String> {
    let data = match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
        InputSource::File(path) => fs::read(path)?,
        InputSource::Literal(text) => return Ok(text.clone()),
    };

    let mut text = String::from_utf8(data).map_err(|_| TextcodecError::invalid_input("input is not valid UTF-8"))?;
    strip_trailing_newline(&mut text);
    Ok(text)
}

fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        let mut s = "SOS\n".to_string();
        strip_trailing_newline(&mut s);
        assert_eq!(s, "SOS");

        let mut s = "SOS\r\n".to_string();
        strip_trailing_newline(&mut s);
        assert_eq!(s, "SOS");

        let mut s = "SOS\n\n".to_string();
        strip_trailing_newline(&mut s);
        assert_eq!(s, "SOS\n");
    }

    #[test]
    fn test_literal_input_untouched() {
        let text = read_input(&InputSource::Literal("hi\n".into())).unwrap();
        assert_eq!(text, "hi\n");
    }
}

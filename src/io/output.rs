use std::fs::File;
use std::io::{self, Write};

use textcodec::error::Result;
use textcodec::types::OutputDest;

/// Writes the text, followed by a newline when going to stdout.
pub fn write_output(text: &str, dest: &OutputDest) -> Result<()> {
    match dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
        }
        OutputDest::Stdout => {
            let mut handle = io::stdout().lock();
            handle.write_all(text.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

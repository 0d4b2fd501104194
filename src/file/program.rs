use crate::error;
use crate::lang::{decode_line, CodePage, Decoded, Error, Line};

/// First byte of an unprotected saved program. Protected saves start with
/// 0xFE and are encrypted; they are rejected like any other header.
const UNPROTECTED: u8 = 0xFF;

/// A fully decoded program: the ordered lines of the saved file.
///
/// Decoding is a single pass over an in-memory buffer and either yields
/// every line or fails with the first structural error; no partial
/// program is ever returned.
#[derive(Debug)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn from_bytes(bytes: &[u8], charset: &CodePage) -> Result<Program, Error> {
        match bytes.first() {
            Some(&UNPROTECTED) => {}
            _ => return Err(error!(InvalidHeader)),
        }
        let mut lines: Vec<Line> = Vec::new();
        let mut pos = 1;
        while pos < bytes.len() {
            match decode_line(bytes, pos, charset)? {
                Decoded::Line(line, consumed) => {
                    lines.push(line);
                    pos += consumed;
                }
                // The zero pair ends the program; anything after it, such
                // as the 0x1A end-of-file padding, is never read.
                Decoded::End => break,
            }
        }
        Ok(Program { lines })
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut sep = "";
        for line in &self.lines {
            write!(f, "{}{}", sep, line)?;
            sep = "\n";
        }
        Ok(())
    }
}

use super::charset::CodePage;
use super::float;
use super::token;
use super::{Error, ErrorCode, LineNumber};

const TERMINATOR: u8 = 0x00;
const QUOTE: u8 = 0x22;
const REM: u8 = 0x8F;
/// How `'` comments are stored: a colon, the `REM` token, and the
/// apostrophe token. Listed back as the apostrophe alone.
const APOSTROPHE: [u8; 3] = [0x3A, 0x8F, 0xD9];

/// One decoded element of a line, in source order. Concatenating the
/// `Display` forms of a line's elements reconstructs its text.
#[derive(Debug, PartialEq, Clone)]
pub enum Element {
    Literal(char),
    Keyword(&'static str),
    Integer(i32),
    Numeral(String),
    Quote,
    Rem,
    RemQuote,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Element::*;
        match self {
            Literal(c) => write!(f, "{}", c),
            Keyword(s) => write!(f, "{}", s),
            Integer(n) => write!(f, "{}", n),
            Numeral(s) => write!(f, "{}", s),
            Quote => write!(f, "\""),
            Rem => write!(f, "REM"),
            RemQuote => write!(f, "'"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Line {
    number: u16,
    elements: Vec<Element>,
}

impl Line {
    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text: String = self.elements.iter().map(|e| e.to_string()).collect();
        write!(f, "{:>5} {}", self.number, text)
    }
}

#[derive(Debug)]
pub(crate) enum Decoded {
    /// A line and the byte count its record occupied, terminator included.
    Line(Line, usize),
    /// A zero next-line-address pair: nothing follows.
    End,
}

/// Decode the line record beginning at `start`. Consumption is strictly
/// left to right in a single pass; no byte is read twice.
pub(crate) fn decode(bytes: &[u8], start: usize, charset: &CodePage) -> Result<Decoded, Error> {
    LineDecoder {
        bytes,
        charset,
        start,
        pos: start,
        line_number: None,
        inside_quotes: false,
        inside_rem: false,
        elements: Vec::new(),
    }
    .run()
}

struct LineDecoder<'a> {
    bytes: &'a [u8],
    charset: &'a CodePage,
    start: usize,
    pos: usize,
    line_number: LineNumber,
    inside_quotes: bool,
    inside_rem: bool,
    elements: Vec<Element>,
}

impl<'a> LineDecoder<'a> {
    fn run(mut self) -> Result<Decoded, Error> {
        // The next-line address is a relocation artifact and is dead data
        // here, except that a zero pair marks the end of the program.
        if self.take_u16()? == 0 {
            return Ok(Decoded::End);
        }
        let number = self.take_u16()?;
        self.line_number = Some(number);
        loop {
            let code = self.peek()?;
            if code == TERMINATOR {
                self.pos += 1;
                break;
            }
            self.step(code)?;
        }
        let consumed = self.pos - self.start;
        Ok(Decoded::Line(
            Line {
                number,
                elements: self.elements,
            },
            consumed,
        ))
    }

    fn step(&mut self, code: u8) -> Result<(), Error> {
        if code == QUOTE && !self.inside_rem {
            // No escape exists; CHR$(34) was the only way to print a quote.
            self.inside_quotes = !self.inside_quotes;
            self.elements.push(Element::Quote);
            self.pos += 1;
            return Ok(());
        }
        if !self.inside_quotes
            && !self.inside_rem
            && self.bytes.get(self.pos..self.pos + 3) == Some(&APOSTROPHE[..])
        {
            self.inside_rem = true;
            self.elements.push(Element::RemQuote);
            self.pos += 3;
            return Ok(());
        }
        if self.inside_quotes || self.inside_rem || (0x20..=0x7E).contains(&code) {
            self.elements.push(Element::Literal(self.charset.decode(code)));
            self.pos += 1;
            return Ok(());
        }
        match code {
            REM => {
                // A comment never ends inside a line.
                self.inside_rem = true;
                self.elements.push(Element::Rem);
                self.pos += 1;
            }
            0x0B => {
                let value = self.take_field()?;
                self.elements.push(Element::Numeral(format!("&O{:o}", value)));
            }
            0x0C => {
                let value = self.take_field()?;
                self.elements.push(Element::Numeral(format!("&H{:X}", value)));
            }
            // Line pointers replace line-number references in memory only;
            // a saved program must not contain them.
            0x0D => return Err(self.fail(ErrorCode::FormatViolation)),
            0x0E => {
                let value = self.take_field()?;
                self.elements.push(Element::Integer(i32::from(value)));
            }
            0x0F => {
                self.pos += 1;
                let value = self.take_byte()?;
                self.elements.push(Element::Integer(i32::from(value)));
            }
            0x10 => return Err(self.fail(ErrorCode::FormatViolation)),
            0x11..=0x1B => {
                self.elements.push(Element::Integer(i32::from(code - 0x11)));
                self.pos += 1;
            }
            0x1C => {
                let value = self.take_field()? as i16;
                self.elements.push(Element::Integer(i32::from(value)));
            }
            0x1D => {
                self.pos += 1;
                let w = self.take(4)?;
                let text = float::decode_single([w[0], w[1], w[2], w[3]]);
                self.elements.push(Element::Numeral(text));
            }
            0x1E => return Err(self.fail(ErrorCode::FormatViolation)),
            0x1F => {
                self.pos += 1;
                let w = self.take(8)?;
                let text = float::decode_double([w[0], w[1], w[2], w[3], w[4], w[5], w[6], w[7]]);
                self.elements.push(Element::Numeral(text));
            }
            _ => {
                if let Some(keyword) = token::lookup(code) {
                    self.elements.push(Element::Keyword(keyword));
                    self.pos += 1;
                    return Ok(());
                }
                let pair = u16::from(code) << 8 | u16::from(self.byte_at(self.pos + 1)?);
                match token::lookup2(pair) {
                    Some(keyword) => {
                        self.elements.push(Element::Keyword(keyword));
                        self.pos += 2;
                    }
                    None => {
                        return Err(self.fail(ErrorCode::UnrecognizedToken).with_token(code))
                    }
                }
            }
        }
        Ok(())
    }

    fn byte_at(&self, pos: usize) -> Result<u8, Error> {
        match self.bytes.get(pos) {
            Some(&byte) => Ok(byte),
            None => Err(self.fail(ErrorCode::UnexpectedEndOfFile)),
        }
    }

    fn peek(&self) -> Result<u8, Error> {
        self.byte_at(self.pos)
    }

    fn take_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        match self.bytes.get(self.pos..self.pos + len) {
            Some(window) => {
                self.pos += len;
                Ok(window)
            }
            None => Err(self.fail(ErrorCode::UnexpectedEndOfFile)),
        }
    }

    fn take_u16(&mut self) -> Result<u16, Error> {
        let w = self.take(2)?;
        Ok(u16::from(w[0]) | u16::from(w[1]) << 8)
    }

    // A structural code byte followed by a two-byte little-endian payload.
    fn take_field(&mut self) -> Result<u16, Error> {
        self.pos += 1;
        self.take_u16()
    }

    fn fail(&self, code: ErrorCode) -> Error {
        let error = Error::new(code).at_byte(self.pos);
        match self.line_number {
            Some(_) => error.in_line_number(self.line_number),
            None => error,
        }
    }
}

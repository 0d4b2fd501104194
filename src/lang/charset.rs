//! Byte-to-character decoding for string and comment text.
//!
//! The machine displayed one 8-bit byte per glyph; which glyph depends on
//! the code page the machine ran. The low half is ASCII on every page, so
//! only the high half is tabulated. Tokenized programs store string and
//! comment bytes verbatim, so the caller picks the page the program was
//! written under.

pub struct CodePage {
    name: &'static str,
    high: Option<&'static [char; 128]>,
}

impl CodePage {
    pub fn from_name(name: &str) -> Option<&'static CodePage> {
        match name.to_ascii_lowercase().as_str() {
            "437" | "cp437" | "ibm437" => Some(&CP437),
            "8859-1" | "iso-8859-1" | "latin1" => Some(&LATIN1),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn decode(&self, byte: u8) -> char {
        match self.high {
            Some(table) if byte >= 0x80 => table[usize::from(byte) - 0x80],
            _ => char::from(byte),
        }
    }
}

/// IBM PC code page 437, the display set GW-BASIC machines shipped with.
pub static CP437: CodePage = CodePage {
    name: "437",
    high: Some(&CP437_HIGH),
};

/// ISO-8859-1; bytes map straight to the first 256 code points.
pub static LATIN1: CodePage = CodePage {
    name: "8859-1",
    high: None,
};

#[rustfmt::skip]
static CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{A0}',
];

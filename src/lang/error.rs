use super::LineNumber;

pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    offset: Option<usize>,
    token: Option<u8>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$offset:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_byte($offset)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr, ..$offset:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .at_byte($offset)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            offset: None,
            token: None,
        }
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: line,
            offset: self.offset,
            token: self.token,
        }
    }

    pub fn at_byte(&self, offset: usize) -> Error {
        debug_assert!(self.offset.is_none());
        Error {
            code: self.code,
            line_number: self.line_number,
            offset: Some(offset),
            token: self.token,
        }
    }

    pub fn with_token(&self, token: u8) -> Error {
        debug_assert!(self.token.is_none());
        Error {
            code: self.code,
            line_number: self.line_number,
            offset: self.offset,
            token: Some(token),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn token(&self) -> Option<u8> {
        self.token
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    InvalidHeader,
    UnexpectedEndOfFile,
    FormatViolation,
    UnrecognizedToken,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::InvalidHeader => "INVALID HEADER",
            ErrorCode::UnexpectedEndOfFile => "UNEXPECTED END OF FILE",
            ErrorCode::FormatViolation => "FORMAT VIOLATION",
            ErrorCode::UnrecognizedToken => "UNRECOGNIZED TOKEN",
        };
        let mut suffix = String::new();
        if let Some(token) = self.token {
            suffix.push_str(&format!(" &H{:02X}", token));
        }
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if let Some(offset) = self.offset {
            suffix.push_str(&format!(" AT BYTE {}", offset));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}

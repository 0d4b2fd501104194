//! # GW-BASIC Listing Decoder
//!
//! Decodes tokenized GW-BASIC program files, as written by the `SAVE`
//! command, into the text listing that `LIST` would have printed.
//!
//! ```text
//! $ gwlist GAME.BAS
//!    10 CLS: KEY OFF
//!    20 PRINT "WELCOME TO THE CAVE OF RICHES"
//! ```
//!
//! Programs saved with `SAVE "FILE",A` are already plain text and need no
//! decoding. Protected saves (`SAVE "FILE",P`) are encrypted and not
//! supported.
//!
//! ```
//! use gwbasic::file::Program;
//! use gwbasic::lang::CP437;
//!
//! // 10 PRINT "HI"
//! let bytes = [
//!     0xFF, 0x1E, 0x08, 0x0A, 0x00, 0x91, 0x20, 0x22, 0x48, 0x49, 0x22,
//!     0x00, 0x00, 0x00, 0x1A,
//! ];
//! let program = Program::from_bytes(&bytes, &CP437).unwrap();
//! assert_eq!(program.to_string(), "   10 PRINT \"HI\"");
//! ```

pub mod file;
pub mod lang;

/*!
## Rust File Module

This Rust module decodes whole saved-program files into ordered line
listings.

*/

mod program;

pub use program::Program;

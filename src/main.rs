//! # GWLIST
//!
//! Prints the listing of a tokenized GW-BASIC program file.
//!

extern crate ansi_term;
extern crate clap;

use ansi_term::Style;
use clap::{App, Arg};
use gwbasic::file::Program;
use gwbasic::lang::CodePage;

fn main() {
    let args = App::new("gwlist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decodes tokenized GW-BASIC saved programs into text listings")
        .arg(
            Arg::with_name("encoding")
                .short("e")
                .long("encoding")
                .help("Code page for string and comment text (437, 8859-1)")
                .value_name("NAME")
                .default_value("437"),
        )
        .arg(
            Arg::with_name("file")
                .help("Tokenized program file, as written by SAVE")
                .value_name("FILE")
                .required(true)
                .index(1),
        )
        .get_matches();

    let name = args.value_of("encoding").unwrap();
    let charset = match CodePage::from_name(name) {
        Some(charset) => charset,
        None => fail(&format!("UNKNOWN ENCODING {}", name)),
    };
    let path = args.value_of("file").unwrap();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => fail(&format!("{}: {}", path, error)),
    };
    match Program::from_bytes(&bytes, charset) {
        Ok(program) => {
            for line in program.lines() {
                println!("{}", line);
            }
        }
        Err(error) => fail(&error.to_string()),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", Style::new().bold().paint(message));
    std::process::exit(1);
}

use super::super::charset::CP437;
use super::super::line::{decode, Decoded, Element};
use super::super::ErrorCode;

fn record(content: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x30, 0x08, 0x0A, 0x00];
    bytes.extend_from_slice(content);
    bytes.push(0x00);
    bytes
}

fn elements(content: &[u8]) -> Vec<Element> {
    match decode(&record(content), 0, &CP437).unwrap() {
        Decoded::Line(line, consumed) => {
            assert_eq!(consumed, content.len() + 5);
            line.elements().to_vec()
        }
        Decoded::End => panic!("unexpected end of program"),
    }
}

#[test]
fn test_end_of_program() {
    match decode(&[0x00, 0x00], 0, &CP437).unwrap() {
        Decoded::End => {}
        Decoded::Line(..) => panic!("expected end of program"),
    }
}

#[test]
fn test_number_and_consumed() {
    // Dead pointer, line 10, PRINT, terminator.
    let bytes = [0x30, 0x08, 0x0A, 0x00, 0x91, 0x00];
    match decode(&bytes, 0, &CP437).unwrap() {
        Decoded::Line(line, consumed) => {
            assert_eq!(line.number(), 10);
            assert_eq!(consumed, 6);
            assert_eq!(line.elements(), [Element::Keyword("PRINT")]);
        }
        Decoded::End => panic!("unexpected end of program"),
    }
}

#[test]
fn test_offset_start() {
    let mut bytes = vec![0xFF, 0x55];
    bytes.extend_from_slice(&record(&[0x91]));
    match decode(&bytes, 2, &CP437).unwrap() {
        Decoded::Line(line, consumed) => {
            assert_eq!(line.number(), 10);
            assert_eq!(consumed, 6);
        }
        Decoded::End => panic!("unexpected end of program"),
    }
}

#[test]
fn test_quote_toggle() {
    // Token bytes between quotes are string text, not tokens.
    assert_eq!(
        elements(&[0x22, 0x91, 0x22]),
        [Element::Quote, Element::Literal('æ'), Element::Quote]
    );
}

#[test]
fn test_rem_is_monotonic() {
    // Everything after REM is literal text, structural codes included.
    assert_eq!(
        elements(&[0x8F, 0x20, 0x0B, 0x91]),
        [
            Element::Rem,
            Element::Literal(' '),
            Element::Literal('\u{B}'),
            Element::Literal('æ'),
        ]
    );
}

#[test]
fn test_apostrophe_alias() {
    assert_eq!(
        elements(&[0x3A, 0x8F, 0xD9, 0x48, 0x49]),
        [Element::RemQuote, Element::Literal('H'), Element::Literal('I')]
    );
}

#[test]
fn test_colon_without_alias() {
    // A bare colon is just a statement separator.
    assert_eq!(
        elements(&[0x41, 0x3A, 0x42]),
        [
            Element::Literal('A'),
            Element::Literal(':'),
            Element::Literal('B'),
        ]
    );
}

#[test]
fn test_small_integers() {
    for k in 0..=10u8 {
        assert_eq!(elements(&[0x11 + k]), [Element::Integer(i32::from(k))]);
    }
}

#[test]
fn test_octal_and_hex() {
    assert_eq!(
        elements(&[0x0B, 0x08, 0x00]),
        [Element::Numeral("&O10".to_string())]
    );
    assert_eq!(
        elements(&[0x0B, 0x00, 0x00]),
        [Element::Numeral("&O0".to_string())]
    );
    assert_eq!(
        elements(&[0x0C, 0xFF, 0x00]),
        [Element::Numeral("&HFF".to_string())]
    );
}

#[test]
fn test_integer_constants() {
    assert_eq!(elements(&[0x0E, 0x39, 0x30]), [Element::Integer(12345)]);
    assert_eq!(elements(&[0x0F, 0xFF]), [Element::Integer(255)]);
    assert_eq!(elements(&[0x1C, 0xD2, 0x04]), [Element::Integer(1234)]);
    assert_eq!(elements(&[0x1C, 0xFF, 0xFF]), [Element::Integer(-1)]);
}

#[test]
fn test_token_lookup_order() {
    // 0xD9 means apostrophe on its own; 0xFF is only a two-byte prefix.
    assert_eq!(elements(&[0xD9]), [Element::Keyword("'")]);
    assert_eq!(elements(&[0xFF, 0x81]), [Element::Keyword("LEFT$")]);
}

#[test]
fn test_truncated_numeric_field() {
    // Record cut off inside a single constant: no terminator, 2 of the
    // required 4 mantissa/exponent bytes.
    let bytes = [0x30, 0x08, 0x0A, 0x00, 0x1D, 0x00, 0x00];
    let error = decode(&bytes, 0, &CP437).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnexpectedEndOfFile);
    assert_eq!(error.line_number(), Some(10));
    assert_eq!(error.offset(), Some(5));
}

#[test]
fn test_truncated_header() {
    let error = decode(&[0x30], 0, &CP437).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnexpectedEndOfFile);
    assert_eq!(error.line_number(), None);
    assert_eq!(error.offset(), Some(0));
}

#[test]
fn test_reserved_codes() {
    for &code in &[0x0Du8, 0x10, 0x1E] {
        let error = decode(&record(&[code]), 0, &CP437).unwrap_err();
        assert_eq!(error.code(), ErrorCode::FormatViolation);
        assert_eq!(error.line_number(), Some(10));
    }
}

#[test]
fn test_unrecognized_token() {
    let error = decode(&record(&[0xF5, 0x41]), 0, &CP437).unwrap_err();
    assert_eq!(error.code(), ErrorCode::UnrecognizedToken);
    assert_eq!(error.token(), Some(0xF5));
    assert_eq!(error.line_number(), Some(10));
}

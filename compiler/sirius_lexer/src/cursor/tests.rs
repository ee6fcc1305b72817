use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_n_moves_multiple() {
    let mut cursor = Cursor::new("abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_never_moves_past_end() {
    let mut cursor = Cursor::new("hi");
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek_n(2), b'c');
}

#[test]
fn reads_past_end_return_zero() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek_n(7), 0);
    cursor.advance();
    assert_eq!(cursor.current(), 0);
}

// === Boundaries ===

#[test]
fn is_eof_on_empty_source() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert!(cursor.at_boundary());
}

#[test]
fn interior_null_is_boundary_but_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    assert!(cursor.at_boundary());
}

#[test]
fn control_z_is_boundary() {
    let cursor = Cursor::new("\u{1A}rest");
    assert!(!cursor.is_eof());
    assert!(cursor.at_boundary());
}

// === Positioning ===

#[test]
fn at_clamps_past_end() {
    let cursor = Cursor::at("abc", 99);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn at_snaps_back_to_char_boundary() {
    // 'λ' is two bytes (CE BB); offset 2 lands inside it.
    let cursor = Cursor::at("aλb", 2);
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.remaining(), "λb");
}

// === Multi-byte characters ===

#[test]
fn utf8_char_width_by_lead_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xCE), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
}

#[test]
fn advance_char_skips_whole_code_point() {
    let mut cursor = Cursor::new("😀x");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.slice_from(0), "😀");
}

// === Predicates ===

#[test]
fn eat_while_stops_at_end() {
    let mut cursor = Cursor::new("12345");
    assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), 5);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_stops_at_first_rejected_byte() {
    let mut cursor = Cursor::new("abc123");
    assert_eq!(cursor.eat_while(|b| b.is_ascii_alphabetic()), 3);
    assert_eq!(cursor.current(), b'1');
}

#[test]
fn count_while_does_not_move() {
    let cursor = Cursor::new("007.5");
    assert_eq!(cursor.count_while(|b| b.is_ascii_digit()), 3);
    assert_eq!(cursor.pos(), 0);
}

// === String delimiters ===

#[test]
fn skip_to_string_delim_finds_quote() {
    let mut cursor = Cursor::new("hello\" tail");
    let (delim, skipped) = cursor.skip_to_string_delim();
    assert_eq!(delim, b'"');
    assert_eq!(skipped, "hello");
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_string_delim_finds_backslash_first() {
    let mut cursor = Cursor::new("a\\\"b\"");
    let (delim, skipped) = cursor.skip_to_string_delim();
    assert_eq!(delim, b'\\');
    assert_eq!(skipped, "a");
}

#[test]
fn skip_to_string_delim_runs_to_end() {
    let mut cursor = Cursor::new("no closing quote");
    let (delim, skipped) = cursor.skip_to_string_delim();
    assert_eq!(delim, 0);
    assert_eq!(skipped, "no closing quote");
    assert!(cursor.is_eof());
}

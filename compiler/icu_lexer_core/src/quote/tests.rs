use super::scan_quote;
use crate::{Cursor, ScanState, Tag};

#[test]
fn doubled_apostrophe_is_one_literal() {
    let mut cursor = Cursor::new("''x");
    let mut state = ScanState::new();
    assert_eq!(scan_quote(&mut cursor, &mut state), Tag::String);
    assert_eq!(cursor.pos(), 2);
    assert!(!state.in_quote());
}

#[test]
fn lone_apostrophe_opens_literal() {
    let mut cursor = Cursor::new("'{x}'");
    let mut state = ScanState::new();
    assert_eq!(scan_quote(&mut cursor, &mut state), Tag::String);
    assert_eq!(cursor.pos(), 1);
    assert!(state.in_quote());
}

#[test]
fn literal_body_runs_through_closing_quote() {
    let mut cursor = Cursor::new("'{x}' tail");
    let mut state = ScanState::new();
    scan_quote(&mut cursor, &mut state);
    assert_eq!(scan_quote(&mut cursor, &mut state), Tag::String);
    assert_eq!(cursor.slice_from(1), "{x}'");
    assert!(!state.in_quote());
    assert_eq!(cursor.rest(), " tail");
}

#[test]
fn unterminated_literal_consumes_line_and_stays_open() {
    let mut cursor = Cursor::new("'don");
    let mut state = ScanState::new();
    scan_quote(&mut cursor, &mut state);
    assert_eq!(scan_quote(&mut cursor, &mut state), Tag::String);
    assert!(cursor.is_eof());
    assert!(state.in_quote());
}

#[test]
fn open_literal_closes_on_next_line() {
    let mut state = ScanState {
        in_quote: true,
        ..ScanState::default()
    };
    let mut cursor = Cursor::new("t stop' after");
    assert_eq!(scan_quote(&mut cursor, &mut state), Tag::String);
    assert_eq!(cursor.slice_from(0), "t stop'");
    assert!(!state.in_quote());
}

#[test]
fn closing_quote_at_line_start_consumes_one_byte() {
    let mut state = ScanState {
        in_quote: true,
        ..ScanState::default()
    };
    let mut cursor = Cursor::new("'rest");
    scan_quote(&mut cursor, &mut state);
    assert_eq!(cursor.pos(), 1);
    assert!(!state.in_quote());
}

#[test]
fn quote_state_ignores_braces() {
    let mut state = ScanState {
        in_quote: true,
        ..ScanState::default()
    };
    let mut cursor = Cursor::new("{{}}");
    scan_quote(&mut cursor, &mut state);
    assert_eq!(state.depth(), 0);
    assert!(cursor.is_eof());
}

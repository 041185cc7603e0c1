use super::*;

// === Identifiers & digits ===

#[test]
fn ident_len_matches_word_run() {
    assert_eq!(ident_len("count, plural"), 5);
    assert_eq!(ident_len("_private1}"), 9);
    assert_eq!(ident_len("x"), 1);
}

#[test]
fn ident_len_rejects_leading_digit_and_symbols() {
    assert_eq!(ident_len("1abc"), 0);
    assert_eq!(ident_len("#"), 0);
    assert_eq!(ident_len(""), 0);
}

#[test]
fn ident_len_stops_at_non_ascii() {
    assert_eq!(ident_len("caféx"), 3);
}

#[test]
fn digits_len_counts_ascii_digits() {
    assert_eq!(digits_len("123 items"), 3);
    assert_eq!(digits_len("items"), 0);
    assert_eq!(digits_len("٣"), 0);
}

// === Vocabularies ===

#[test]
fn every_type_keyword_matches_itself() {
    for kw in TYPE_KEYWORDS {
        assert_eq!(type_keyword_len(kw), kw.len(), "{kw}");
    }
}

#[test]
fn type_keyword_prefers_boundary_match() {
    assert_eq!(type_keyword_len("selectordinal,"), "selectordinal".len());
    assert_eq!(type_keyword_len("select,"), "select".len());
    assert_eq!(type_keyword_len("selection"), 0);
    assert_eq!(type_keyword_len("plurals"), 0);
}

#[test]
fn type_keyword_boundary_allows_punctuation() {
    assert_eq!(type_keyword_len("date}"), 4);
    assert_eq!(type_keyword_len("time "), 4);
    assert_eq!(type_keyword_len("number{"), 6);
}

#[test]
fn named_selectors_match_on_boundary() {
    for sel in SELECTOR_KEYWORDS {
        assert_eq!(selector_len(&format!("{sel} {{")), sel.len(), "{sel}");
    }
    assert_eq!(selector_len("ones"), 0);
    assert_eq!(selector_len("others{"), 0);
}

#[test]
fn explicit_selectors_need_digits_and_boundary() {
    assert_eq!(selector_len("=0 {none}"), 2);
    assert_eq!(selector_len("=42{"), 3);
    assert_eq!(selector_len("="), 0);
    assert_eq!(selector_len("=x"), 0);
    assert_eq!(selector_len("=1x"), 0);
}

#[test]
fn style_keywords_match_on_boundary() {
    for kw in STYLE_KEYWORDS {
        assert_eq!(style_keyword_len(kw), kw.len(), "{kw}");
    }
    assert_eq!(style_keyword_len("longer"), 0);
}

// === Probes ===

#[test]
fn header_open_with_comma() {
    assert!(is_header_open(Cursor::new("{count, plural, other{#}}")));
}

#[test]
fn header_open_simple_argument() {
    assert!(is_header_open(Cursor::new("{name}")));
}

#[test]
fn header_open_allows_whitespace() {
    assert!(is_header_open(Cursor::new("{ \tname \u{a0},")));
}

#[test]
fn header_open_rejects_body_text() {
    assert!(!is_header_open(Cursor::new("{# items}")));
    assert!(!is_header_open(Cursor::new("{two words}")));
    assert!(!is_header_open(Cursor::new("{name")));
    assert!(!is_header_open(Cursor::new("{}")));
}

#[test]
fn header_open_requires_brace_under_cursor() {
    assert!(!is_header_open(Cursor::new("name}")));
}

#[test]
fn header_open_probe_does_not_consume() {
    let cursor = Cursor::new("{count, plural}");
    assert!(is_header_open(cursor));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn opens_body_next_skips_whitespace() {
    assert!(opens_body_next("  {zero}"));
    assert!(opens_body_next("{"));
    assert!(!opens_body_next(" x{"));
    assert!(!opens_body_next(""));
}

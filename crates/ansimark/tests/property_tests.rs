//! Algebraic properties of the engine, checked over generated inputs.

use proptest::prelude::*;

use ansimark::AnsiMarkup;

/// Text with no separators or escapes, which the engine must pass through.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?:;'\"]{0,40}"
        .prop_filter("no tag structure", |s| {
            !s.contains('<') && !s.contains('>') && !s.contains('\\')
        })
}

/// A tag name the registry resolves.
fn known_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["b", "bold", "d", "r", "red", "Y", "fg red", "b,r,y"])
}

/// A tag name nothing resolves.
fn unknown_tag() -> impl Strategy<Value = String> {
    "[a-z]{3,8}".prop_filter("not registered", |s| ansimark::strip(&format!("<{s}>")) != "")
}

proptest! {
    #[test]
    fn plain_text_is_a_fixed_point(text in plain_text()) {
        prop_assert_eq!(&ansimark::parse(&text).unwrap(), &text);
        prop_assert_eq!(&ansimark::strip(&text), &text);
    }

    #[test]
    fn parse_of_raw_round_trips(text in ".{0,40}") {
        let raw = ansimark::raw(&text);
        prop_assert_eq!(&ansimark::parse(&raw).unwrap(), &text);
        prop_assert_eq!(&ansimark::strip(&raw), &text);
    }

    #[test]
    fn strip_removes_known_and_keeps_unknown(
        tag in known_tag(),
        unknown in unknown_tag(),
        content in plain_text()
    ) {
        let input = format!("<{tag}><{unknown}>{content}</{unknown}></{tag}>");
        let expected = format!("<{unknown}>{content}</{unknown}>");
        prop_assert_eq!(ansimark::strip(&input), expected);
    }

    #[test]
    fn strip_is_idempotent_without_escapes(
        outer in known_tag(),
        inner in known_tag(),
        content in plain_text()
    ) {
        let input = format!("<{outer}>{content}<{inner}>{content}</{inner}></{outer}>");
        let once = ansimark::strip(&input);
        prop_assert_eq!(&ansimark::strip(&once), &once);
    }

    #[test]
    fn delta_equals_parse_minus_strip(
        tag in known_tag(),
        content in plain_text()
    ) {
        let am = AnsiMarkup::new();
        let input = format!("<{tag}>{content}</{tag}>");
        let s = am.string(&input);
        let parsed = am.parse(&input).unwrap();
        let stripped = am.strip(&input);
        prop_assert_eq!(
            s.delta().unwrap(),
            parsed.chars().count() - stripped.chars().count()
        );
    }
}

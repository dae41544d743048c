use proptest::prelude::*;
use regex::Regex;
use tgref::{
    find_refs, Format, OverflowPolicy, Reference, ReferenceKind, ScannerBuilder, Span,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// (kind, text, value) of every reference in `input`.
fn scan(input: &str) -> Vec<(ReferenceKind, &str, Option<i64>)> {
    find_refs(input)
        .map(|r| (r.kind(), r.text(), r.value()))
        .collect()
}

fn single(input: &str) -> Reference<'_> {
    let refs: Vec<Reference> = find_refs(input).collect();
    assert_eq!(refs.len(), 1, "expected exactly one reference in {input:?}");
    refs[0]
}

#[test]
fn test_text_without_markers() {
    init();
    assert!(scan("").is_empty());
    assert!(scan("hello world, 12345 # no links here").is_empty());
    assert!(scan("ÄÖÜ ß € 🙂 ∑").is_empty());
}

#[test]
fn test_single_formats() {
    init();
    let r = single("@durov");
    assert_eq!(r.kind(), ReferenceKind::Handle);
    assert_eq!(r.text(), "durov");
    assert_eq!(r.span(), Span::new(0, 6));

    let r = single("@42");
    assert_eq!(r.format(), Format::MentionId);
    assert_eq!(r.value(), Some(42));

    let r = single("t.me/telegram");
    assert_eq!(r.format(), Format::TMeHandle);
    assert_eq!(r.handle_name(), Some("telegram"));

    let r = single("t.me/@id123456789");
    assert_eq!(r.format(), Format::TMeId);
    assert_eq!(r.value(), Some(123456789));
    assert_eq!(r.text_span(), Span::new(8, 17));

    let r = single("tg://resolve?domain=durov");
    assert_eq!(r.format(), Format::TgResolve);
    assert_eq!(r.text(), "durov");

    let r = single("tg://user?id=123456");
    assert_eq!(r.format(), Format::TgUser);
    assert_eq!(r.value(), Some(123456));

    let r = single("tg://openmessage?user_id=42");
    assert_eq!(r.format(), Format::TgOpenMessage);
    assert_eq!(r.value(), Some(42));
    assert_eq!(r.span(), Span::new(0, 27));
}

#[test]
fn test_min_handle_length_boundary() {
    init();
    assert!(scan("@abc").is_empty());
    assert_eq!(scan("@abcd"), vec![(ReferenceKind::Handle, "abcd", None)]);
    assert!(scan("t.me/abc").is_empty());
    assert!(scan("tg://resolve?domain=abc").is_empty());
}

#[test]
fn test_scheme_case_insensitivity() {
    init();
    assert_eq!(scan("T.ME/Foo"), scan("t.me/Foo"));
    assert_eq!(scan("T.ME/Food"), scan("t.me/Food"));
    assert_eq!(scan("T.ME/Food"), vec![(ReferenceKind::Handle, "Food", None)]);
    assert_eq!(scan("TG://USER?ID=5"), scan("tg://user?id=5"));
    assert_eq!(
        scan("TG://USER?ID=5"),
        vec![(ReferenceKind::Identifier, "5", Some(5))]
    );
    assert_eq!(scan("Tg://ReSoLvE?DoMaIn=durov"), scan("tg://resolve?domain=durov"));
}

#[test]
fn test_multiple_matches_in_order() {
    init();
    let refs: Vec<Reference> = find_refs("@durov and t.me/@id5").collect();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].text(), "durov");
    assert_eq!(refs[1].value(), Some(5));
    assert!(refs[0].end() <= refs[1].start());
    assert!(refs[0].text_span().end <= refs[1].text_span().start);
}

#[test]
fn test_deterministic_rescan() {
    init();
    let input = "@first t.me/second tg://user?id=3 @4 T.ME/@ID5";
    let a: Vec<Reference> = find_refs(input).collect();
    let b: Vec<Reference> = find_refs(input).collect();
    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
}

#[test]
fn test_truncated_candidates() {
    init();
    assert!(scan("@").is_empty());
    assert!(scan("text ending in @").is_empty());
    assert!(scan("t").is_empty());
    assert!(scan("t.me").is_empty());
    assert!(scan("see tg:/").is_empty());
    assert!(scan("tg://user?id").is_empty());
}

#[test]
fn test_cursor_protocol() {
    init();
    let mut cursor = find_refs("x @durov y @1");
    assert!(cursor.current().is_none());
    assert!(cursor.advance());
    assert_eq!(cursor.current().map(|r| r.text()), Some("durov"));
    assert!(cursor.advance());
    assert_eq!(cursor.current().and_then(|r| r.value()), Some(1));
    assert!(cursor.is_exhausted());
    for _ in 0..3 {
        assert!(!cursor.advance());
        assert!(cursor.current().is_none());
    }
}

#[test]
fn test_results_outlive_cursor() {
    init();
    let input = String::from("@durov @telegram");
    let first = {
        let mut cursor = find_refs(&input);
        cursor.next_ref().unwrap()
    };
    assert_eq!(first.text(), "durov");
    let owned = first.to_owned_ref();
    drop(input);
    assert_eq!(owned.text, "durov");
}

// Digit runs beyond i64::MAX wrap by default. The alternative policy rejects them.
#[test]
fn test_numeric_overflow_policies() {
    init();
    let input = "@9223372036854775808 tg://user?id=9223372036854775807";
    let wrapped: Vec<Option<i64>> = find_refs(input).map(|r| r.value()).collect();
    assert_eq!(wrapped, vec![Some(i64::MIN), Some(i64::MAX)]);

    let scanner = ScannerBuilder::new()
        .overflow_policy(OverflowPolicy::Reject)
        .build()
        .unwrap();
    let rejected: Vec<Option<i64>> = scanner.find_iter(input).map(|r| r.value()).collect();
    assert_eq!(rejected, vec![Some(i64::MAX)]);
}

#[test]
fn test_with_positions() {
    init();
    let found: Vec<_> = find_refs("a\n@durov\nx t.me/@id1")
        .with_positions()
        .map(|(r, p)| (r.text(), p.line(), p.column()))
        .collect();
    assert_eq!(found, vec![("durov", 2, 1), ("1", 3, 3)]);
}

/// Builds haystacks from fragments that are likely to contain (partial) references.
fn haystack() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            prop::sample::select(vec![
                "@durov",
                "@42",
                "t.me/",
                "T.ME/@ID",
                "tg://",
                "resolve?domain=",
                "user?id=",
                "openmessage?user_id=",
                "@",
            ])
            .prop_map(str::to_string),
            "[a-zA-Z0-9_]{0,6}",
            "\\PC{0,4}",
            "[ .\n/?=]{0,2}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn references_are_ordered_and_inside_haystack(input in haystack()) {
        let mut last_end = 0;
        for r in find_refs(&input) {
            prop_assert!(r.start() >= last_end);
            prop_assert!(r.end() <= input.len());
            prop_assert!(!r.span().is_empty());
            prop_assert!(r.span().contains(r.text_span()));
            prop_assert_eq!(&input[r.text_span().range()], r.text());
            match r.kind() {
                ReferenceKind::Handle => {
                    prop_assert!(r.text().len() >= 4);
                    prop_assert!(r.value().is_none());
                }
                ReferenceKind::Identifier => {
                    prop_assert!(r.text().bytes().all(|b| b.is_ascii_digit()));
                    prop_assert!(r.value().is_some());
                }
            }
            last_end = r.end();
        }
    }

    #[test]
    fn cursor_offset_only_moves_forward(input in haystack()) {
        let mut cursor = find_refs(&input);
        let mut offset = cursor.offset();
        while cursor.advance() {
            prop_assert!(cursor.offset() > offset);
            offset = cursor.offset();
        }
        prop_assert_eq!(cursor.offset(), input.len());
        prop_assert!(!cursor.advance());
    }

    #[test]
    fn rescan_is_deterministic(input in haystack()) {
        let a: Vec<Reference> = find_refs(&input).collect();
        let b: Vec<Reference> = find_refs(&input).collect();
        prop_assert_eq!(a, b);
    }

    // Without `t`/`T` only mentions can match, which a regex describes exactly.
    #[test]
    fn mentions_agree_with_regex(input in "[a-su-zA-SU-Z0-9_ @.]{0,64}") {
        let rx = Regex::new(r"@(?:[0-9]+|[A-Za-z0-9_]{4,})").unwrap();
        let expected: Vec<(usize, usize)> =
            rx.find_iter(&input).map(|m| (m.start(), m.end())).collect();
        let found: Vec<(usize, usize)> = find_refs(&input).map(|r| (r.start(), r.end())).collect();
        prop_assert_eq!(found, expected);
        for r in find_refs(&input) {
            if r.kind() == ReferenceKind::Identifier && r.text().len() <= 18 {
                prop_assert_eq!(r.value(), r.text().parse::<i64>().ok());
            }
        }
    }
}

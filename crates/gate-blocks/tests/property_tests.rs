use gate_blocks::{ComparisonParameters, normalize_whitespace, preprocess, render};
use proptest::prelude::*;

/// Text with no newline-adjacent markers and no pipes: nothing to preprocess.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-z0-9 .\n]{0,40}"
}

/// Block bodies that are not table rows.
fn body() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{1,20}(\n[a-z0-9 ]{1,20}){0,3}"
}

proptest! {
    #[test]
    fn test_preprocess_idempotent_on_clean_documents(
        before in plain_text(),
        inner in plain_text(),
        after in "[a-z0-9 .]{0,40}",
    ) {
        // Only documents that are already free of the three patterns qualify.
        prop_assume!(!before.trim_end_matches(' ').ends_with('\n'));
        let doc = format!("{before}{{% if_version gte:1.0 %}}{inner}{{% endif_version %}}{after}");
        let once = preprocess(&doc);
        prop_assert_eq!(&once, &doc);
        prop_assert_eq!(preprocess(&once), once);
    }

    #[test]
    fn test_preprocess_twice_is_stable_after_cleanup(inner in body()) {
        let doc = format!("intro\n{{% if_version gte:1.0 %}}\n{inner}\n{{% endif_version %}}\n\noutro");
        let once = preprocess(&doc);
        prop_assert_eq!(preprocess(&once), once);
    }

    #[test]
    fn test_passing_block_rewrapped_without_truncation(inner in body()) {
        let params = ComparisonParameters::parse("gte:1.0").unwrap();
        let content = format!("\n{inner}\n");
        let rendered = render(&params, "1.0", &content).unwrap();
        prop_assert_eq!(rendered, format!("\n{inner}\n"));
    }

    #[test]
    fn test_inline_never_adds_newlines(inner in body()) {
        let content = format!("\n{inner}\n");
        let rendered = normalize_whitespace(&content, true);
        prop_assert_eq!(rendered, inner);
    }

    #[test]
    fn test_failing_block_always_empty(inner in body(), minor in 0u64..100) {
        let params = ComparisonParameters::parse("gte:100.0").unwrap();
        let rendered = render(&params, &format!("99.{minor}"), &inner).unwrap();
        prop_assert!(rendered.is_empty());
    }
}

use fieldscope_form::{humanize, label_key};
use proptest::prelude::*;

proptest! {
    #[test]
    fn humanize_never_panics(name in "\\PC{0,40}") {
        let _ = humanize(&name);
    }

    #[test]
    fn label_keys_have_no_index_segments(
        segments in prop::collection::vec(prop_oneof!["[a-z]{1,6}", "[0-9]{1,3}"], 0..6),
    ) {
        let key = label_key(&segments.join("."));
        prop_assert!(key
            .split('.')
            .all(|segment| segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit())));
    }

    #[test]
    fn humanized_labels_start_uppercase(name in "[a-z][a-zA-Z_]{0,20}") {
        let label = humanize(&name);
        let first = label.chars().next();
        prop_assert!(first.map_or(false, char::is_uppercase));
    }
}

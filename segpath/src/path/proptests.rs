//! Property-based tests for parsing and reconstruction.

use super::parse::parse;
use super::types::SegmentedPath;
use crate::style::PathStyle;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn separator_run_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn windows_path_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        prop::option::of("[a-zA-Z]"),
        prop::collection::vec((segment_strategy(), separator_run_strategy()), 0..8),
    )
        .prop_map(|(drive, parts)| {
            let mut raw = drive.map(|d| format!("{d}:")).unwrap_or_default();
            let mut segments = Vec::new();
            for (segment, separators) in parts {
                raw.push_str(&separators);
                raw.push_str(&segment);
                segments.push(segment);
            }
            (raw, segments)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing the same input twice gives the same result
    #[test]
    fn parse_idempotent(raw in ".{0,64}") {
        for style in [PathStyle::Windows, PathStyle::Unix, PathStyle::Unknown] {
            prop_assert_eq!(parse(&raw, style), parse(&raw, style));
        }
    }

    // No segment is empty or contains a separator of its style
    #[test]
    fn segments_never_empty_or_separators(raw in ".{0,64}") {
        for style in [PathStyle::Windows, PathStyle::Unix] {
            for segment in parse(&raw, style).segments {
                prop_assert!(!segment.is_empty());
                prop_assert!(!segment.chars().any(|c| style.is_separator(c)));
            }
        }
    }

    // Separator runs collapse and the generated segments come back in order
    #[test]
    fn windows_segments_recovered((raw, segments) in windows_path_strategy()) {
        let parsed = parse(&raw, PathStyle::Windows);
        prop_assert_eq!(parsed.segments, segments);
    }

    // The parent of an absolute path re-parses to all but the last segment
    #[test]
    fn parent_path_drops_last_segment((raw, segments) in windows_path_strategy()) {
        let path = SegmentedPath::new(raw, PathStyle::Windows);
        if path.is_absolute() && !segments.is_empty() {
            let parent = SegmentedPath::new(path.parent_path(), PathStyle::Windows);
            prop_assert!(parent.is_absolute());
            prop_assert_eq!(parent.segments(), &segments[..segments.len() - 1]);
        } else {
            prop_assert_eq!(path.parent_path(), "");
        }
    }

    // Rebuilding every segment parses back to the same structure, leading
    // separators included
    #[test]
    fn full_prefix_reparses_identically((raw, _) in windows_path_strategy()) {
        let path = SegmentedPath::new(raw, PathStyle::Windows);
        let rebuilt = path.prefix(path.len());
        let expected = parse(path.as_str(), PathStyle::Windows);
        prop_assert_eq!(parse(&rebuilt, PathStyle::Windows), expected);
    }
}

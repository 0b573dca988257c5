//! Path string tokenization.
//!
//! Parsing is total: any string yields a segment list. Characters that are
//! not separators are kept verbatim, so an illegal file name only surfaces
//! when the operating system is asked about it.

use crate::style::PathStyle;

/// The structure recovered from a raw path string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parsed {
    /// Non-empty segments, left to right.
    pub segments: Vec<String>,
    /// Root marker for absolute paths: the drive designator (`"C:"`) for
    /// Windows, the empty string for Unix. `None` for relative paths.
    pub root: Option<String>,
    /// Leading separators of a relative path that still pin it somewhere:
    /// `\` for the current drive's root, `\\` for a UNC share. Written
    /// with the style's separator.
    pub anchor: Option<String>,
}

impl Parsed {
    /// Returns true if the parsed string was absolute for its style.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }
}

/// Split `raw` into segments using the separators of `style` and detect
/// whether it is absolute.
///
/// Runs of separators collapse into one split point, so leading, trailing
/// and doubled separators never produce empty segments. Absoluteness is
/// decided on the unsplit string; the drive designator of a Windows path is
/// recorded as the root marker and is not a segment. A relative string that
/// begins with separators keeps them as its anchor.
///
/// # Examples
///
/// ```
/// use segpath::path::parse::parse;
/// use segpath::PathStyle;
///
/// let parsed = parse("C:\\a\\\\b\\", PathStyle::Windows);
/// assert_eq!(parsed.segments, vec!["a", "b"]);
/// assert_eq!(parsed.root.as_deref(), Some("C:"));
///
/// let parsed = parse("../folder", PathStyle::Unix);
/// assert_eq!(parsed.segments, vec!["..", "folder"]);
/// assert!(!parsed.is_absolute());
/// ```
#[must_use]
pub fn parse(raw: &str, style: PathStyle) -> Parsed {
    let (root, body) = match style.absolute_prefix_len(raw) {
        Some(len) => (Some(raw[..len].to_string()), &raw[len..]),
        None => (None, raw),
    };

    let anchor = if root.is_some() {
        None
    } else {
        match body.chars().take_while(|&c| style.is_separator(c)).count() {
            0 => None,
            1 => Some(style.separator().to_string()),
            _ => Some(style.separator().to_string().repeat(2)),
        }
    };

    Parsed {
        segments: split_segments(body, style),
        root,
        anchor,
    }
}

/// Split `body` on every separator of `style`, dropping empty pieces.
#[must_use]
pub fn split_segments(body: &str, style: PathStyle) -> Vec<String> {
    body.split(|c| style.is_separator(c))
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let parsed = parse("", PathStyle::Windows);
        assert!(parsed.segments.is_empty());
        assert!(!parsed.is_absolute());

        let parsed = parse("", PathStyle::Unix);
        assert!(parsed.segments.is_empty());
        assert!(!parsed.is_absolute());
    }

    #[test]
    fn test_parse_single_segment() {
        let parsed = parse("readme", PathStyle::Unix);
        assert_eq!(parsed.segments, vec!["readme"]);
        assert!(!parsed.is_absolute());

        let parsed = parse("readme", PathStyle::Windows);
        assert_eq!(parsed.segments, vec!["readme"]);
        assert!(!parsed.is_absolute());
    }

    #[test]
    fn test_parse_unix_root_only() {
        let parsed = parse("/", PathStyle::Unix);
        assert!(parsed.segments.is_empty());
        assert!(parsed.is_absolute());
        assert_eq!(parsed.root.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_windows_absolute() {
        let parsed = parse("C:\\a\\b\\c.txt", PathStyle::Windows);
        assert_eq!(parsed.segments, vec!["a", "b", "c.txt"]);
        assert_eq!(parsed.root.as_deref(), Some("C:"));
    }

    #[test]
    fn test_parse_windows_mixed_separators() {
        let parsed = parse("d:/data\\raw/file.bin", PathStyle::Windows);
        assert_eq!(parsed.segments, vec!["data", "raw", "file.bin"]);
        assert_eq!(parsed.root.as_deref(), Some("d:"));
    }

    #[test]
    fn test_parse_windows_drive_only() {
        let parsed = parse("C:", PathStyle::Windows);
        assert!(parsed.segments.is_empty());
        assert!(parsed.is_absolute());
    }

    #[test]
    fn test_parse_collapses_separator_runs() {
        let parsed = parse("C:\\\\a\\\\\\\\b\\\\", PathStyle::Windows);
        assert_eq!(parsed.segments, vec!["a", "b"]);

        let parsed = parse("//usr///local//", PathStyle::Unix);
        assert_eq!(parsed.segments, vec!["usr", "local"]);
        assert!(parsed.is_absolute());
    }

    #[test]
    fn test_parse_unix_keeps_backslashes() {
        let parsed = parse("a\\b/c", PathStyle::Unix);
        assert_eq!(parsed.segments, vec!["a\\b", "c"]);
    }

    #[test]
    fn test_parse_relative_windows() {
        let parsed = parse("..\\folder", PathStyle::Windows);
        assert_eq!(parsed.segments, vec!["..", "folder"]);
        assert!(!parsed.is_absolute());
    }

    #[test]
    fn test_parse_leading_backslash_is_relative_on_windows() {
        let parsed = parse("\\share\\x", PathStyle::Windows);
        assert_eq!(parsed.segments, vec!["share", "x"]);
        assert!(!parsed.is_absolute());
        assert_eq!(parsed.anchor.as_deref(), Some("\\"));
    }

    #[test]
    fn test_parse_unc_anchor() {
        let parsed = parse("\\\\srv\\share\\x", PathStyle::Windows);
        assert_eq!(parsed.segments, vec!["srv", "share", "x"]);
        assert!(!parsed.is_absolute());
        assert_eq!(parsed.anchor.as_deref(), Some("\\\\"));

        let parsed = parse("//srv/share", PathStyle::Windows);
        assert_eq!(parsed.anchor.as_deref(), Some("\\\\"));
    }

    #[test]
    fn test_parse_no_anchor() {
        assert_eq!(parse("a\\b", PathStyle::Windows).anchor, None);
        assert_eq!(parse("C:\\a", PathStyle::Windows).anchor, None);
        assert_eq!(parse("/a", PathStyle::Unix).anchor, None);
    }

    #[test]
    fn test_parse_windows_drive_letter_not_absolute_in_unix_style() {
        let parsed = parse("C:/a", PathStyle::Unix);
        assert_eq!(parsed.segments, vec!["C:", "a"]);
        assert!(!parsed.is_absolute());
    }

    #[test]
    fn test_parse_unknown_uses_unix_rules() {
        assert_eq!(
            parse("/a\\b/c", PathStyle::Unknown),
            parse("/a\\b/c", PathStyle::Unix)
        );
    }

    #[test]
    fn test_parse_preserves_garbage() {
        let parsed = parse("a/<>|?*\u{0}/ü", PathStyle::Unix);
        assert_eq!(parsed.segments, vec!["a", "<>|?*\u{0}", "ü"]);
    }

    #[test]
    fn test_parse_non_ascii_first_char_is_relative() {
        let parsed = parse("é:\\x", PathStyle::Windows);
        assert!(!parsed.is_absolute());
        assert_eq!(parsed.segments, vec!["é:", "x"]);
    }

    #[test]
    fn test_parse_idempotent() {
        let first = parse("C:\\x\\\\y\\z.tar.gz", PathStyle::Windows);
        for _ in 0..5 {
            assert_eq!(parse("C:\\x\\\\y\\z.tar.gz", PathStyle::Windows), first);
        }
    }
}

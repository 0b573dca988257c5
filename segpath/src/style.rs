//! Path styles.
//!
//! A style fixes which characters separate segments and how an absolute
//! path is recognized. It is chosen when a path is parsed and stays with
//! the parsed value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

const WINDOWS_SEPARATORS: &[char] = &['/', '\\'];
const UNIX_SEPARATORS: &[char] = &['/'];

/// The syntax family a path string is written in.
///
/// `Unknown` is parsed with the Unix rules.
///
/// # Examples
///
/// ```
/// use segpath::PathStyle;
///
/// assert_eq!(PathStyle::Windows.separator(), '\\');
/// assert_eq!(PathStyle::Unix.separator(), '/');
/// assert!(PathStyle::Windows.is_separator('/'));
/// assert!(!PathStyle::Unix.is_separator('\\'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Style not known; treated like `Unix`.
    Unknown,
    /// Drive-letter paths separated by `\` (and `/`).
    Windows,
    /// Paths separated by `/`, rooted at a leading `/`.
    Unix,
}

impl PathStyle {
    /// The style native to the platform this crate was built for.
    #[cfg(windows)]
    pub const NATIVE: Self = Self::Windows;

    /// The style native to the platform this crate was built for.
    #[cfg(not(windows))]
    pub const NATIVE: Self = Self::Unix;

    /// Characters that split a path into segments.
    #[must_use]
    pub const fn separators(self) -> &'static [char] {
        match self {
            Self::Windows => WINDOWS_SEPARATORS,
            Self::Unix | Self::Unknown => UNIX_SEPARATORS,
        }
    }

    /// The separator used when joining segments back into a string.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Unix | Self::Unknown => '/',
        }
    }

    /// Returns true if `c` separates segments in this style.
    #[must_use]
    pub fn is_separator(self, c: char) -> bool {
        self.separators().contains(&c)
    }

    /// Length in bytes of the root marker that makes `raw` absolute in this
    /// style, or `None` if `raw` is relative.
    ///
    /// Windows: an ASCII letter followed by `:` (two bytes, the drive).
    /// Unix: a leading `/` (the marker itself is not kept).
    pub(crate) fn absolute_prefix_len(self, raw: &str) -> Option<usize> {
        let bytes = raw.as_bytes();
        match self {
            Self::Windows => {
                (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
                    .then_some(2)
            }
            Self::Unix | Self::Unknown => (bytes.first() == Some(&b'/')).then_some(0),
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Windows => write!(f, "windows"),
            Self::Unix => write!(f, "unix"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = Error;

    /// Recognizes `windows`, `unix`, `native` and `unknown`
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "unix" => Ok(Self::Unix),
            "native" => Ok(Self::NATIVE),
            "unknown" => Ok(Self::Unknown),
            _ => Err(Error::InvalidStyle {
                value: s.to_string(),
            }),
        }
    }
}

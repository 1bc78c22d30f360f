//! Path grammar and structural checks
//!
//! A legal path is one or more non-empty segments of letters and digits joined
//! by [`SEPARATOR`]. The separator sorts below every legal segment character,
//! which is what lets a sorted list of paths keep each subtree contiguous.

use std::collections::HashSet;

use crate::error::{FolderError, FolderResult};
use crate::folder::{Folder, SEPARATOR};

/// Check whether a string is a syntactically legal path.
///
/// Rejects the empty string, a trailing or leading separator, two separators
/// in a row, and any character that is not a letter, digit or separator.
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || path.ends_with(SEPARATOR) {
        return false;
    }

    let mut prev: Option<char> = None;
    for c in path.chars() {
        if c == SEPARATOR {
            // empty segment
            if prev.is_none() || prev == Some(SEPARATOR) {
                return false;
            }
        } else if !is_segment_char(c) {
            return false;
        }
        prev = Some(c);
    }

    true
}

/// Letters and decimal digits. Numeric letters such as `Ⅻ` and other
/// numeric forms such as `²` or `½` are not segment characters.
fn is_segment_char(c: char) -> bool {
    (c.is_alphabetic() && !c.is_numeric()) || c.is_ascii_digit()
}

/// Check that a folder's path ends with its own name.
pub fn ends_with_own_name(folder: &Folder) -> bool {
    folder.path.ends_with(folder.name.as_str())
}

/// Check that the parent segment of `path` has already been accepted.
///
/// Only the immediate parent is looked up. Callers feed paths in sorted
/// order and insert each accepted name into `seen`, so an accepted parent
/// already had its own ancestors checked.
pub fn validate_ancestors(path: &str, seen: &HashSet<&str>) -> FolderResult<()> {
    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    if segments.len() < 2 {
        return Err(FolderError::InvalidFilePathStructure(path.to_string()));
    }

    let parent = segments[segments.len() - 2];
    if seen.contains(parent) {
        Ok(())
    } else {
        Err(FolderError::UnseenFolder {
            path: path.to_string(),
            parent: parent.to_string(),
        })
    }
}

/// Check whether `path` is strictly longer than `prefix` and starts with it.
///
/// This is a plain string test. A sibling such as `A.B1` extends `A.B` too;
/// the ancestor check rejects it afterwards.
pub fn extends_path(path: &str, prefix: &str) -> bool {
    path.len() > prefix.len() && path.starts_with(prefix)
}

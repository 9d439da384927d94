//! Decomposition engine: pure boundary-finding functions over a path's bytes.
//!
//! Every function here is total. Missing components are reported as empty
//! ranges or `None`; nothing mutates and nothing fails.

use std::ops::Range;

use crate::Platform;

/// Advances `start` past a run of separators, returning the first
/// non-separator position at or after `start`.
pub(crate) fn separator_run_end<P: Platform>(path: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < path.len() && P::is_separator(path[i]) {
        i += 1;
    }
    i
}

/// Start of the relative path: everything after the root-name and the full
/// run of separators that forms the root directory.
pub(crate) fn relative_path_start<P: Platform>(path: &[u8]) -> usize {
    separator_run_end::<P>(path, P::root_name_len(path))
}

/// Range of the root-directory observer: the first separator after the
/// root-name, as spelled in the buffer. The observer is a single character
/// no matter how many redundant separators follow it.
pub(crate) fn root_directory_range<P: Platform>(path: &[u8]) -> Option<Range<usize>> {
    let n = P::root_name_len(path);
    if n < path.len() && P::is_separator(path[n]) {
        Some(n..n + 1)
    } else {
        None
    }
}

/// End of the root path: the root-name plus at most one separator.
pub(crate) fn root_path_end<P: Platform>(path: &[u8]) -> usize {
    match root_directory_range::<P>(path) {
        Some(range) => range.end,
        None => P::root_name_len(path),
    }
}

/// Start of the filename, or `None` when there is none.
///
/// A path that is empty, ends in a separator, or consists only of a root
/// has no filename.
pub(crate) fn file_name_start<P: Platform>(path: &[u8]) -> Option<usize> {
    match path.last() {
        None => return None,
        Some(last) if P::is_separator(*last) => return None,
        Some(_) => {}
    }

    let rel = relative_path_start::<P>(path);
    if rel == path.len() {
        // Bare root-name such as `C:` or `//host`
        return None;
    }

    match path[rel..].iter().rposition(|b| P::is_separator(*b)) {
        Some(i) => Some(rel + i + 1),
        None => Some(rel),
    }
}

/// End of the parent path: the truncation point used by `remove_file_name`.
///
/// The final element (the filename, or the trailing separator run) is
/// dropped together with the separators that join it to its parent, but a
/// root-directory separator is never dropped. Entirely-root paths,
/// including bare root-names, have an empty parent.
pub(crate) fn parent_path_end<P: Platform>(path: &[u8]) -> usize {
    let rel = relative_path_start::<P>(path);
    if rel >= path.len() {
        return 0;
    }

    let mut end = match file_name_start::<P>(path) {
        Some(start) => start,
        None => {
            // Trailing separator run is the final element
            let mut i = path.len();
            while i > rel && P::is_separator(path[i - 1]) {
                i -= 1;
            }
            i
        }
    };

    while end > rel && P::is_separator(path[end - 1]) {
        end -= 1;
    }

    end
}

/// Splits a filename into its stem and extension. The extension includes
/// its leading dot.
///
/// The split point is the last `.` that is not the filename's first byte;
/// all-dot names (`.`, `..`, `...`) never have an extension.
pub(crate) fn split_file_at_dot(name: &[u8]) -> (&[u8], Option<&[u8]>) {
    if name.iter().all(|b| *b == b'.') {
        return (name, None);
    }

    match name[1..].iter().rposition(|b| *b == b'.') {
        Some(i) => (&name[..i + 1], Some(&name[i + 1..])),
        None => (name, None),
    }
}

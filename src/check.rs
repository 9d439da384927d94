//! Name-validity predicates.
//!
//! Pure functions over a single candidate name (one element, not a whole
//! path) answering whether it satisfies a naming convention's allowed
//! characters and length rules. Independent of [`Path`](crate::Path) and
//! of any filesystem.

/// Returns true if `name` is non-empty and uses only the POSIX portable
/// filename character set: ASCII letters, digits, `.`, `_`, and `-`.
///
/// ```
/// use portable_path::check::portable_posix_name;
///
/// assert!(portable_posix_name("archive-2.tar.gz"));
/// assert!(!portable_posix_name("with space"));
/// assert!(!portable_posix_name(""));
/// ```
pub fn portable_posix_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_portable_posix_byte)
}

fn is_portable_posix_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-')
}

/// Returns true if `name` is valid as a Windows filename: non-empty, free
/// of reserved characters (`< > : " / \ | ? *` and controls), and not
/// ending in a space or, except for `.` and `..`, a period.
///
/// ```
/// use portable_path::check::windows_name;
///
/// assert!(windows_name("report final.txt"));
/// assert!(!windows_name("a:b"));
/// assert!(!windows_name("trailing."));
/// assert!(windows_name(".."));
/// ```
pub fn windows_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .bytes()
            .any(|b| matches!(b, b'<' | b'>' | b':' | b'"' | b'/' | b'\\' | b'|' | b'?' | b'*' | 0..=31))
        && !name.ends_with(' ')
        && (!name.ends_with('.') || name == "." || name == "..")
}

/// Returns true if `name` is portable across both conventions: `.`, `..`,
/// or a name satisfying [`portable_posix_name`] and [`windows_name`] that
/// does not begin with `-`.
pub fn portable_name(name: &str) -> bool {
    name == "."
        || name == ".."
        || (portable_posix_name(name) && windows_name(name) && !name.starts_with('-'))
}

/// Returns true if `name` is a portable directory name: a [`portable_name`]
/// containing no `.`, with `.` and `..` allowed.
pub fn portable_directory_name(name: &str) -> bool {
    name == "." || name == ".." || (portable_name(name) && !name.contains('.'))
}

/// Returns true if `name` is a portable file name: a [`portable_name`] with
/// at most one `.` and an extension no longer than three characters.
///
/// ```
/// use portable_path::check::portable_file_name;
///
/// assert!(portable_file_name("report.txt"));
/// assert!(!portable_file_name("archive.tar.gz"));
/// assert!(!portable_file_name("report.fourcc"));
/// ```
pub fn portable_file_name(name: &str) -> bool {
    if !portable_name(name) {
        return false;
    }

    match name.find('.') {
        None => true,
        Some(pos) => name[pos + 1..].find('.').is_none() && pos + 5 > name.len(),
    }
}

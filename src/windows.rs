use crate::{private, Components, Path, PathBuf, Platform};

/// Constants associated with Windows paths.
pub mod constants {
    /// The primary separator of path elements for Windows platforms
    pub const SEPARATOR: char = '\\';

    /// The primary separator of path elements for Windows platforms
    pub const SEPARATOR_STR: &str = "\\";

    /// The alternate separator Windows also accepts
    pub const ALT_SEPARATOR: char = '/';

    /// Path component value that represents the parent directory
    pub const PARENT_DIR: &[u8] = b"..";

    /// Path component value that represents the current directory
    pub const CURRENT_DIR: &[u8] = b".";

    /// Byte that terminates a drive or device root-name
    pub const DRIVE_TERMINATOR: u8 = b':';
}

use constants::{ALT_SEPARATOR, DRIVE_TERMINATOR, SEPARATOR};

/// Represents a Windows-specific [`Path`]
pub type WindowsPath = Path<Windows>;

/// Represents a Windows-specific [`PathBuf`]
pub type WindowsPathBuf = PathBuf<Windows>;

/// Represents Windows-specific [`Components`]
pub type WindowsComponents<'a> = Components<'a, Windows>;

/// Windows path rules: `\` preferred and `/` accepted as separators, with
/// drive (`C:`), device (`prn:`), UNC (`\\host`), and verbatim (`\\?\X`)
/// root-names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Windows;

impl private::Sealed for Windows {}

impl Platform for Windows {
    const PREFERRED_SEPARATOR: u8 = SEPARATOR as u8;
    const SEPARATORS: &'static [u8] = &[SEPARATOR as u8, ALT_SEPARATOR as u8];
    const ROOT_NAME_TERMINATOR: Option<u8> = Some(DRIVE_TERMINATOR);
    const ABSOLUTE_NEEDS_ROOT_NAME: bool = true;

    fn root_name_len(path: &[u8]) -> usize {
        let is_sep = |b: &u8| Self::is_separator(*b);

        if path.len() >= 2 && Self::is_separator(path[0]) && Self::is_separator(path[1]) {
            if path.len() == 2 {
                return 2;
            }

            // Verbatim form: the root-name runs through the element after
            // the `\\?\` prefix, e.g. `\\?\C:` or `\\?\pictures`
            if path.len() > 4 && path[2] == b'?' && Self::is_separator(path[3]) {
                return path[4..]
                    .iter()
                    .position(is_sep)
                    .map(|i| i + 4)
                    .unwrap_or(path.len());
            }

            // UNC host: `\\server` up to the next separator
            if !Self::is_separator(path[2]) {
                return path[2..]
                    .iter()
                    .position(is_sep)
                    .map(|i| i + 2)
                    .unwrap_or(path.len());
            }

            // Three or more leading separators carry no host name
            return 0;
        }

        // Drive or device prefix: a leading non-separator run terminated
        // by a colon, e.g. `C:` or `prn:`
        for (i, b) in path.iter().enumerate() {
            if Self::is_separator(*b) {
                break;
            }
            if *b == DRIVE_TERMINATOR {
                return i + 1;
            }
        }

        0
    }
}

use crate::{private, Components, Path, PathBuf, Platform};

/// Constants associated with POSIX paths.
pub mod constants {
    /// The primary separator of path elements for POSIX platforms
    pub const SEPARATOR: char = '/';

    /// The primary separator of path elements for POSIX platforms
    pub const SEPARATOR_STR: &str = "/";

    /// Path component value that represents the parent directory
    pub const PARENT_DIR: &[u8] = b"..";

    /// Path component value that represents the current directory
    pub const CURRENT_DIR: &[u8] = b".";
}

use constants::SEPARATOR;

/// Represents a POSIX-specific [`Path`]
pub type PosixPath = Path<Posix>;

/// Represents a POSIX-specific [`PathBuf`]
pub type PosixPathBuf = PathBuf<Posix>;

/// Represents POSIX-specific [`Components`]
pub type PosixComponents<'a> = Components<'a, Posix>;

/// POSIX path rules: `/` is the only separator, and the only root-name
/// form is the double-separator network name (`//host`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Posix;

impl private::Sealed for Posix {}

impl Platform for Posix {
    const PREFERRED_SEPARATOR: u8 = SEPARATOR as u8;
    const SEPARATORS: &'static [u8] = &[SEPARATOR as u8];
    const ROOT_NAME_TERMINATOR: Option<u8> = None;
    const ABSOLUTE_NEEDS_ROOT_NAME: bool = false;

    fn root_name_len(path: &[u8]) -> usize {
        // Exactly two leading separators start a network name; one is the
        // root directory and three or more are a redundant root directory
        if path.len() >= 2 && Self::is_separator(path[0]) && Self::is_separator(path[1]) {
            if path.len() == 2 {
                return 2;
            }
            if !Self::is_separator(path[2]) {
                return path[2..]
                    .iter()
                    .position(|b| Self::is_separator(*b))
                    .map(|i| i + 2)
                    .unwrap_or(path.len());
            }
        }

        0
    }
}

use std::fmt;

use crate::private;

/// Interface providing the platform rules that give meaning to a path's bytes.
///
/// A platform contributes the separator set, the separator written when one
/// has to be inserted, and the scanner that finds a root-name prefix. All
/// decomposition, iteration, and comparison logic is shared and consults
/// these rules.
pub trait Platform: private::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    /// Separator written when an append has to insert one.
    const PREFERRED_SEPARATOR: u8;

    /// Every byte recognized as a separator, preferred spelling first.
    const SEPARATORS: &'static [u8];

    /// Byte that ends a root-name without implying a directory boundary
    /// (`:` on Windows, nothing on POSIX). An append onto a path ending in
    /// this byte must not insert a separator, so that pushing onto `C:`
    /// produces a drive-relative path.
    const ROOT_NAME_TERMINATOR: Option<u8>;

    /// Whether an absolute path additionally requires a root-name.
    ///
    /// On Windows `C:\windows` is absolute while `\windows` and `C:temp`
    /// are not; on POSIX a root directory alone is enough.
    const ABSOLUTE_NEEDS_ROOT_NAME: bool;

    /// Returns true if `b` separates path elements on this platform.
    #[inline]
    fn is_separator(b: u8) -> bool {
        Self::SEPARATORS.contains(&b)
    }

    /// Length of the root-name prefix of `path`, or 0 when there is none.
    ///
    /// The root-name is a network host (`//host`, `\\host`), a Windows
    /// drive or device prefix (`C:`, `prn:`), or a Windows verbatim prefix
    /// (`\\?\C:`). A single leading separator is a root directory, not a
    /// root-name.
    fn root_name_len(path: &[u8]) -> usize;
}

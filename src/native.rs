/// [`Path`](crate::Path) flavor native to the platform during compilation
#[cfg(unix)]
pub type NativePath = crate::PosixPath;

/// [`PathBuf`](crate::PathBuf) flavor native to the platform during compilation
#[cfg(unix)]
pub type NativePathBuf = crate::PosixPathBuf;

/// [`Components`](crate::Components) flavor native to the platform during compilation
#[cfg(unix)]
pub type NativeComponents<'a> = crate::PosixComponents<'a>;

/// [`Platform`](crate::Platform) rules native to the platform during compilation
#[cfg(unix)]
pub type Native = crate::Posix;

/// [`Path`](crate::Path) flavor native to the platform during compilation
#[cfg(windows)]
pub type NativePath = crate::WindowsPath;

/// [`PathBuf`](crate::PathBuf) flavor native to the platform during compilation
#[cfg(windows)]
pub type NativePathBuf = crate::WindowsPathBuf;

/// [`Components`](crate::Components) flavor native to the platform during compilation
#[cfg(windows)]
pub type NativeComponents<'a> = crate::WindowsComponents<'a>;

/// [`Platform`](crate::Platform) rules native to the platform during compilation
#[cfg(windows)]
pub type Native = crate::Windows;

#[cfg(all(test, any(unix, windows)))]
mod tests {
    use crate::{NativePath, NativePathBuf};

    #[test]
    fn should_alias_the_compilation_platform() {
        let mut path = NativePathBuf::from("a");
        path.push("b");
        assert_eq!(path.file_name(), Some(&b"b"[..]));
        assert_eq!(path.parent().unwrap(), NativePath::new("a"));
    }
}

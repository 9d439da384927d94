use std::borrow::ToOwned;
use std::marker::PhantomData;
use std::{cmp, fmt};

use crate::codec::{self, Codec, EncodingError};
use crate::common::parse;
use crate::{quoted, Component, Components, Iter, PathBuf, Platform};

/// A borrowed view of a path in its native byte form, parameterized by the
/// [`Platform`] rules used to interpret it.
///
/// The byte buffer is the single source of truth: every observer is a
/// borrowed subslice or a value recomputed from the buffer on demand, so
/// derived results can never go stale. The buffer is stored exactly as
/// given; separators are never rewritten unless a mutation explicitly asks
/// for it.
///
/// This is an unsized type; it is used behind a reference like `&Path<P>`,
/// usually through the [`PosixPath`](crate::PosixPath),
/// [`WindowsPath`](crate::WindowsPath), or [`NativePath`](crate::NativePath)
/// aliases.
///
/// # Examples
///
/// ```
/// use portable_path::PosixPath;
///
/// let path = PosixPath::new("/usr/local/bin");
/// assert_eq!(path.file_name(), Some(&b"bin"[..]));
/// assert_eq!(path.parent().unwrap(), PosixPath::new("/usr/local"));
/// ```
#[repr(transparent)]
pub struct Path<P: Platform> {
    _platform: PhantomData<P>,

    /// Path as an unparsed byte slice
    pub(crate) inner: [u8],
}

impl<P: Platform> Path<P> {
    /// Wraps a byte or string slice as a borrowed path. Zero-cost; the
    /// bytes are taken verbatim, embedded NUL bytes included.
    #[inline]
    pub fn new<S: AsRef<[u8]> + ?Sized>(s: &S) -> &Self {
        unsafe { &*(s.as_ref() as *const [u8] as *const Path<P>) }
    }

    /// The native form: exactly the stored bytes, never converted.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Returns true for the distinguished empty path, which has no root,
    /// no filename, and no extension.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copies this path into an owned [`PathBuf`].
    pub fn to_path_buf(&self) -> PathBuf<P> {
        PathBuf {
            inner: self.inner.to_owned(),
            _platform: PhantomData,
        }
    }

    /// The root-name prefix: a network host (`//host`) or, under Windows
    /// rules, a drive or device prefix (`C:`, `prn:`).
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::{PosixPath, WindowsPath};
    ///
    /// assert_eq!(
    ///     WindowsPath::new(r"C:\foo").root_name().unwrap().as_bytes(),
    ///     b"C:"
    /// );
    /// assert_eq!(
    ///     PosixPath::new("//host/x").root_name().unwrap().as_bytes(),
    ///     b"//host"
    /// );
    /// assert_eq!(PosixPath::new("/foo").root_name(), None);
    /// ```
    pub fn root_name(&self) -> Option<&Path<P>> {
        let n = P::root_name_len(&self.inner);
        if n > 0 {
            Some(Path::new(&self.inner[..n]))
        } else {
            None
        }
    }

    /// The root directory: the separator that anchors an absolute path,
    /// returned as one character exactly as spelled in the buffer no
    /// matter how many redundant separators follow it.
    pub fn root_directory(&self) -> Option<&Path<P>> {
        parse::root_directory_range::<P>(&self.inner).map(|range| Path::new(&self.inner[range]))
    }

    /// The root-name plus at most one root-directory separator. Empty when
    /// the path has no root.
    pub fn root_path(&self) -> &Path<P> {
        Path::new(&self.inner[..parse::root_path_end::<P>(&self.inner)])
    }

    /// Everything after the root path. Empty for entirely-root paths.
    pub fn relative_path(&self) -> &Path<P> {
        Path::new(&self.inner[parse::relative_path_start::<P>(&self.inner)..])
    }

    /// The path without its final element, keeping a root-directory
    /// separator in place. Entirely-root paths, including bare root-names
    /// like `C:` or `//host`, have no parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::PosixPath;
    ///
    /// assert_eq!(
    ///     PosixPath::new("/usr/local/bin").parent().unwrap(),
    ///     PosixPath::new("/usr/local")
    /// );
    /// assert_eq!(PosixPath::new("/a").parent().unwrap(), PosixPath::new("/"));
    /// assert_eq!(PosixPath::new("/").parent(), None);
    /// ```
    pub fn parent(&self) -> Option<&Path<P>> {
        let end = parse::parent_path_end::<P>(&self.inner);
        if end > 0 {
            Some(Path::new(&self.inner[..end]))
        } else {
            None
        }
    }

    /// The final element of the relative path.
    ///
    /// A path that is empty, ends in a separator (a directory form), or
    /// consists only of a root has no filename.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::PosixPath;
    ///
    /// assert_eq!(PosixPath::new("/a/b").file_name(), Some(&b"b"[..]));
    /// assert_eq!(PosixPath::new("/a/b/").file_name(), None);
    /// assert_eq!(PosixPath::new("/").file_name(), None);
    /// ```
    pub fn file_name(&self) -> Option<&[u8]> {
        parse::file_name_start::<P>(&self.inner).map(|start| &self.inner[start..])
    }

    /// The filename up to its extension. A leading dot never starts an
    /// extension, so `.hidden` is its own stem.
    pub fn file_stem(&self) -> Option<&[u8]> {
        self.file_name().map(|name| parse::split_file_at_dot(name).0)
    }

    /// The filename's extension, including its leading dot. All-dot names
    /// (`.`, `..`) have no extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::PosixPath;
    ///
    /// assert_eq!(PosixPath::new("bar.txt").extension(), Some(&b".txt"[..]));
    /// assert_eq!(PosixPath::new(".hidden").extension(), None);
    /// ```
    pub fn extension(&self) -> Option<&[u8]> {
        self.file_name()
            .and_then(|name| parse::split_file_at_dot(name).1)
    }

    /// Returns true if the path has a root-name or a root directory.
    #[inline]
    pub fn has_root_path(&self) -> bool {
        !self.root_path().is_empty()
    }

    /// Returns true if the path begins with a root-name.
    #[inline]
    pub fn has_root_name(&self) -> bool {
        self.root_name().is_some()
    }

    /// Returns true if the path has a root directory.
    #[inline]
    pub fn has_root_directory(&self) -> bool {
        self.root_directory().is_some()
    }

    /// Returns true if anything follows the root path.
    #[inline]
    pub fn has_relative_path(&self) -> bool {
        !self.relative_path().is_empty()
    }

    /// Returns true if the path has a filename.
    #[inline]
    pub fn has_file_name(&self) -> bool {
        self.file_name().is_some()
    }

    /// Returns true if the filename has an extension.
    #[inline]
    pub fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    /// Returns true if the path is absolute.
    ///
    /// Under POSIX rules a root directory is enough; under Windows rules a
    /// root-name is also required, so `\windows` and `C:temp` are both
    /// relative while `C:\windows` is absolute.
    pub fn is_absolute(&self) -> bool {
        self.has_root_directory() && (!P::ABSOLUTE_NEEDS_ROOT_NAME || self.has_root_name())
    }

    /// Returns true if the path is not absolute.
    #[inline]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Iterates over the path's elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::PosixPath;
    ///
    /// let elements: Vec<_> = PosixPath::new("/a/b/")
    ///     .components()
    ///     .map(|c| c.as_bytes())
    ///     .collect();
    /// assert_eq!(elements, [&b"/"[..], b"a", b"b", b"."]);
    /// ```
    pub fn components(&self) -> Components<'_, P> {
        Components::new(&self.inner)
    }

    /// Iterates over the path's elements as borrowed [`Path`] values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(self.components())
    }

    /// The single comparison primitive: lexicographic, element-wise order
    /// over the two component sequences, independent of separator spelling
    /// and redundant separators. Every ordering and equality operator on
    /// paths reduces to this.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::PosixPath;
    ///
    /// assert!(PosixPath::new("/a/b") < PosixPath::new("/a/c"));
    /// assert!(PosixPath::new("/a") < PosixPath::new("/a/b"));
    /// assert_eq!(PosixPath::new("/a//b"), PosixPath::new("/a/b"));
    /// ```
    pub fn compare(&self, other: &Path<P>) -> cmp::Ordering {
        self.components().cmp(other.components())
    }

    /// Appends `path` onto a copy of this path. See [`PathBuf::push`] for
    /// the separator rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::PosixPath;
    ///
    /// assert_eq!(PosixPath::new("a/").join("b").as_bytes(), b"a/b");
    /// assert_eq!(PosixPath::new("a").join("/b").as_bytes(), b"a/b");
    /// ```
    pub fn join<S: AsRef<Path<P>>>(&self, path: S) -> PathBuf<P> {
        let mut buf = self.to_path_buf();
        buf.push(path);
        buf
    }

    /// Returns a copy of this path with its extension replaced. See
    /// [`PathBuf::replace_extension`].
    pub fn with_extension<S: AsRef<[u8]>>(&self, extension: S) -> PathBuf<P> {
        let mut buf = self.to_path_buf();
        buf.replace_extension(extension);
        buf
    }

    /// Lexically normalizes the path: `.` elements are dropped, `name/..`
    /// pairs cancel, `..` directly after a root directory disappears (a
    /// root cannot be crossed), redundant separators collapse, and every
    /// separator is rewritten to the platform's preferred one. Leading
    /// `..` elements of a relative path are kept. A path that cancels away
    /// completely becomes `.`.
    ///
    /// Purely lexical; the filesystem is never consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use portable_path::{PosixPath, WindowsPath};
    ///
    /// assert_eq!(
    ///     PosixPath::new("/a/./b/../c").normalize().as_bytes(),
    ///     b"/a/c"
    /// );
    /// assert_eq!(PosixPath::new("a/..").normalize().as_bytes(), b".");
    /// assert_eq!(
    ///     WindowsPath::new("C://a/./b").normalize().as_bytes(),
    ///     b"C:\\a\\b"
    /// );
    /// ```
    pub fn normalize(&self) -> PathBuf<P> {
        let mut root_name: Option<&[u8]> = None;
        let mut has_root_directory = false;
        let mut names: Vec<Component<'_>> = Vec::new();
        // Whether the last element seen was elided, leaving directory form
        let mut trailing = false;

        for component in self.components() {
            match component {
                Component::RootName(bytes) => root_name = Some(bytes),
                Component::RootDir => has_root_directory = true,
                Component::CurDir => trailing = true,
                Component::ParentDir => {
                    if matches!(names.last(), Some(Component::Normal(_))) {
                        names.pop();
                        trailing = true;
                    } else if has_root_directory {
                        trailing = true;
                    } else {
                        names.push(component);
                        trailing = false;
                    }
                }
                Component::Normal(_) => {
                    names.push(component);
                    trailing = false;
                }
            }
        }

        let mut out: Vec<u8> = Vec::with_capacity(self.inner.len());
        if let Some(bytes) = root_name {
            out.extend(bytes.iter().map(|b| {
                if P::is_separator(*b) {
                    P::PREFERRED_SEPARATOR
                } else {
                    *b
                }
            }));
        }
        if has_root_directory {
            out.push(P::PREFERRED_SEPARATOR);
        }
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                out.push(P::PREFERRED_SEPARATOR);
            }
            out.extend_from_slice(name.as_bytes());
        }
        if trailing && matches!(names.last(), Some(Component::Normal(_))) {
            out.push(P::PREFERRED_SEPARATOR);
        }
        if out.is_empty() && !self.inner.is_empty() {
            out.push(b'.');
        }

        PathBuf::from(out)
    }

    /// The portable string form, converted through the process-wide active
    /// converter (see [`codec::imbue`]). Fails with [`EncodingError`] when
    /// the buffer is not valid under that converter; nothing is ever
    /// substituted silently.
    pub fn string(&self) -> Result<String, EncodingError> {
        self.string_with(codec::active().as_ref())
    }

    /// The portable string form, converted through an explicit converter.
    pub fn string_with(&self, codec: &dyn Codec) -> Result<String, EncodingError> {
        codec.decode(&self.inner)
    }

    /// The generic string form: like [`Path::string`], but with every
    /// separator normalized to the canonical `/`. Identity on platforms
    /// whose only separator is already `/`.
    pub fn generic_string(&self) -> Result<String, EncodingError> {
        self.generic_string_with(codec::active().as_ref())
    }

    /// The generic string form through an explicit converter.
    pub fn generic_string_with(&self, codec: &dyn Codec) -> Result<String, EncodingError> {
        let text = codec.decode(&self.inner)?;
        if P::SEPARATORS.len() == 1 && P::SEPARATORS[0] == b'/' {
            return Ok(text);
        }
        Ok(text
            .chars()
            .map(|c| {
                if c.is_ascii() && P::is_separator(c as u8) {
                    '/'
                } else {
                    c
                }
            })
            .collect())
    }

    /// The wide (UTF-16) form of the portable string.
    pub fn to_wide(&self) -> Result<Vec<u16>, EncodingError> {
        self.to_wide_with(codec::active().as_ref())
    }

    /// The wide form through an explicit converter.
    pub fn to_wide_with(&self, codec: &dyn Codec) -> Result<Vec<u16>, EncodingError> {
        Ok(codec::encode_wide(&codec.decode(&self.inner)?))
    }

    /// The quoted stream form: the portable string wrapped in quotes with
    /// embedded quotes and escape characters escaped, so paths containing
    /// spaces round-trip through text streams. Reversed exactly by
    /// [`PathBuf::from_quoted_str`].
    pub fn to_quoted_string(&self) -> Result<String, EncodingError> {
        self.to_quoted_string_with(codec::active().as_ref())
    }

    /// The quoted stream form through an explicit converter.
    pub fn to_quoted_string_with(&self, codec: &dyn Codec) -> Result<String, EncodingError> {
        Ok(quoted::quote(&self.string_with(codec)?))
    }

    /// Lossy human-readable adapter for formatting. Conversion-sensitive
    /// callers want [`Path::string`] instead.
    #[inline]
    pub fn display(&self) -> Display<'_, P> {
        Display { path: self }
    }

    /// Converts a boxed path into an owned [`PathBuf`] without copying.
    pub fn into_path_buf(self: Box<Path<P>>) -> PathBuf<P> {
        let rw = Box::into_raw(self) as *mut [u8];
        let inner = unsafe { Box::from_raw(rw) };
        PathBuf {
            inner: inner.into_vec(),
            _platform: PhantomData,
        }
    }
}

/// Helper struct for printing paths with possibly non-UTF-8 bytes replaced,
/// returned by [`Path::display`].
pub struct Display<'a, P: Platform> {
    path: &'a Path<P>,
}

impl<P: Platform> fmt::Debug for Display<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.path, f)
    }
}

impl<P: Platform> fmt::Display for Display<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(&self.path.inner), f)
    }
}

impl<P: Platform> fmt::Debug for Path<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&String::from_utf8_lossy(&self.inner), f)
    }
}

impl<P: Platform> cmp::PartialEq for Path<P> {
    #[inline]
    fn eq(&self, other: &Path<P>) -> bool {
        self.compare(other) == cmp::Ordering::Equal
    }
}

impl<P: Platform> cmp::Eq for Path<P> {}

impl<P: Platform> cmp::PartialOrd for Path<P> {
    #[inline]
    fn partial_cmp(&self, other: &Path<P>) -> Option<cmp::Ordering> {
        Some(self.compare(other))
    }
}

impl<P: Platform> cmp::Ord for Path<P> {
    #[inline]
    fn cmp(&self, other: &Path<P>) -> cmp::Ordering {
        self.compare(other)
    }
}

// Hashing walks the same element sequence the comparison walks, so equal
// paths hash equally across separator spellings and redundant separators.
impl<P: Platform> std::hash::Hash for Path<P> {
    fn hash<H: std::hash::Hasher>(&self, h: &mut H) {
        let mut bytes_hashed = 0;
        for component in self.components() {
            let bytes = component.as_bytes();
            h.write(bytes);
            bytes_hashed += bytes.len();
        }
        h.write_usize(bytes_hashed);
    }
}

impl<P: Platform> AsRef<[u8]> for Path<P> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl<P: Platform> AsRef<Path<P>> for Path<P> {
    #[inline]
    fn as_ref(&self) -> &Path<P> {
        self
    }
}

impl<P: Platform> AsRef<Path<P>> for [u8] {
    #[inline]
    fn as_ref(&self) -> &Path<P> {
        Path::new(self)
    }
}

impl<P: Platform> AsRef<Path<P>> for str {
    #[inline]
    fn as_ref(&self) -> &Path<P> {
        Path::new(self)
    }
}

impl<P: Platform> AsRef<Path<P>> for String {
    #[inline]
    fn as_ref(&self) -> &Path<P> {
        Path::new(self)
    }
}

impl<P: Platform> AsRef<Path<P>> for Vec<u8> {
    #[inline]
    fn as_ref(&self) -> &Path<P> {
        Path::new(self)
    }
}

impl<P: Platform> ToOwned for Path<P> {
    type Owned = PathBuf<P>;

    #[inline]
    fn to_owned(&self) -> PathBuf<P> {
        self.to_path_buf()
    }
}

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use portable_path::{Path, PathBuf, Platform, Posix, PosixPath, Windows, WindowsPath};

static PATH_CORPUS: &[&str] = &[
    "",
    "foo",
    "foo/bar",
    "foo//bar",
    "foo/bar/baz",
    "foo/bar/./baz",
    "foo/bar/../baz",
    "../foo/bar/./../baz",
    "/foo",
    "/foo/bar",
    "/",
    "//",
    "///",
    "/a/b/",
    "//host",
    "//host/share",
    ".hidden",
    "a.tar.gz",
    // Windows-rule spellings; harmless single elements under POSIX rules
    "foo\\bar",
    "\\foo\\bar",
    "C:\\foo",
    "C:foo\\bar",
    "C:\\foo\\..\\.\\bar",
    "\\\\server\\foo\\bar",
    "\\\\?\\C:\\foo\\bar.txt",
];

fn hash_output(x: impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

fn check_borrow_consistency<P: Platform>() {
    for (idx, &text1) in PATH_CORPUS.iter().enumerate() {
        for &text2 in &PATH_CORPUS[idx..] {
            let borrowed1 = Path::<P>::new(text1);
            let borrowed2 = Path::<P>::new(text2);
            let owned1 = PathBuf::<P>::from(text1);
            let owned2 = PathBuf::<P>::from(text2);

            assert_eq!(
                borrowed1 == borrowed2,
                owned1 == owned2,
                "Eq impls match: {text1:?} == {text2:?}"
            );
            assert_eq!(
                borrowed1.cmp(borrowed2),
                owned1.cmp(&owned2),
                "Ord impls match: {text1:?} and {text2:?}"
            );
            if borrowed1 == borrowed2 {
                assert_eq!(
                    hash_output(borrowed1),
                    hash_output(borrowed2),
                    "equal paths hash equal: {text1:?} and {text2:?}"
                );
            }
        }
    }
}

#[test]
fn test_borrow_eq_ord_posix() {
    check_borrow_consistency::<Posix>();
}

#[test]
fn test_borrow_eq_ord_windows() {
    check_borrow_consistency::<Windows>();
}

#[test]
fn test_borrow_hash() {
    for &text in PATH_CORPUS {
        let borrowed = PosixPath::new(text);
        let owned = PathBuf::<Posix>::from(text);
        assert_eq!(
            hash_output(owned),
            hash_output(borrowed),
            "consistent Hash: {text:?}"
        );
    }
}

#[test]
fn test_concrete_posix_decomposition() {
    let path = PosixPath::new("/usr/local/bin");
    let elements: Vec<_> = path.iter().map(|p| p.as_bytes()).collect();
    assert_eq!(elements, [&b"/"[..], b"usr", b"local", b"bin"]);
    assert_eq!(path.file_name(), Some(&b"bin"[..]));
    assert_eq!(path.parent().unwrap(), PosixPath::new("/usr/local"));
}

#[test]
fn test_concrete_windows_decomposition() {
    let path = WindowsPath::new("C:\\foo\\bar.txt");
    assert_eq!(path.root_name().unwrap().as_bytes(), b"C:");
    assert_eq!(path.root_directory().unwrap().as_bytes(), b"\\");
    assert_eq!(path.file_name(), Some(&b"bar.txt"[..]));
    assert_eq!(path.file_stem(), Some(&b"bar"[..]));
    assert_eq!(path.extension(), Some(&b".txt"[..]));
}

#[test]
fn test_concrete_trailing_separator() {
    let path = PosixPath::new("/a/b/");
    let elements: Vec<_> = path.iter().map(|p| p.as_bytes()).collect();
    assert_eq!(elements, [&b"/"[..], b"a", b"b", b"."]);
    assert_eq!(path.file_name(), None);
    assert!(!path.has_file_name());
}

#[test]
fn test_concrete_hidden_file() {
    let path = PosixPath::new(".hidden");
    assert_eq!(path.file_stem(), Some(&b".hidden"[..]));
    assert_eq!(path.extension(), None);
}

#[test]
fn test_concrete_ordering() {
    assert!(PosixPath::new("/a/b") < PosixPath::new("/a/c"));
    assert!(PosixPath::new("/a") < PosixPath::new("/a/b"));
}

#[test]
fn test_concrete_append_collapsing() {
    assert_eq!(PosixPath::new("a/").join("b").as_bytes(), b"a/b");
    assert_eq!(PosixPath::new("a").join("/b").as_bytes(), b"a/b");
}

#[test]
fn test_conversion_boundary_with_explicit_codecs() {
    use portable_path::codec::{Latin1Codec, Utf8Codec};

    let path = PosixPath::new(b"/tmp/caf\xe9");
    assert!(path.string_with(&Utf8Codec).is_err());
    assert_eq!(path.string_with(&Latin1Codec).unwrap(), "/tmp/caf\u{e9}");

    let generic = WindowsPath::new("C:\\a\\b").generic_string_with(&Utf8Codec).unwrap();
    assert_eq!(generic, "C:/a/b");

    let wide = PosixPath::new("/tmp/x").to_wide_with(&Utf8Codec).unwrap();
    let back = PathBuf::<Posix>::from_wide_with(&wide, &Utf8Codec).unwrap();
    assert_eq!(back.as_path(), PosixPath::new("/tmp/x"));
}

#[test]
fn test_quoted_stream_round_trip() {
    use portable_path::codec::Utf8Codec;

    let path = PosixPath::new("/home/user/My Documents/file.txt");
    let quoted = path.to_quoted_string_with(&Utf8Codec).unwrap();
    assert_eq!(quoted, "\"/home/user/My Documents/file.txt\"");

    let back = PathBuf::<Posix>::from_quoted_str_with(&quoted, &Utf8Codec).unwrap();
    assert_eq!(back.as_path(), path);
}

#[test]
fn test_boxed_round_trip() {
    let owned = PathBuf::<Posix>::from("/a/b");
    let boxed = owned.clone().into_boxed_path();
    assert_eq!(&*boxed, owned.as_path());
    assert_eq!(boxed.into_path_buf(), owned);
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use super::*;

    #[test]
    fn test_bincode_round_trip() {
        let path = PathBuf::<Posix>::from(&b"/tmp/caf\xe9"[..]);
        let encoded = bincode::serialize(&path).unwrap();
        let decoded: PathBuf<Posix> = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, path);

        // The wire form is the raw native bytes
        let raw: serde_bytes::ByteBuf = bincode::deserialize(&encoded).unwrap();
        assert_eq!(raw.as_ref(), path.as_bytes());
    }

    #[test]
    fn test_borrowed_path_round_trip() {
        let path = PosixPath::new("/a/b");
        let encoded = bincode::serialize(path).unwrap();
        let decoded: &Path<Posix> = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, path);
    }
}

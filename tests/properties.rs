//! Property tests for the algebra the path type guarantees: decomposition
//! recomposes, iteration is symmetric, and comparison/hashing agree.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use portable_path::{Path, PathBuf, Platform, Posix, Windows};

type Check = Result<(), TestCaseError>;

fn posix_text() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("/"), Just("///"), Just("//host/")],
        prop::collection::vec("[a-z0-9._-]{1,8}", 0..8),
        any::<bool>(),
    )
        .prop_map(|(root, components, trailing)| {
            let mut text = String::from(root);
            text.push_str(&components.join("/"));
            if trailing && !components.is_empty() {
                text.push('/');
            }
            text
        })
}

fn windows_text() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(""),
            Just("\\"),
            Just("C:"),
            Just("C:\\"),
            Just("\\\\server\\"),
        ],
        prop::collection::vec("[a-z0-9._-]{1,8}", 0..8),
        any::<bool>(),
    )
        .prop_map(|(root, components, trailing)| {
            let mut text = String::from(root);
            text.push_str(&components.join("\\"));
            if trailing && !components.is_empty() {
                text.push('\\');
            }
            text
        })
}

fn hash_of<P: Platform>(path: &Path<P>) -> u64 {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    hasher.finish()
}

fn check_root_plus_relative<P: Platform>(path: &Path<P>) -> Check {
    let mut rebuilt = path.root_path().as_bytes().to_vec();
    rebuilt.extend_from_slice(path.relative_path().as_bytes());
    prop_assert_eq!(Path::<P>::new(&rebuilt), path);
    Ok(())
}

fn check_stem_plus_extension<P: Platform>(path: &Path<P>) -> Check {
    match path.file_name() {
        Some(name) => {
            let mut rebuilt = path.file_stem().unwrap_or(&b""[..]).to_vec();
            rebuilt.extend_from_slice(path.extension().unwrap_or(&b""[..]));
            prop_assert_eq!(rebuilt.as_slice(), name);
        }
        None => {
            prop_assert_eq!(path.file_stem(), None);
            prop_assert_eq!(path.extension(), None);
        }
    }
    Ok(())
}

fn check_join_of_elements<P: Platform>(path: &Path<P>) -> Check {
    let mut rebuilt = PathBuf::<P>::new();
    for element in path.iter() {
        rebuilt.push(element);
    }
    prop_assert_eq!(rebuilt.as_path(), path);
    Ok(())
}

fn check_iteration_symmetry<P: Platform>(path: &Path<P>) -> Check {
    let forward: Vec<_> = path.components().collect();
    let mut backward: Vec<_> = path.components().rev().collect();
    backward.reverse();
    prop_assert_eq!(forward, backward);
    Ok(())
}

fn run_all<P: Platform>(text: &str) -> Check {
    let path = Path::<P>::new(text);
    check_root_plus_relative(path)?;
    check_stem_plus_extension(path)?;
    check_join_of_elements(path)?;
    check_iteration_symmetry(path)?;
    Ok(())
}

proptest! {
    #[test]
    fn posix_paths_satisfy_recomposition_laws(text in posix_text()) {
        run_all::<Posix>(&text)?;
    }

    #[test]
    fn windows_paths_satisfy_recomposition_laws(text in windows_text()) {
        run_all::<Windows>(&text)?;
    }

    #[test]
    fn equal_posix_spellings_hash_equal(text in posix_text()) {
        // Doubling every separator changes the spelling, not the path
        let doubled: String = text
            .chars()
            .flat_map(|c| if c == '/' { vec![c, c] } else { vec![c] })
            .collect();
        let original = Path::<Posix>::new(&text);
        let respelled = Path::<Posix>::new(&doubled);
        if original == respelled {
            prop_assert_eq!(hash_of(original), hash_of(respelled));
        }
    }

    #[test]
    fn equal_windows_spellings_hash_equal(text in windows_text()) {
        let flipped: String = text
            .chars()
            .map(|c| if c == '\\' { '/' } else { c })
            .collect();
        let original = Path::<Windows>::new(&text);
        let respelled = Path::<Windows>::new(&flipped);
        if original == respelled {
            prop_assert_eq!(hash_of(original), hash_of(respelled));
        }
    }

    #[test]
    fn comparison_is_antisymmetric(a in posix_text(), b in posix_text()) {
        let left = Path::<Posix>::new(&a);
        let right = Path::<Posix>::new(&b);
        prop_assert_eq!(left.compare(right), right.compare(left).reverse());
        prop_assert_eq!(left == right, left.compare(right) == std::cmp::Ordering::Equal);
    }

    #[test]
    fn normalize_is_idempotent(text in posix_text()) {
        let once = Path::<Posix>::new(&text).normalize();
        let twice = once.normalize();
        prop_assert_eq!(once.as_bytes(), twice.as_bytes());
    }

    #[test]
    fn quoted_form_round_trips(text in posix_text()) {
        let quoted = portable_path::quoted::quote(&text);
        prop_assert_eq!(portable_path::quoted::unquote(&quoted).unwrap(), text);
    }
}

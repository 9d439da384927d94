//! [proptest::Arbitrary](Arbitrary) implementations for the owned path
//! flavors, used by this crate's own property tests and available to
//! downstream suites behind the `proptest` feature.

use proptest::prelude::*;

use crate::{PosixPathBuf, WindowsPathBuf};

/// Generates a path of 0 to 8 short components, absolute half the time,
/// with a network root-name mixed in occasionally.
impl Arbitrary for PosixPathBuf {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop_oneof![Just(""), Just("/"), Just("//host/")],
            prop::collection::vec("[a-z0-9._-]{1,8}", 0..8),
        )
            .prop_map(|(root, components)| {
                let mut text = String::from(root);
                text.push_str(&components.join("/"));
                PosixPathBuf::from(text)
            })
            .boxed()
    }
}

/// Generates a path of 0 to 8 short components behind a rotating choice of
/// Windows anchors: none, rooted, drive, drive-relative, or UNC.
impl Arbitrary for WindowsPathBuf {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop_oneof![
                Just(""),
                Just("\\"),
                Just("C:\\"),
                Just("C:"),
                Just("\\\\server\\"),
            ],
            prop::collection::vec("[a-z0-9._-]{1,8}", 0..8),
        )
            .prop_map(|(root, components)| {
                let mut text = String::from(root);
                text.push_str(&components.join("\\"));
                WindowsPathBuf::from(text)
            })
            .boxed()
    }
}

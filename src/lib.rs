#![doc = include_str!("../README.md")]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod common;
mod native;
mod posix;
mod windows;

pub mod check;
pub mod codec;
pub mod quoted;

#[cfg(feature = "proptest")]
mod proptest_impls;
#[cfg(feature = "serde")]
mod serde_impls;

mod private {
    /// Used to mark traits as sealed to prevent implementations from others outside of this crate
    pub trait Sealed {}
}

pub use common::*;
pub use native::*;
pub use posix::{Posix, PosixComponents, PosixPath, PosixPathBuf};
pub use windows::{Windows, WindowsComponents, WindowsPath, WindowsPathBuf};

/// Contains constants associated with different path formats.
pub mod constants {
    /// Contains constants associated with POSIX paths.
    pub mod posix {
        pub use crate::posix::constants::*;
    }

    /// Contains constants associated with Windows paths.
    pub mod windows {
        pub use crate::windows::constants::*;
    }
}

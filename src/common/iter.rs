use std::fmt;
use std::iter::FusedIterator;

use crate::{Components, Path, Platform};

/// Iterator over a path's elements as borrowed [`Path`] values.
///
/// Produced by [`Path::iter`]; yields exactly the elements of
/// [`Path::components`], each viewed as a path of its own.
#[derive(Clone)]
pub struct Iter<'a, P: Platform> {
    inner: Components<'a, P>,
}

impl<'a, P: Platform> Iter<'a, P> {
    pub(crate) fn new(inner: Components<'a, P>) -> Self {
        Self { inner }
    }
}

impl<P: Platform> fmt::Debug for Iter<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner).finish()
    }
}

impl<'a, P: Platform> Iterator for Iter<'a, P> {
    type Item = &'a Path<P>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|c| c.as_path())
    }
}

impl<P: Platform> DoubleEndedIterator for Iter<'_, P> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|c| c.as_path())
    }
}

impl<P: Platform> FusedIterator for Iter<'_, P> {}

use crate::{internal::find_refs_impl::FindRefsImpl, Reference, ScannerConfig, WithPositions};

/// An iterator over all non-overlapping references.
///
/// The iterator yields a [`Reference`] value until no more references could be found.
///
/// * `'h` represents the lifetime of the haystack being searched.
///
/// This iterator can be created with the [`crate::Scanner::find_iter`] method or the
/// [`crate::find_refs`] function. Besides the [`Iterator`] interface it offers the explicit
/// cursor protocol [`FindRefs::advance`] / [`FindRefs::current`].
#[derive(Debug, Clone)]
pub struct FindRefs<'h> {
    inner: FindRefsImpl<'h>,
}

impl<'h> FindRefs<'h> {
    /// Creates a new `FindRefs` iterator.
    pub(crate) fn new(config: ScannerConfig, haystack: &'h str) -> Self {
        Self {
            inner: FindRefsImpl::new(config, haystack),
        }
    }

    /// Searches for the next reference.
    ///
    /// Returns true if a new reference is available via [`FindRefs::current`]. Markers that
    /// start no reference are skipped one byte at a time. Once the haystack is exhausted every
    /// further call returns false.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.inner.advance()
    }

    /// The reference found by the last successful [`FindRefs::advance`].
    ///
    /// Returns `None` before the first advance, after an unsuccessful one, or after
    /// [`FindRefs::advance_to`] moved the cursor.
    #[inline]
    pub fn current(&self) -> Option<&Reference<'h>> {
        self.inner.current()
    }

    /// Returns the next reference in the haystack.
    ///
    /// If no reference is found, `None` is returned.
    #[inline]
    pub fn next_ref(&mut self) -> Option<Reference<'h>> {
        self.inner.next_ref()
    }

    /// Retrieve the byte offset of the unconsumed rest of the haystack.
    #[inline]
    pub fn offset(&self) -> usize {
        self.inner.offset()
    }

    /// The haystack the iterator scans.
    #[inline]
    pub fn haystack(&self) -> &'h str {
        self.inner.haystack()
    }

    /// Check if the whole haystack has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }

    /// Skips forward to the given byte position and returns the new offset.
    ///
    /// The cursor never moves backwards: a position before the current offset is ignored.
    /// A position beyond the haystack moves the cursor to its end, and a position inside a
    /// multi-byte character moves it to the start of the following character.
    pub fn advance_to(&mut self, position: usize) -> usize {
        self.inner.advance_to(position)
    }

    /// An iterator that yields references together with their line and column.
    pub fn with_positions(self) -> WithPositions<'h> {
        WithPositions::new(self)
    }
}

impl<'h> Iterator for FindRefs<'h> {
    type Item = Reference<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_ref()
    }
}

impl std::iter::FusedIterator for FindRefs<'_> {}

use crate::{FindRefs, Position, Reference};

/// An iterator over all non-overlapping references with the position of their start.
///
/// Lines are counted incrementally over the text between two references, so the adapter
/// keeps a fixed amount of state no matter how long the haystack is.
#[derive(Debug, Clone)]
pub struct WithPositions<'h> {
    iter: FindRefs<'h>,
    // Byte offset up to which newlines have been counted.
    counted_to: usize,
    // Line number at `counted_to`.
    line: usize,
    // Byte offset of the first byte of that line.
    line_start: usize,
}

impl<'h> WithPositions<'h> {
    /// Create a new `WithPositions` iterator.
    pub(crate) fn new(iter: FindRefs<'h>) -> Self {
        Self {
            iter,
            counted_to: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Returns the position of the given offset.
    ///
    /// Offsets must not decrease between calls; earlier offsets are answered for the furthest
    /// offset seen so far.
    fn position(&mut self, offset: usize) -> Position {
        let bytes = self.iter.haystack().as_bytes();
        let offset = offset.min(bytes.len());
        if offset > self.counted_to {
            for nl in memchr::memchr_iter(b'\n', &bytes[self.counted_to..offset]) {
                self.line += 1;
                self.line_start = self.counted_to + nl + 1;
            }
            self.counted_to = offset;
        }
        Position::new(self.line, self.counted_to - self.line_start + 1)
    }
}

impl<'h> Iterator for WithPositions<'h> {
    type Item = (Reference<'h>, Position);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|r| {
            let position = self.position(r.start());
            (r, position)
        })
    }
}

use log::trace;

use super::{dispatch::dispatch, marker::find_marker};
use crate::{Reference, ScannerConfig, Span};

/// A forward-only cursor over all non-overlapping references.
#[derive(Debug, Clone)]
pub(crate) struct FindRefsImpl<'h> {
    // The scanner configuration.
    config: ScannerConfig,
    // The input haystack.
    haystack: &'h str,
    // Byte offset of the unconsumed suffix.
    offset: usize,
    // The reference produced by the last successful advance.
    current: Option<Reference<'h>>,
}

impl<'h> FindRefsImpl<'h> {
    pub(crate) fn new(config: ScannerConfig, haystack: &'h str) -> Self {
        Self {
            config,
            haystack,
            offset: 0,
            current: None,
        }
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn haystack(&self) -> &'h str {
        self.haystack
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<&Reference<'h>> {
        self.current.as_ref()
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.offset >= self.haystack.len()
    }

    /// Searches for the next reference and stores it as the current one.
    ///
    /// A marker that fails every format is skipped by exactly its own byte and the search
    /// continues within the same call. Returns false once no marker remains.
    pub(crate) fn advance(&mut self) -> bool {
        self.current = None;
        let bytes = self.haystack.as_bytes();
        while self.offset < bytes.len() {
            let Some(k) = find_marker(&bytes[self.offset..]) else {
                trace!("No marker after offset {}", self.offset);
                self.offset = bytes.len();
                break;
            };
            let start = self.offset + k;
            match dispatch(&bytes[start..], &self.config) {
                Some(candidate) => {
                    let text_span = Span::new(
                        start + candidate.text_start,
                        start + candidate.consumed(),
                    );
                    let span = Span::new(start, text_span.end);
                    // The matched bytes are ASCII, so both ends are char boundaries.
                    let text = &self.haystack[text_span.range()];
                    let reference = match candidate.value {
                        Some(value) => {
                            Reference::identifier(candidate.format, value, text, text_span, span)
                        }
                        None => Reference::handle(candidate.format, text, text_span, span),
                    };
                    trace!("{:?} {}", candidate.format, reference);
                    self.offset = span.end;
                    self.current = Some(reference);
                    return true;
                }
                None => {
                    trace!("Skipping marker at {}", start);
                    self.offset = start + 1;
                }
            }
        }
        false
    }

    #[inline]
    pub(crate) fn next_ref(&mut self) -> Option<Reference<'h>> {
        if self.advance() {
            self.current
        } else {
            None
        }
    }

    /// Moves the cursor forward to `position`.
    ///
    /// Positions behind the cursor are ignored, positions past the end clamp to the end and
    /// positions inside a multi-byte character round up to the next char boundary.
    pub(crate) fn advance_to(&mut self, position: usize) -> usize {
        let len = self.haystack.len();
        let mut position = position.min(len);
        while !self.haystack.is_char_boundary(position) {
            position += 1;
        }
        if position > self.offset {
            self.offset = position;
            self.current = None;
        }
        self.offset
    }
}

impl<'h> Iterator for FindRefsImpl<'h> {
    type Item = Reference<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_ref()
    }
}

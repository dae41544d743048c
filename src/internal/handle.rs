/// Returns true if the byte may appear in a handle.
#[inline]
pub(crate) fn is_handle_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Counts the leading handle bytes of `input`.
///
/// The count stops at the first byte outside `[A-Za-z0-9_]` or at the end of the slice. The
/// caller decides which minimum length makes the run a handle.
#[inline]
pub(crate) fn scan_handle(input: &[u8]) -> usize {
    input.iter().take_while(|&&b| is_handle_byte(b)).count()
}

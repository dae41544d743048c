/// Finds the offset of the next byte that can start a supported format.
///
/// The markers are `@`, `t` and `T`; other letters never start a format. All three are ASCII,
/// so a hit is always on a char boundary of valid UTF-8 input.
#[inline]
pub(crate) fn find_marker(haystack: &[u8]) -> Option<usize> {
    memchr::memchr3(b'@', b't', b'T', haystack)
}

/// Scalar reference for [`find_marker`].
#[cfg(test)]
fn scalar_find_marker(haystack: &[u8]) -> Option<usize> {
    haystack
        .iter()
        .position(|&b| b == b'@' || b == b't' || b == b'T')
}

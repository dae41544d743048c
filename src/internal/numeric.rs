/// The outcome of a successful numeric scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScannedNumber {
    /// Number of digit bytes consumed. Always at least one.
    pub(crate) len: usize,
    /// The accumulated value, wrapped on overflow.
    pub(crate) value: i64,
    /// True if the accumulation left the `i64` range at any point.
    pub(crate) overflowed: bool,
}

/// Parses the leading ASCII decimal digits of `input`.
///
/// Digits are accumulated left to right with wrapping arithmetic, so a digit run that exceeds
/// `i64::MAX` yields a wrapped value with `overflowed` set. Leading zeros are accepted.
/// Returns `None` if `input` does not start with a digit.
pub(crate) fn scan_number(input: &[u8]) -> Option<ScannedNumber> {
    let mut value: i64 = 0;
    let mut overflowed = false;
    let mut len = 0;
    for &b in input {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i64::from(b - b'0');
        let (shifted, o1) = value.overflowing_mul(10);
        let (next, o2) = shifted.overflowing_add(digit);
        overflowed |= o1 || o2;
        value = next;
        len += 1;
    }
    if len == 0 {
        None
    } else {
        Some(ScannedNumber {
            len,
            value,
            overflowed,
        })
    }
}

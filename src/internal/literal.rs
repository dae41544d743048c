//! Fixed literals of the supported link formats and their case-insensitive comparison.
//!
//! The folding is ASCII-only: `u8::eq_ignore_ascii_case` leaves every byte outside `A-Z`/`a-z`
//! untouched, so non-ASCII input never compares equal to a letter of a literal.

/// The `t.me` host, matched without the trailing separator.
pub(crate) const T_ME: &[u8] = b"t.me";
/// The `tg:/` prefix of the `tg://` scheme, matched without the final separator.
pub(crate) const TG_SCHEME: &[u8] = b"tg:/";
/// Length of a scheme window: four literal bytes plus the `/` separator.
pub(crate) const SCHEME_LEN: usize = 5;

/// `tg://resolve?domain=<handle>`
pub(crate) const RESOLVE_DOMAIN: &[u8] = b"resolve?domain=";
/// `tg://user?id=<number>`
pub(crate) const USER_ID: &[u8] = b"user?id=";
/// `tg://openmessage?user_id=<number>`
pub(crate) const OPEN_MESSAGE_USER_ID: &[u8] = b"openmessage?user_id=";
/// `t.me/@id<number>`, matched after the `@`.
pub(crate) const ID: &[u8] = b"id";

/// Compares the start of `input` with `literal`, ignoring ASCII case.
///
/// Returns false if `input` is shorter than `literal`.
#[inline]
pub(crate) fn starts_with_ignore_case(input: &[u8], literal: &[u8]) -> bool {
    input.len() >= literal.len() && input[..literal.len()].eq_ignore_ascii_case(literal)
}

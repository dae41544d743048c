use crate::{Format, FormatFamily, OverflowPolicy, ScannerConfig};

use super::{
    handle::scan_handle,
    literal::{
        starts_with_ignore_case, ID, OPEN_MESSAGE_USER_ID, RESOLVE_DOMAIN, SCHEME_LEN, TG_SCHEME,
        T_ME, USER_ID,
    },
    numeric::scan_number,
};

/// A confirmed match at a marker position.
///
/// All offsets are relative to the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) format: Format,
    /// Offset of the handle or digit text.
    pub(crate) text_start: usize,
    /// Length of the handle or digit text.
    pub(crate) text_len: usize,
    /// Decoded number for identifier formats.
    pub(crate) value: Option<i64>,
}

impl Candidate {
    /// Number of bytes the match occupies, starting at the marker.
    #[inline]
    pub(crate) fn consumed(&self) -> usize {
        self.text_start + self.text_len
    }
}

/// Tries the format branches at a marker position in their fixed priority order.
///
/// `input` starts at the marker byte and extends to the end of the haystack.
pub(crate) fn dispatch(input: &[u8], config: &ScannerConfig) -> Option<Candidate> {
    match input.first()? {
        b'@' => mention(input, config),
        b't' | b'T' => scheme(input, config),
        _ => None,
    }
}

/// `@123` or `@name`
fn mention(input: &[u8], config: &ScannerConfig) -> Option<Candidate> {
    if !config.formats.is_enabled(FormatFamily::Mention) {
        return None;
    }
    let first = *input.get(1)?;
    if first.is_ascii_digit() {
        number_at(input, 1, Format::MentionId, config)
    } else {
        handle_at(input, 1, Format::Mention, config)
    }
}

/// `t.me/...` or `tg://...`
fn scheme(input: &[u8], config: &ScannerConfig) -> Option<Candidate> {
    if input.len() < SCHEME_LEN || input[SCHEME_LEN - 1] != b'/' {
        return None;
    }
    if starts_with_ignore_case(input, T_ME) {
        if config.formats.is_enabled(FormatFamily::TMe) {
            t_me(input, config)
        } else {
            None
        }
    } else if starts_with_ignore_case(input, TG_SCHEME) {
        if config.formats.is_enabled(FormatFamily::TgScheme) {
            tg(input, config)
        } else {
            None
        }
    } else {
        None
    }
}

fn t_me(input: &[u8], config: &ScannerConfig) -> Option<Candidate> {
    let payload = &input[SCHEME_LEN..];
    let id_digits = 1 + ID.len();
    if payload.first() == Some(&b'@')
        && starts_with_ignore_case(&payload[1..], ID)
        && payload.get(id_digits).is_some_and(u8::is_ascii_digit)
    {
        return number_at(input, SCHEME_LEN + id_digits, Format::TMeId, config);
    }
    handle_at(input, SCHEME_LEN, Format::TMeHandle, config)
}

fn tg(input: &[u8], config: &ScannerConfig) -> Option<Candidate> {
    let payload = &input[SCHEME_LEN..];
    if starts_with_ignore_case(payload, RESOLVE_DOMAIN) {
        handle_at(
            input,
            SCHEME_LEN + RESOLVE_DOMAIN.len(),
            Format::TgResolve,
            config,
        )
    } else if starts_with_ignore_case(payload, USER_ID) {
        number_at(input, SCHEME_LEN + USER_ID.len(), Format::TgUser, config)
    } else if starts_with_ignore_case(payload, OPEN_MESSAGE_USER_ID) {
        number_at(
            input,
            SCHEME_LEN + OPEN_MESSAGE_USER_ID.len(),
            Format::TgOpenMessage,
            config,
        )
    } else {
        None
    }
}

fn handle_at(
    input: &[u8],
    text_start: usize,
    format: Format,
    config: &ScannerConfig,
) -> Option<Candidate> {
    let text_len = scan_handle(input.get(text_start..)?);
    if text_len < config.min_handle_len {
        return None;
    }
    Some(Candidate {
        format,
        text_start,
        text_len,
        value: None,
    })
}

fn number_at(
    input: &[u8],
    text_start: usize,
    format: Format,
    config: &ScannerConfig,
) -> Option<Candidate> {
    let number = scan_number(input.get(text_start..)?)?;
    if number.overflowed && config.overflow == OverflowPolicy::Reject {
        return None;
    }
    Some(Candidate {
        format,
        text_start,
        text_len: number.len,
        value: Some(number.value),
    })
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Span;

/// The two kinds of entity a reference can name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReferenceKind {
    /// A username, e.g. `durov`.
    Handle,
    /// A numeric user id.
    Identifier,
}

/// The group of textual encodings a [`Format`] belongs to.
/// Each family can be switched off in the [`crate::ScannerConfig`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatFamily {
    /// `@name` and `@123`
    Mention,
    /// `t.me/name` and `t.me/@id123`
    TMe,
    /// `tg://resolve?...`, `tg://user?...` and `tg://openmessage?...`
    TgScheme,
}

/// The textual encoding a reference was recognized in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Format {
    /// `@durov`
    Mention,
    /// `@42`
    MentionId,
    /// `t.me/durov`
    TMeHandle,
    /// `t.me/@id42`
    TMeId,
    /// `tg://resolve?domain=durov`
    TgResolve,
    /// `tg://user?id=42`
    TgUser,
    /// `tg://openmessage?user_id=42`
    TgOpenMessage,
}

impl Format {
    /// The kind of entity this format encodes.
    pub fn kind(self) -> ReferenceKind {
        match self {
            Format::Mention | Format::TMeHandle | Format::TgResolve => ReferenceKind::Handle,
            Format::MentionId | Format::TMeId | Format::TgUser | Format::TgOpenMessage => {
                ReferenceKind::Identifier
            }
        }
    }

    /// The family this format belongs to.
    pub fn family(self) -> FormatFamily {
        match self {
            Format::Mention | Format::MentionId => FormatFamily::Mention,
            Format::TMeHandle | Format::TMeId => FormatFamily::TMe,
            Format::TgResolve | Format::TgUser | Format::TgOpenMessage => FormatFamily::TgScheme,
        }
    }
}

/// A handle or user id found in the haystack.
///
/// * `'h` represents the lifetime of the haystack the reference borrows its text from.
///
/// The reference stays valid as long as the haystack does. Use [`Reference::to_owned_ref`] to
/// keep it beyond that.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Reference<'h> {
    format: Format,
    /// The handle or the digits, without marker or scheme prefix.
    text: &'h str,
    /// The span of `text` in the haystack.
    text_span: Span,
    /// The span of everything consumed, starting at the marker.
    span: Span,
    /// The decoded number, identifiers only.
    value: Option<i64>,
}

impl<'h> Reference<'h> {
    /// Create a handle reference.
    pub(crate) fn handle(format: Format, text: &'h str, text_span: Span, span: Span) -> Self {
        debug_assert_eq!(format.kind(), ReferenceKind::Handle);
        debug_assert!(span.contains(text_span));
        Self {
            format,
            text,
            text_span,
            span,
            value: None,
        }
    }

    /// Create an identifier reference.
    pub(crate) fn identifier(
        format: Format,
        value: i64,
        text: &'h str,
        text_span: Span,
        span: Span,
    ) -> Self {
        debug_assert_eq!(format.kind(), ReferenceKind::Identifier);
        debug_assert!(span.contains(text_span));
        Self {
            format,
            text,
            text_span,
            span,
            value: Some(value),
        }
    }

    /// Get the kind of the reference.
    #[inline]
    pub fn kind(&self) -> ReferenceKind {
        self.format.kind()
    }

    /// Get the encoding the reference was found in.
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// The matched handle or digit text, borrowed from the haystack.
    #[inline]
    pub fn text(&self) -> &'h str {
        self.text
    }

    /// The handle text if this is a handle reference.
    #[inline]
    pub fn handle_name(&self) -> Option<&'h str> {
        match self.kind() {
            ReferenceKind::Handle => Some(self.text),
            ReferenceKind::Identifier => None,
        }
    }

    /// The decoded number if this is an identifier reference.
    ///
    /// Digit runs beyond `i64::MAX` wrap unless the scanner rejects them, see
    /// [`crate::OverflowPolicy`].
    #[inline]
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// The span of [`Reference::text`] in the haystack.
    #[inline]
    pub fn text_span(&self) -> Span {
        self.text_span
    }

    /// The span of the whole match in the haystack, including marker and scheme prefix.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the start of the whole match.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the whole match.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Copy the reference out of the haystack.
    pub fn to_owned_ref(&self) -> OwnedReference {
        OwnedReference {
            format: self.format,
            text: self.text.to_string(),
            text_span: self.text_span,
            span: self.span,
            value: self.value,
        }
    }
}

impl std::fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "id {} at {}", value, self.span),
            None => write!(f, "@{} at {}", self.text, self.span),
        }
    }
}

/// A [`Reference`] that owns its text.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OwnedReference {
    /// The encoding the reference was found in.
    pub format: Format,
    /// The handle or the digits.
    pub text: String,
    /// The span of `text` in the haystack.
    pub text_span: Span,
    /// The span of the whole match.
    pub span: Span,
    /// The decoded number, identifiers only.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub value: Option<i64>,
}

impl OwnedReference {
    /// Get the kind of the reference.
    #[inline]
    pub fn kind(&self) -> ReferenceKind {
        self.format.kind()
    }
}

impl PartialEq<OwnedReference> for Reference<'_> {
    fn eq(&self, other: &OwnedReference) -> bool {
        self.format == other.format
            && self.text == other.text
            && self.text_span == other.text_span
            && self.span == other.span
            && self.value == other.value
    }
}

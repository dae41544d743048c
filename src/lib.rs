#![forbid(missing_docs)]
//! # `tgref`
//! The `tgref` crate finds references to Telegram users in free-form text: handles such as
//! `@durov` and numeric user ids such as `@42`, written as mentions, `t.me` links or `tg://`
//! links.
//! It is designed for chat bots, moderation tools and similar software that has to pick user
//! references out of messages quickly.
//!
//! The text is scanned in a single forward pass. The scanner allocates nothing, and every
//! [`Reference`] it produces borrows its text from the input.
//! Candidate positions are located with the `memchr` crate.
//!
//! # Example
//! ```rust
//! use tgref::{find_refs, ReferenceKind};
//!
//! const INPUT: &str = "Ping @durov, or open tg://user?id=42 and t.me/telegram.";
//!
//! fn main() {
//!     for r in find_refs(INPUT) {
//!         match r.kind() {
//!             ReferenceKind::Handle => println!("Handle '{}' at {}", r.text(), r.span()),
//!             ReferenceKind::Identifier => {
//!                 println!("Id {} at {}", r.value().unwrap_or_default(), r.span())
//!             }
//!         }
//!     }
//! }
//! ```
//! The output of the example is:
//! ```text
//! Handle 'durov' at 5..11
//! Id 42 at 21..36
//! Handle 'telegram' at 41..54
//! ```
//!
//! # Recognized formats
//! | Input                         | Result              |
//! |-------------------------------|---------------------|
//! | `@durov`                      | handle `durov`      |
//! | `@42`                         | identifier `42`     |
//! | `t.me/durov`                  | handle `durov`      |
//! | `t.me/@id42`                  | identifier `42`     |
//! | `tg://resolve?domain=durov`   | handle `durov`      |
//! | `tg://user?id=42`             | identifier `42`     |
//! | `tg://openmessage?user_id=42` | identifier `42`     |
//!
//! Handles consist of ASCII letters, digits and underscores and need at least four characters.
//! Scheme and literal parts are matched ignoring ASCII case.
//!
//! # Crate features
//! - `serde`: Enabled by default. Derives `serde` traits for the public data types and allows
//!   loading a [`ScannerConfig`] from JSON.

/// Module with the scanner configuration
mod config;
pub use config::{FormatFamilies, OverflowPolicy, ScannerConfig, DEFAULT_MIN_HANDLE_LEN};

/// Module with error definitions
mod errors;
pub use errors::{Result, TgRefError, TgRefErrorKind};

/// Module that provides a FindRefs type
mod find_refs;
pub use find_refs::FindRefs;

/// The module with internal implementation details.
mod internal;

/// Module that provides a position type
mod position;
pub use position::Position;

/// Module that provides a Reference type
mod reference;
pub use reference::{Format, FormatFamily, OwnedReference, Reference, ReferenceKind};

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides a WithPositions type
mod with_positions;
pub use with_positions::WithPositions;

/// Returns an iterator over all references in `input`, using the default configuration.
pub fn find_refs(input: &str) -> FindRefs<'_> {
    Scanner::default().find_iter(input)
}

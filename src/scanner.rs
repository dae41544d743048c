use crate::{FindRefs, ScannerConfig};

/// A Scanner.
/// It finds references to Telegram users in free-form text.
///
/// The recognized encodings are mentions (`@durov`, `@42`), `t.me` links (`t.me/durov`,
/// `t.me/@id42`) and `tg://` links (`tg://resolve?domain=durov`, `tg://user?id=42`,
/// `tg://openmessage?user_id=42`). Scheme and literal parts are matched case-insensitively.
///
/// A scanner holds only its configuration. It is cheap to copy and can create any number of
/// independent [`FindRefs`] iterators, also concurrently from several threads.
///
/// To create a scanner with a non-default configuration, use the [`crate::ScannerBuilder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    pub(crate) config: ScannerConfig,
}

impl Scanner {
    /// Returns an iterator over all non-overlapping references.
    /// The iterator yields a [`crate::Reference`] value until no more references could be found.
    pub fn find_iter<'h>(&self, input: &'h str) -> FindRefs<'h> {
        FindRefs::new(self.config, input)
    }

    /// The configuration the scanner was built with.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }
}

//! Module with the scanner configuration.
//! A configuration can be built with the [`crate::ScannerBuilder`] or, with the `serde`
//! feature, loaded from JSON. Missing JSON fields fall back to their defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FormatFamily, Result, TgRefError, TgRefErrorKind};

/// The minimum handle length applied in every format unless configured otherwise.
pub const DEFAULT_MIN_HANDLE_LEN: usize = 4;

/// What to do with a digit run that does not fit into an `i64`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Accept the match with the wrapped value.
    #[default]
    Wrap,
    /// Treat the candidate as no match and continue scanning after its marker.
    Reject,
}

/// Switches for the format families.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatFamilies {
    /// `@name` and `@123`
    pub mentions: bool,
    /// `t.me/...`
    pub t_me: bool,
    /// `tg://...`
    pub tg_scheme: bool,
}

impl FormatFamilies {
    /// Check whether the given family is switched on.
    #[inline]
    pub fn is_enabled(&self, family: FormatFamily) -> bool {
        match family {
            FormatFamily::Mention => self.mentions,
            FormatFamily::TMe => self.t_me,
            FormatFamily::TgScheme => self.tg_scheme,
        }
    }

    pub(crate) fn set(&mut self, family: FormatFamily, enabled: bool) {
        match family {
            FormatFamily::Mention => self.mentions = enabled,
            FormatFamily::TMe => self.t_me = enabled,
            FormatFamily::TgScheme => self.tg_scheme = enabled,
        }
    }

    fn any(&self) -> bool {
        self.mentions || self.t_me || self.tg_scheme
    }
}

impl Default for FormatFamilies {
    fn default() -> Self {
        Self {
            mentions: true,
            t_me: true,
            tg_scheme: true,
        }
    }
}

/// The configuration of a [`crate::Scanner`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// The minimum number of characters a handle needs in every format.
    pub min_handle_len: usize,
    /// The treatment of digit runs beyond `i64::MAX`.
    pub overflow: OverflowPolicy,
    /// The enabled format families.
    pub formats: FormatFamilies,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            min_handle_len: DEFAULT_MIN_HANDLE_LEN,
            overflow: OverflowPolicy::default(),
            formats: FormatFamilies::default(),
        }
    }
}

impl ScannerConfig {
    /// Check that a scanner with this configuration can match anything at all.
    pub fn validate(&self) -> Result<()> {
        if self.min_handle_len == 0 {
            return Err(TgRefError::new(TgRefErrorKind::InvalidMinHandleLength(
                self.min_handle_len,
            )));
        }
        if !self.formats.any() {
            return Err(TgRefError::new(TgRefErrorKind::NoFormatsEnabled));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

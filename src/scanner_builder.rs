use log::debug;

use crate::{FormatFamily, OverflowPolicy, Result, Scanner, ScannerConfig};

/// A builder for creating a scanner.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    config: ScannerConfig,
}

impl ScannerBuilder {
    /// Creates a new scanner builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ScannerConfig::default(),
        }
    }

    /// Starts from an existing configuration.
    pub fn with_config(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Sets the minimum number of characters of a handle.
    pub fn min_handle_len(mut self, min_handle_len: usize) -> Self {
        self.config.min_handle_len = min_handle_len;
        self
    }

    /// Sets the treatment of digit runs beyond `i64::MAX`.
    pub fn overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.config.overflow = overflow;
        self
    }

    /// Switches a format family on or off.
    pub fn enable_family(mut self, family: FormatFamily, enabled: bool) -> Self {
        self.config.formats.set(family, enabled);
        self
    }

    /// Builds the scanner from the scanner builder.
    pub fn build(self) -> Result<Scanner> {
        self.config.validate()?;
        debug!("Building scanner with {:?}", self.config);
        Ok(Scanner {
            config: self.config,
        })
    }
}

//! Formatter configuration.

/// Formatter configuration.
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    /// Add trailing newline.
    pub trailing_newline: bool,
    /// Write every `$` in string text as `\$`, not only the ones that would
    /// otherwise open an interpolation.
    pub escape_all_dollars: bool,
}

impl FormatConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    pub fn escape_all_dollars(mut self, escape_all_dollars: bool) -> Self {
        self.escape_all_dollars = escape_all_dollars;
        self
    }
}

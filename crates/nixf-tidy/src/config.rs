//! Tidy configuration.

use nixf_diagnostic::ErrorCode;

/// Which checks run. Everything is enabled by default.
#[derive(Debug, Clone, Default)]
pub struct TidyConfig {
    disabled: Vec<ErrorCode>,
}

impl TidyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn off the check that reports `code`.
    pub fn disable(mut self, code: ErrorCode) -> Self {
        if !self.disabled.contains(&code) {
            self.disabled.push(code);
        }
        self
    }

    /// Turn a previously disabled check back on.
    pub fn enable(mut self, code: ErrorCode) -> Self {
        self.disabled.retain(|c| *c != code);
        self
    }

    pub fn is_enabled(&self, code: ErrorCode) -> bool {
        !self.disabled.contains(&code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_disable() {
        let config = TidyConfig::new().disable(ErrorCode::EmptyFragment);
        assert!(!config.is_enabled(ErrorCode::EmptyFragment));
        assert!(config.is_enabled(ErrorCode::AdjacentEscaped));

        let config = config.enable(ErrorCode::EmptyFragment);
        assert!(config.is_enabled(ErrorCode::EmptyFragment));
    }
}

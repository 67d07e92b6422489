//! Output buffer for the formatter.
//! 格式化器的输出缓冲区。

use crate::FormatConfig;

/// Accumulates formatted output.
pub struct Printer {
    /// Formatting configuration. / 格式化配置。
    config: FormatConfig,
    /// Output buffer. / 输出缓冲区。
    output: String,
}

impl Printer {
    /// Create a new printer.
    /// 创建新的打印器。
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Get the formatted output.
    /// 获取格式化后的输出。
    pub fn finish(mut self) -> String {
        if self.config.trailing_newline && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        self.output
    }

    /// Write a string.
    /// 写入字符串。
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a single character.
    pub fn write_char(&mut self, c: char) {
        self.output.push(c);
    }
}

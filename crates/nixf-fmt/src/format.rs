//! Expression formatter.
//! 表达式格式化器。

use crate::printer::Printer;
use crate::{FormatConfig, FormatError};
use nixf_syntax::{Expr, ExprFloat, ExprString, InterpolatedParts, NixFloat, Node, StringPart};

/// What the output continues with after a text fragment ends.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Next {
    Char(char),
    Interpolation,
    End,
}

/// Formats expressions back into source text.
/// 将表达式格式化回源代码。
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Format an expression.
    /// 格式化表达式。
    pub fn format(&self, expr: &Expr) -> Result<String, FormatError> {
        let mut printer = Printer::new(self.config.clone());
        self.format_expr(&mut printer, expr)?;
        Ok(printer.finish())
    }

    fn format_expr(&self, p: &mut Printer, expr: &Expr) -> Result<(), FormatError> {
        match expr {
            Expr::Int(int) => p.write(&int.value().to_string()),
            Expr::Float(float) => self.format_float(p, float)?,
            Expr::String(string) => self.format_string(p, string)?,
        }
        Ok(())
    }

    fn format_float(&self, p: &mut Printer, float: &ExprFloat) -> Result<(), FormatError> {
        let value = float.value();
        if !value.is_finite() {
            log::debug!("refusing to format float {value} at {:?}", float.range());
            return Err(FormatError::NonFiniteFloat {
                value,
                span: float.range(),
            });
        }
        p.write(&float_literal(value));
        Ok(())
    }

    fn format_string(&self, p: &mut Printer, string: &ExprString) -> Result<(), FormatError> {
        p.write_char('"');
        self.format_parts(p, string.parts())?;
        p.write_char('"');
        Ok(())
    }

    fn format_parts(&self, p: &mut Printer, parts: &InterpolatedParts) -> Result<(), FormatError> {
        let fragments = parts.fragments();
        for (i, fragment) in fragments.iter().enumerate() {
            match fragment {
                StringPart::Escaped(text) => {
                    self.format_text(p, text, next_after(&fragments[i + 1..]));
                }
                StringPart::Interpolation(expr) => {
                    p.write("${");
                    self.format_expr(p, expr)?;
                    p.write_char('}');
                }
            }
        }
        Ok(())
    }

    fn format_text(&self, p: &mut Printer, text: &str, after: Next) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' => p.write("\\\""),
                '\\' => p.write("\\\\"),
                '\n' => p.write("\\n"),
                '\r' => p.write("\\r"),
                '\t' => p.write("\\t"),
                '$' => {
                    let next = chars.peek().map_or(after, |&c| Next::Char(c));
                    // `${` opens an interpolation, and `$${` swallows the opener.
                    let opens = matches!(next, Next::Char('{') | Next::Interpolation);
                    if opens || self.config.escape_all_dollars {
                        p.write("\\$");
                    } else {
                        p.write_char('$');
                    }
                }
                c => p.write_char(c),
            }
        }
    }
}

fn next_after(rest: &[StringPart]) -> Next {
    for fragment in rest {
        match fragment {
            StringPart::Escaped(text) => {
                if let Some(c) = text.chars().next() {
                    return Next::Char(c);
                }
            }
            StringPart::Interpolation(_) => return Next::Interpolation,
        }
    }
    Next::End
}

/// Shortest round-trip spelling, with a `.` before any exponent.
fn float_literal(value: NixFloat) -> String {
    let text = format!("{value:?}");
    match text.find('e') {
        Some(e) if !text[..e].contains('.') => format!("{}.0{}", &text[..e], &text[e..]),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_literal() {
        assert_eq!(float_literal(1.0), "1.0");
        assert_eq!(float_literal(0.1), "0.1");
        assert_eq!(float_literal(-0.0), "-0.0");
        assert_eq!(float_literal(1e300), "1.0e300");
        assert_eq!(float_literal(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_next_after_skips_empty_text() {
        let rest = [StringPart::escaped(""), StringPart::escaped("{x")];
        assert!(next_after(&rest) == Next::Char('{'));
        assert!(next_after(&[]) == Next::End);
    }
}

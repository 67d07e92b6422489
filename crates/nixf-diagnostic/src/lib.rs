//! Diagnostic and error reporting for nixf.
//! nixf 的诊断和错误报告。
//!
//! Diagnostics point at node ranges. They render through ariadne for humans
//! and through serde_json for editors and CI tooling.

mod codes;
mod diagnostic;
mod json;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};
pub use json::to_json;

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};
use std::ops::Range;

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &'a Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, usize::from(diagnostic.span.start))
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        // ariadne asserts on labels that end before they start
        if !label.span.is_well_formed() {
            log::warn!("dropping label with inverted span {:?} in {filename}", label.span);
            continue;
        }
        let color = colors.next();
        let ariadne_label = AriadneLabel::new((filename, label.span.range()))
            .with_message(&label.message)
            .with_color(color);
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to a string.
/// 将诊断信息渲染为字符串。
pub fn render(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    color: bool,
) -> std::io::Result<String> {
    let mut buf = Vec::new();
    build_report(filename, diagnostic, color).write((filename, Source::from(source)), &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let report = build_report(filename, diagnostic, true);
    if let Err(err) = report.eprint((filename, Source::from(source))) {
        log::warn!("failed to print diagnostic for {filename}: {err}");
    }
}

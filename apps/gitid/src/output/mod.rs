//! Console rendering of report lines

use colored::{ColoredString, Colorize};

use crate::reconcile::{ReportLine, Severity};

const INDENT: &str = "    ";

/// Enable or disable colored output for the whole process
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Plain text of a line: indentation, status symbol, text
pub fn plain_line(line: &ReportLine) -> String {
    format!("{}{}{}", INDENT.repeat(line.indent), line.severity.symbol(), line.text)
}

/// Styled line for the terminal
pub fn format_line(line: &ReportLine) -> ColoredString {
    let text = plain_line(line);
    let styled = match line.severity {
        Severity::Good => text.green(),
        Severity::Warning => text.yellow(),
        Severity::Error => text.red(),
        Severity::Neutral => text.normal(),
    };
    if line.heading {
        styled.bold()
    } else {
        styled
    }
}

/// Render a block of lines joined by newlines
pub fn render(lines: &[ReportLine]) -> String {
    lines
        .iter()
        .map(|line| format_line(line).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a block of lines to stdout
pub fn print_lines(lines: &[ReportLine]) {
    if !lines.is_empty() {
        println!("{}", render(lines));
    }
}

/// Print a fatal error to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

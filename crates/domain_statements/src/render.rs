//! Plain-text rendering

use std::fmt::Write;

use crate::statement::Statement;

/// Renders a statement as plain text
///
/// Lines print as `label: value`; emphasized lines sit under a rule.
pub fn render_text(statement: &Statement) -> String {
    let mut out = String::new();
    let header = &statement.header;

    let _ = writeln!(out, "{}", header.company_name);
    let _ = writeln!(out, "{}", header.subtitle);
    let _ = writeln!(out, "{}", header.abn);
    let _ = writeln!(out, "{}", header.afsl);
    let _ = writeln!(out, "Generated: {}", header.generated_date);
    let _ = writeln!(out, "Time: {} ({})", header.generated_time, header.timezone);
    out.push('\n');

    let _ = writeln!(out, "{}", statement.title);
    let _ = writeln!(out, "{}", "=".repeat(statement.title.len()));

    for section in &statement.sections {
        out.push('\n');
        let _ = writeln!(out, "{}", section.heading);
        let _ = writeln!(out, "{}", "-".repeat(section.heading.len()));
        for line in &section.lines {
            if line.emphasis {
                let _ = writeln!(out, "{}", "-".repeat(40));
            }
            let _ = writeln!(out, "{}: {}", line.label, line.value);
        }
    }

    out.push('\n');
    for line in &statement.footer {
        let _ = writeln!(out, "{line}");
    }
    out
}

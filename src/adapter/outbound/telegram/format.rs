//! Report rendering for Telegram `MarkdownV2`.

use crate::domain::{FieldLine, Report, ReportField, ValueStyle};

/// Telegram rejects messages longer than this many UTF-16 code units.
pub const MAX_MESSAGE_UNITS: usize = 4096;

/// Render a report as a `MarkdownV2` message.
///
/// Telegram has no columns, so inline and block fields render alike: a bold
/// heading followed by one line per entry.
pub fn render_report(report: &Report) -> String {
    let mut msg = format!("*{}*\n", escape_markdown(&report.title));

    if let Some(description) = &report.description {
        msg.push_str(&format!("_{}_\n", escape_markdown(description)));
    }

    for field in &report.fields {
        msg.push('\n');
        msg.push_str(&render_field(field));
    }

    if let Some(footer) = &report.footer {
        msg.push_str(&format!("\n_{}_", escape_markdown(footer)));
    }

    msg.trim_end().to_string()
}

fn render_field(field: &ReportField) -> String {
    let mut out = format!("*{}*\n", escape_markdown(&truncate(&field.heading, 80)));
    for line in &field.lines {
        out.push_str(&render_line(line));
        out.push('\n');
    }
    out
}

fn render_line(line: &FieldLine) -> String {
    let value = match line.style {
        ValueStyle::Code => format!("`{}`", escape_code(&line.value)),
        ValueStyle::Plain => escape_markdown(&line.value),
    };
    match &line.label {
        Some(label) => format!("*{}:* {}", escape_markdown(label), value),
        None => value,
    }
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Message length as Telegram counts it, in UTF-16 code units.
pub fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Cut `text` to at most `max_units` UTF-16 code units, ellipsis included.
pub fn truncate_message(text: &str, max_units: usize) -> String {
    if message_len(text) <= max_units {
        return text.to_string();
    }

    let budget = max_units.saturating_sub(3);
    let mut used = 0;
    let mut result = String::new();
    for c in text.chars() {
        used += c.len_utf16();
        if used > budget {
            break;
        }
        result.push(c);
    }
    result.push_str("...");
    result
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Escape text placed inside an inline code span.
pub fn escape_code(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '`' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

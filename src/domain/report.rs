//! Renderer-agnostic reports.
//!
//! A [`Report`] is built fresh for every command or summary cycle and handed
//! to a messenger for rendering. Nothing here knows about Telegram markup.

use std::fmt;

/// How a field should be laid out relative to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Fields may share a row.
    Inline,
    /// Field takes a full row.
    Block,
}

/// Emphasis hint for a line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Plain,
    /// Monospace, for numbers and identifiers.
    Code,
}

/// A single `label: value` line inside a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub label: Option<String>,
    pub value: String,
    pub style: ValueStyle,
}

impl FieldLine {
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
            style: ValueStyle::Plain,
        }
    }

    pub fn labeled_code(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
            style: ValueStyle::Code,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
            style: ValueStyle::Plain,
        }
    }

    pub fn code(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
            style: ValueStyle::Code,
        }
    }
}

impl fmt::Display for FieldLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}: {}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// A titled group of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub heading: String,
    pub lines: Vec<FieldLine>,
    pub layout: Layout,
}

impl ReportField {
    pub fn new(heading: impl Into<String>, layout: Layout) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
            layout,
        }
    }

    #[must_use]
    pub fn line(mut self, line: FieldLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Plain-text body, one line per entry.
    #[must_use]
    pub fn body(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<ReportField>,
    pub footer: Option<String>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
            footer: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn push_field(&mut self, field: ReportField) {
        self.fields.push(field);
    }

    /// Look up a field by its exact heading.
    #[must_use]
    pub fn field(&self, heading: &str) -> Option<&ReportField> {
        self.fields.iter().find(|f| f.heading == heading)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
        }
        for field in &self.fields {
            writeln!(f)?;
            writeln!(f, "{}", field.heading)?;
            for line in &field.lines {
                writeln!(f, "  {line}")?;
            }
        }
        if let Some(footer) = &self.footer {
            writeln!(f)?;
            writeln!(f, "{footer}")?;
        }
        Ok(())
    }
}

/// What gets sent back: a full report, or a short text notice in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Report(Report),
    Notice(String),
}

impl Reply {
    pub fn notice(text: impl Into<String>) -> Self {
        Self::Notice(text.into())
    }

    #[must_use]
    pub fn as_report(&self) -> Option<&Report> {
        match self {
            Self::Report(report) => Some(report),
            Self::Notice(_) => None,
        }
    }

    #[must_use]
    pub fn as_notice(&self) -> Option<&str> {
        match self {
            Self::Notice(text) => Some(text),
            Self::Report(_) => None,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(report) => report.fmt(f),
            Self::Notice(text) => writeln!(f, "{text}"),
        }
    }
}

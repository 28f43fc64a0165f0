//! HTML table rendering.
//!
//! The page is a static template with a single `{tbody}` token. Each record
//! becomes one `<tr>` and the concatenated rows replace the first token.
//!
//! Field values are inserted as-is, without HTML escaping. A submitted value
//! containing markup ends up in the page unescaped, so anyone who can submit
//! a record can inject script into the rendered table.

use std::fmt::Write as _;
use std::path::Path;

use crate::config::ConfigError;
use crate::record::Record;

/// Token replaced by the rendered rows.
pub(crate) const TBODY_TOKEN: &str = "{tbody}";

/// Text rendered in place of a field the record does not carry.
const MISSING_FIELD: &str = "undefined";

/// The page template, loaded once and shared read-only across invocations.
#[derive(Debug, Clone)]
pub(crate) struct Template(String);

impl Template {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map(Self)
            .map_err(|source| ConfigError::Template {
                path: path.display().to_string(),
                source,
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, records: &[Record]) -> String {
        render(&self.0, records)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Renders `records` into `template`, in the order given.
pub(crate) fn render(template: &str, records: &[Record]) -> String {
    let mut tbody = String::new();
    for record in records {
        push_row(&mut tbody, record);
    }
    template.replacen(TBODY_TOKEN, &tbody, 1)
}

fn push_row(out: &mut String, record: &Record) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td><td>{}</td></tr>",
        field(&record.student_id),
        field(&record.first_name),
        field(&record.surname),
        field(&record.faculty),
    );
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING_FIELD)
}

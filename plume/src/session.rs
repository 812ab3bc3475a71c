//! Append-only session log of generated appreciations, with CSV projection.
//!
//! The log is a plain owned value handed to the run loop — no module-level
//! state, so independent sessions cannot interfere. Records are immutable
//! snapshots, one per successful generation; the CSV export is a one-time
//! projection, not a store.

use serde::Serialize;

/// Default filename for the CSV export.
pub const CSV_FILE_NAME: &str = "appreciations.csv";

/// Localized CSV header row.
const CSV_HEADER: &str = "Élève,Matière,Appréciation";

/// One saved (student, subject, generated text) triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub student_name: String,
    pub subject: String,
    pub text: String,
}

impl SessionRecord {
    pub fn new(
        student_name: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            subject: subject.into(),
            text: text.into(),
        }
    }
}

/// Ordered, append-only log of the session's successful generations.
///
/// Length is monotonically non-decreasing; insertion order is generation
/// order.
#[derive(Debug, Default)]
pub struct SessionLog {
    records: Vec<SessionRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record. Records are never mutated or removed afterwards.
    pub fn append(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// CSV projection: UTF-8 BOM, header row, one escaped row per record,
    /// rows joined with newlines. The BOM lets spreadsheet tools detect the
    /// encoding.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("\u{FEFF}");
        out.push_str(CSV_HEADER);
        for record in &self.records {
            out.push('\n');
            out.push_str(&escape_csv_field(&record.student_name));
            out.push(',');
            out.push_str(&escape_csv_field(&record.subject));
            out.push(',');
            out.push_str(&escape_csv_field(&record.text));
        }
        out
    }
}

/// Wraps the field in double quotes (doubling embedded quotes) when it
/// contains a comma, quote, or newline; returns it unchanged otherwise.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

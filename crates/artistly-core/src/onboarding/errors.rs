use std::collections::BTreeMap;

use super::form::FormField;

/// Field-keyed validation messages for one validation attempt.
///
/// Always replaced wholesale, never merged across attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

static NO_ERRORS: FieldErrors = FieldErrors::new();

impl FieldErrors {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub(crate) fn none() -> &'static FieldErrors {
        &NO_ERRORS
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(FormField, String)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (FormField, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Failure reported by a submission sink.
///
/// 提交失败原因（可重试）。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionError {
    #[error("application rejected: {reason}")]
    Rejected { reason: String },
    #[error("submission sink unavailable: {message}")]
    Unavailable { message: String },
    #[error("submission timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },
    /// The caller went away before the sink answered.
    #[error("submission cancelled before the sink answered")]
    Cancelled,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form::FormData;
use crate::ids::ApplicationId;

/// A completed, validated onboarding record handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistApplication {
    pub id: ApplicationId,
    pub submitted_at: DateTime<Utc>,
    pub form: FormData,
}

impl ArtistApplication {
    pub fn new(form: FormData) -> Self {
        Self {
            id: ApplicationId::new(),
            submitted_at: Utc::now(),
            form,
        }
    }

    /// Name as it should be listed (surrounding whitespace removed).
    pub fn display_name(&self) -> &str {
        self.form.full_name.trim()
    }
}

/// Acknowledgement returned by a sink that accepted an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub application_id: ApplicationId,
    /// Sink-specific reference, e.g. the directory id assigned to the applicant.
    pub reference: Option<String>,
}

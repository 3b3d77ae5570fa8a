use serde::{Deserialize, Serialize};

use crate::ids::ArtistId;
use crate::onboarding::ArtistApplication;

/// Review status of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistStatus {
    Pending,
    Approved,
    Rejected,
}

impl ArtistStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArtistStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A performing artist listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub categories: Vec<String>,
    pub price_range: String,
    pub location: String,
    pub image: String,
    pub bio: String,
    pub languages: Vec<String>,
    pub experience: String,
    pub available_for_travel: bool,
    pub status: ArtistStatus,
}

impl Artist {
    /// Builds a pending directory entry from a submitted application.
    pub fn from_application(id: ArtistId, application: &ArtistApplication) -> Self {
        let form = &application.form;
        Self {
            id,
            name: application.display_name().to_string(),
            categories: form.selected_categories.iter().cloned().collect(),
            price_range: form.price_range.clone(),
            location: form.location.trim().to_string(),
            image: form.profile_image.clone(),
            bio: form.bio.trim().to_string(),
            languages: form.selected_languages.iter().cloned().collect(),
            experience: form.experience.clone(),
            available_for_travel: form.available_for_travel,
            status: ArtistStatus::Pending,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

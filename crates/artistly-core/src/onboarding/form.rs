//! Onboarding form data.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Maximum bio length in characters (inclusive).
pub const BIO_MAX_CHARS: usize = 500;

/// Field names of [`FormData`], as exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Bio,
    ProfileImage,
    SelectedCategories,
    SelectedLanguages,
    Experience,
    PriceRange,
    Location,
    AvailableForTravel,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Bio => "bio",
            Self::ProfileImage => "profileImage",
            Self::SelectedCategories => "selectedCategories",
            Self::SelectedLanguages => "selectedLanguages",
            Self::Experience => "experience",
            Self::PriceRange => "priceRange",
            Self::Location => "location",
            Self::AvailableForTravel => "availableForTravel",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The cumulative record built across all wizard steps.
///
/// 跨所有步骤累积的申请数据。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    // Step 1
    pub full_name: String,
    pub bio: String,
    pub profile_image: String,

    // Step 2
    pub selected_categories: BTreeSet<String>,
    pub selected_languages: BTreeSet<String>,
    pub experience: String,

    // Step 3
    pub price_range: String,
    pub location: String,
    pub available_for_travel: bool,
}

/// Replacement value for a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    FullName(String),
    Bio(String),
    ProfileImage(String),
    SelectedCategories(BTreeSet<String>),
    SelectedLanguages(BTreeSet<String>),
    Experience(String),
    PriceRange(String),
    Location(String),
    AvailableForTravel(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> FormField {
        match self {
            Self::FullName(_) => FormField::FullName,
            Self::Bio(_) => FormField::Bio,
            Self::ProfileImage(_) => FormField::ProfileImage,
            Self::SelectedCategories(_) => FormField::SelectedCategories,
            Self::SelectedLanguages(_) => FormField::SelectedLanguages,
            Self::Experience(_) => FormField::Experience,
            Self::PriceRange(_) => FormField::PriceRange,
            Self::Location(_) => FormField::Location,
            Self::AvailableForTravel(_) => FormField::AvailableForTravel,
        }
    }
}

/// Set-valued fields that support [`FormData::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetField {
    SelectedCategories,
    SelectedLanguages,
}

impl From<SetField> for FormField {
    fn from(value: SetField) -> Self {
        match value {
            SetField::SelectedCategories => FormField::SelectedCategories,
            SetField::SelectedLanguages => FormField::SelectedLanguages,
        }
    }
}

impl FormData {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FullName(v) => self.full_name = v,
            FieldUpdate::Bio(v) => self.bio = v,
            FieldUpdate::ProfileImage(v) => self.profile_image = v,
            FieldUpdate::SelectedCategories(v) => self.selected_categories = v,
            FieldUpdate::SelectedLanguages(v) => self.selected_languages = v,
            FieldUpdate::Experience(v) => self.experience = v,
            FieldUpdate::PriceRange(v) => self.price_range = v,
            FieldUpdate::Location(v) => self.location = v,
            FieldUpdate::AvailableForTravel(v) => self.available_for_travel = v,
        }
    }

    /// Inserts `value` if absent, removes it if present.
    ///
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, field: SetField, value: &str) -> bool {
        let set = self.set_mut(field);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    pub fn set(&self, field: SetField) -> &BTreeSet<String> {
        match field {
            SetField::SelectedCategories => &self.selected_categories,
            SetField::SelectedLanguages => &self.selected_languages,
        }
    }

    fn set_mut(&mut self, field: SetField) -> &mut BTreeSet<String> {
        match field {
            SetField::SelectedCategories => &mut self.selected_categories,
            SetField::SelectedLanguages => &mut self.selected_languages,
        }
    }

    /// Bio length in characters, as shown by the `n/500` counter.
    pub fn bio_chars(&self) -> usize {
        self.bio.chars().count()
    }
}

//! Option enumerations offered by the onboarding form and the catalog filters.
//!
//! The lists are ordered; presentation layers render them in this order.

pub const CATEGORIES: &[&str] = &[
    "Singer",
    "Dancer",
    "Speaker",
    "DJ",
    "Musician",
    "Comedian",
    "Magician",
    "Choreographer",
];

pub const LANGUAGES: &[&str] = &[
    "Hindi",
    "English",
    "Tamil",
    "Bengali",
    "Telugu",
    "Marathi",
    "Gujarati",
    "Punjabi",
    "Malayalam",
    "Kannada",
    "Urdu",
    "Rajasthani",
    "Konkani",
];

pub const EXPERIENCE_RANGES: &[&str] = &["0-2", "2-5", "5-10", "10+"];

pub const PRICE_RANGES: &[&str] = &[
    "₹5,000-₹15,000",
    "₹15,000-₹50,000",
    "₹50,000-₹1,00,000",
    "₹1,00,000+",
];

pub const LOCATIONS: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Pune",
    "Kolkata",
    "Jaipur",
    "Goa",
    "Lucknow",
    "Kochi",
    "Chandigarh",
    "Ahmedabad",
];

/// Read-only option lists supplied to the form.
///
/// 表单可选项（只读，有序）。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub experience_ranges: Vec<String>,
    pub price_ranges: Vec<String>,
    pub locations: Vec<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            categories: to_owned(CATEGORIES),
            languages: to_owned(LANGUAGES),
            experience_ranges: to_owned(EXPERIENCE_RANGES),
            price_ranges: to_owned(PRICE_RANGES),
            locations: to_owned(LOCATIONS),
        }
    }
}

impl FormOptions {
    pub fn has_category(&self, value: &str) -> bool {
        self.categories.iter().any(|c| c == value)
    }

    pub fn has_language(&self, value: &str) -> bool {
        self.languages.iter().any(|l| l == value)
    }

    pub fn has_experience_range(&self, value: &str) -> bool {
        self.experience_ranges.iter().any(|r| r == value)
    }

    pub fn has_price_range(&self, value: &str) -> bool {
        self.price_ranges.iter().any(|p| p == value)
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

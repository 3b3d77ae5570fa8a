//! Per-step validation of the onboarding form.
//!
//! Each step validates only its own fields. Validation is pure: the same
//! step and form always produce the same [`FieldErrors`].

use super::errors::FieldErrors;
use super::form::{FormData, FormField, BIO_MAX_CHARS};
use super::options::FormOptions;
use super::step::WizardStep;

/// How option-backed fields are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionCheck {
    /// Trust the presentation layer to only offer listed values.
    #[default]
    Lenient,
    /// Re-check membership in the option lists.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct StepValidator {
    check: OptionCheck,
    options: FormOptions,
}

impl StepValidator {
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict(options: FormOptions) -> Self {
        Self {
            check: OptionCheck::Strict,
            options,
        }
    }

    pub fn with_check(check: OptionCheck, options: FormOptions) -> Self {
        Self { check, options }
    }

    pub fn check(&self) -> OptionCheck {
        self.check
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn validate(&self, step: WizardStep, form: &FormData) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            WizardStep::BasicInformation => self.validate_basic(form, &mut errors),
            WizardStep::ProfessionalDetails => self.validate_professional(form, &mut errors),
            WizardStep::PricingAndLocation => self.validate_pricing(form, &mut errors),
        }
        errors
    }

    fn validate_basic(&self, form: &FormData, errors: &mut FieldErrors) {
        if form.full_name.trim().is_empty() {
            errors.insert(FormField::FullName, "Full name is required");
        }
        if form.bio.trim().is_empty() {
            errors.insert(FormField::Bio, "Bio is required");
        } else if form.bio_chars() > BIO_MAX_CHARS {
            errors.insert(FormField::Bio, "Bio must be less than 500 characters");
        }
    }

    fn validate_professional(&self, form: &FormData, errors: &mut FieldErrors) {
        if form.selected_categories.is_empty() {
            errors.insert(
                FormField::SelectedCategories,
                "Please select at least one category",
            );
        } else if self.is_strict()
            && !form
                .selected_categories
                .iter()
                .all(|c| self.options.has_category(c))
        {
            errors.insert(
                FormField::SelectedCategories,
                "Please select categories from the list",
            );
        }

        if form.selected_languages.is_empty() {
            errors.insert(
                FormField::SelectedLanguages,
                "Please select at least one language",
            );
        } else if self.is_strict()
            && !form
                .selected_languages
                .iter()
                .all(|l| self.options.has_language(l))
        {
            errors.insert(
                FormField::SelectedLanguages,
                "Please select languages from the list",
            );
        }

        if form.experience.is_empty() {
            errors.insert(FormField::Experience, "Please select your experience level");
        } else if self.is_strict() && !self.options.has_experience_range(&form.experience) {
            errors.insert(FormField::Experience, "Please select a valid experience level");
        }
    }

    fn validate_pricing(&self, form: &FormData, errors: &mut FieldErrors) {
        if form.price_range.is_empty() {
            errors.insert(FormField::PriceRange, "Please select a price range");
        } else if self.is_strict() && !self.options.has_price_range(&form.price_range) {
            errors.insert(FormField::PriceRange, "Please select a valid price range");
        }
        if form.location.trim().is_empty() {
            errors.insert(FormField::Location, "Location is required");
        }
    }

    fn is_strict(&self) -> bool {
        self.check == OptionCheck::Strict
    }
}

/// Validate `step` without option membership checks.
pub fn validate_step(step: WizardStep, form: &FormData) -> FieldErrors {
    StepValidator::lenient().validate(step, form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData {
            full_name: "Priya Sharma".to_string(),
            bio: "Professional playback singer.".to_string(),
            selected_categories: ["Singer".to_string()].into(),
            selected_languages: ["Hindi".to_string(), "English".to_string()].into(),
            experience: "5-10".to_string(),
            price_range: "₹15,000-₹50,000".to_string(),
            location: "Mumbai".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_step_one_reports_name_and_bio() {
        let errors = validate_step(WizardStep::BasicInformation, &FormData::default());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::FullName), Some("Full name is required"));
        assert_eq!(errors.get(FormField::Bio), Some("Bio is required"));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let form = FormData {
            full_name: "   \t".to_string(),
            ..valid_form()
        };
        let errors = validate_step(WizardStep::BasicInformation, &form);
        assert!(errors.contains(FormField::FullName));
        assert!(!errors.contains(FormField::Bio));
    }

    #[test]
    fn bio_length_limit_is_inclusive() {
        let at_limit = FormData {
            bio: "a".repeat(500),
            ..valid_form()
        };
        assert!(validate_step(WizardStep::BasicInformation, &at_limit).is_empty());

        let over_limit = FormData {
            bio: "a".repeat(501),
            ..valid_form()
        };
        let errors = validate_step(WizardStep::BasicInformation, &over_limit);
        assert_eq!(
            errors.get(FormField::Bio),
            Some("Bio must be less than 500 characters")
        );
    }

    #[test]
    fn blank_bio_message_takes_precedence_over_length() {
        let form = FormData {
            bio: " ".repeat(600),
            ..valid_form()
        };
        let errors = validate_step(WizardStep::BasicInformation, &form);
        assert_eq!(errors.get(FormField::Bio), Some("Bio is required"));
    }

    #[test]
    fn step_two_requires_selections_and_experience() {
        let errors = validate_step(WizardStep::ProfessionalDetails, &FormData::default());

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(FormField::SelectedCategories),
            Some("Please select at least one category")
        );
        assert_eq!(
            errors.get(FormField::SelectedLanguages),
            Some("Please select at least one language")
        );
        assert_eq!(
            errors.get(FormField::Experience),
            Some("Please select your experience level")
        );
        assert!(!errors.contains(FormField::FullName));
    }

    #[test]
    fn step_three_requires_price_and_location() {
        let form = FormData {
            location: "  ".to_string(),
            ..FormData::default()
        };
        let errors = validate_step(WizardStep::PricingAndLocation, &form);

        assert_eq!(errors.get(FormField::PriceRange), Some("Please select a price range"));
        assert_eq!(errors.get(FormField::Location), Some("Location is required"));
    }

    #[test]
    fn valid_form_passes_every_step() {
        let form = valid_form();
        for n in 1..=3 {
            let step = WizardStep::from_number(n).unwrap();
            assert!(validate_step(step, &form).is_empty(), "step {n}");
        }
    }

    #[test]
    fn lenient_mode_accepts_unlisted_values() {
        let form = FormData {
            selected_categories: ["Puppeteer".to_string()].into(),
            ..valid_form()
        };
        assert!(validate_step(WizardStep::ProfessionalDetails, &form).is_empty());
    }

    #[test]
    fn strict_mode_rejects_unlisted_values() {
        let validator = StepValidator::strict(FormOptions::default());
        let form = FormData {
            selected_categories: ["Puppeteer".to_string()].into(),
            selected_languages: ["Klingon".to_string()].into(),
            experience: "50+".to_string(),
            price_range: "free".to_string(),
            ..valid_form()
        };

        let step_two = validator.validate(WizardStep::ProfessionalDetails, &form);
        assert_eq!(
            step_two.get(FormField::SelectedCategories),
            Some("Please select categories from the list")
        );
        assert_eq!(
            step_two.get(FormField::SelectedLanguages),
            Some("Please select languages from the list")
        );
        assert_eq!(
            step_two.get(FormField::Experience),
            Some("Please select a valid experience level")
        );

        let step_three = validator.validate(WizardStep::PricingAndLocation, &form);
        assert_eq!(
            step_three.get(FormField::PriceRange),
            Some("Please select a valid price range")
        );
    }

    #[test]
    fn strict_mode_keeps_required_messages() {
        let validator = StepValidator::strict(FormOptions::default());
        let errors = validator.validate(WizardStep::ProfessionalDetails, &FormData::default());
        assert_eq!(
            errors.get(FormField::SelectedCategories),
            Some("Please select at least one category")
        );
    }
}

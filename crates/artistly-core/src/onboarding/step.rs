use serde::{Deserialize, Serialize};

/// Total number of steps in the onboarding wizard.
pub const TOTAL_STEPS: u8 = 3;

/// One page of the onboarding wizard.
///
/// Each step owns a disjoint subset of the form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInformation,
    ProfessionalDetails,
    PricingAndLocation,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::BasicInformation;
    pub const LAST: WizardStep = WizardStep::PricingAndLocation;

    /// Convert a 1-based step number.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::BasicInformation),
            2 => Some(Self::ProfessionalDetails),
            3 => Some(Self::PricingAndLocation),
            _ => None,
        }
    }

    /// 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInformation => 1,
            Self::ProfessionalDetails => 2,
            Self::PricingAndLocation => 3,
        }
    }

    /// Following step, clamped at the last one.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// Preceding step, clamped at the first one.
    pub fn previous(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInformation => "Basic Information",
            Self::ProfessionalDetails => "Professional Details",
            Self::PricingAndLocation => "Pricing & Location",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::BasicInformation => "Tell us about yourself",
            Self::ProfessionalDetails => "Share your talents and skills",
            Self::PricingAndLocation => "Set your rates and availability",
        }
    }

    /// Completion percentage shown in the progress bar.
    pub fn progress_percent(self) -> u8 {
        ((u16::from(self.number()) * 100) / u16::from(TOTAL_STEPS)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_are_clamped() {
        assert_eq!(WizardStep::LAST.next(), WizardStep::LAST);
        assert_eq!(WizardStep::FIRST.previous(), WizardStep::FIRST);
        assert_eq!(
            WizardStep::BasicInformation.next(),
            WizardStep::ProfessionalDetails
        );
        assert_eq!(
            WizardStep::PricingAndLocation.previous(),
            WizardStep::ProfessionalDetails
        );
    }

    #[test]
    fn step_numbers_round_trip() {
        for n in 1..=TOTAL_STEPS {
            assert_eq!(WizardStep::from_number(n).map(WizardStep::number), Some(n));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(4), None);
    }

    #[test]
    fn progress_percent_truncates() {
        assert_eq!(WizardStep::BasicInformation.progress_percent(), 33);
        assert_eq!(WizardStep::ProfessionalDetails.progress_percent(), 66);
        assert_eq!(WizardStep::PricingAndLocation.progress_percent(), 100);
    }
}

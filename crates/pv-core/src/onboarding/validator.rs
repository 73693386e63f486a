//! Validation rules for onboarding configuration.
//!
//! Stateless checks over [`ScreenConfig`] and [`OnboardingSettings`].
//! Violations are structured error kinds rather than free-text strings, and a
//! report keeps every violation found, first rule broken first. Callers that
//! only surface one message can rely on `errors()[0]` naming the first
//! violated category.

use std::collections::HashSet;

use thiserror::Error;

use super::model::{
    OnboardingSettings, ScreenConfig, ValidationLimits, ANIMATION_SPEEDS, ANIMATION_TYPES,
    INTERACTION_TYPES, PROGRESS_INDICATOR_STYLES, THEMES,
};

/// A single validation rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("screen is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("screen `{id}` duration {actual}ms is outside the allowed {min}..={max}ms range")]
    DurationOutOfRange {
        id: String,
        actual: u64,
        min: u64,
        max: u64,
    },

    #[error("screen `{id}` has unknown animation type `{value}`")]
    UnknownAnimationType { id: String, value: String },

    #[error("screen `{id}` has unknown interaction type `{value}`")]
    UnknownInteractionType { id: String, value: String },

    #[error("screen ids must be unique, `{id}` appears more than once")]
    DuplicateScreenId { id: String },

    #[error("{actual} screens is below the required minimum of {min}")]
    TooFewScreens { actual: usize, min: usize },

    #[error("{actual} screens exceeds the maximum of {max}")]
    TooManyScreens { actual: usize, max: usize },

    #[error("unknown theme `{value}`")]
    UnknownTheme { value: String },

    #[error("unknown animation speed `{value}`")]
    UnknownAnimationSpeed { value: String },

    #[error("unknown progress indicator style `{value}`")]
    UnknownIndicatorStyle { value: String },
}

/// Outcome of a validation pass. Valid iff no violation was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Build a report from already-collected violations.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn append(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}

/// Validation seam used by the config loader.
///
/// Implementations must be stateless and side-effect free. The loader holds
/// one behind an `Arc` so hosts can swap rule sets and tests can interpose
/// counting or rejecting doubles.
pub trait ConfigValidator: Send + Sync {
    fn validate_screen(&self, screen: &ScreenConfig) -> ValidationReport;
    fn validate_settings(&self, settings: &OnboardingSettings) -> ValidationReport;
}

/// Production validator enforcing the carousel rules against a set of
/// [`ValidationLimits`].
#[derive(Debug, Clone, Default)]
pub struct RuleValidator {
    limits: ValidationLimits,
}

impl RuleValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }
}

impl ConfigValidator for RuleValidator {
    fn validate_screen(&self, screen: &ScreenConfig) -> ValidationReport {
        let mut report = ValidationReport::default();

        let required = [
            ("id", &screen.id),
            ("title", &screen.title),
            ("subtitle", &screen.subtitle),
            ("illustration", &screen.illustration),
            ("animation_type", &screen.animation_type),
            ("interaction_type", &screen.interaction_type),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                report.push(ValidationError::MissingField { field });
            }
        }

        // A document without a duration deserializes to 0, which the range
        // rule reports; no separate missing-field kind for it.
        if screen.duration_ms < self.limits.min_duration_ms
            || screen.duration_ms > self.limits.max_duration_ms
        {
            report.push(ValidationError::DurationOutOfRange {
                id: screen.id.clone(),
                actual: screen.duration_ms,
                min: self.limits.min_duration_ms,
                max: self.limits.max_duration_ms,
            });
        }

        // Membership checks are skipped for fields already reported missing.
        if !screen.animation_type.trim().is_empty()
            && !ANIMATION_TYPES.contains(&screen.animation_type.as_str())
        {
            report.push(ValidationError::UnknownAnimationType {
                id: screen.id.clone(),
                value: screen.animation_type.clone(),
            });
        }

        if !screen.interaction_type.trim().is_empty()
            && !INTERACTION_TYPES.contains(&screen.interaction_type.as_str())
        {
            report.push(ValidationError::UnknownInteractionType {
                id: screen.id.clone(),
                value: screen.interaction_type.clone(),
            });
        }

        report
    }

    fn validate_settings(&self, settings: &OnboardingSettings) -> ValidationReport {
        let mut report = ValidationReport::default();

        // Full-list scan, first duplicate reported.
        let mut seen = HashSet::new();
        for screen in &settings.screens {
            if !seen.insert(screen.id.as_str()) {
                report.push(ValidationError::DuplicateScreenId {
                    id: screen.id.clone(),
                });
                break;
            }
        }

        let count = settings.screens.len();
        if count < self.limits.min_screens {
            report.push(ValidationError::TooFewScreens {
                actual: count,
                min: self.limits.min_screens,
            });
        } else if count > self.limits.max_screens {
            report.push(ValidationError::TooManyScreens {
                actual: count,
                max: self.limits.max_screens,
            });
        }

        if !THEMES.contains(&settings.theme.as_str()) {
            report.push(ValidationError::UnknownTheme {
                value: settings.theme.clone(),
            });
        }

        if !ANIMATION_SPEEDS.contains(&settings.animation_speed.as_str()) {
            report.push(ValidationError::UnknownAnimationSpeed {
                value: settings.animation_speed.clone(),
            });
        }

        if !PROGRESS_INDICATOR_STYLES.contains(&settings.progress_indicator_style.as_str()) {
            report.push(ValidationError::UnknownIndicatorStyle {
                value: settings.progress_indicator_style.clone(),
            });
        }

        for screen in &settings.screens {
            report.append(self.validate_screen(screen));
        }

        report
    }
}

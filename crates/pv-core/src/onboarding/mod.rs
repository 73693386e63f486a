//! Onboarding configuration domain
//!
//! The static shape of the onboarding carousel (screens and resolved
//! settings), the shipped defaults and the reduced fallback, the validation
//! rules enforcing structural and business invariants, and the record of a
//! user's progress through the flow.

pub mod defaults;
pub mod model;
pub mod progress;
pub mod validator;

pub use defaults::{default_screens, fallback_settings};
pub use model::{
    OnboardingOverrides, OnboardingSettings, ScreenConfig, ValidationLimits, ANIMATION_SPEEDS,
    ANIMATION_TYPES, INTERACTION_TYPES, PROGRESS_INDICATOR_STYLES, THEMES,
};
pub use progress::OnboardingProgress;
pub use validator::{ConfigValidator, RuleValidator, ValidationError, ValidationReport};

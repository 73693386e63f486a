//! Onboarding progress domain model
//!
//! Records how far a user got through the carousel. Persisted through
//! [`crate::ports::OnboardingProgressPort`]; this crate does not decide
//! where or how.

/// Progress through the onboarding carousel.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OnboardingProgress {
    /// Last step index the user reached.
    pub current_step: u32,
    /// Whether the user finished the carousel.
    pub completed: bool,
    /// Whether the user dismissed the carousel early.
    pub skipped: bool,
}

impl Default for OnboardingProgress {
    fn default() -> Self {
        Self {
            current_step: 0,
            completed: false,
            skipped: false,
        }
    }
}

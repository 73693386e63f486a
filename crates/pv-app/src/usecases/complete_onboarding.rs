//! Use case for completing onboarding.

use std::sync::Arc;

use pv_core::ports::OnboardingProgressPort;

/// Use case for completing onboarding.
///
/// Marks the flow as finished in the persistent progress record.
pub struct CompleteOnboarding {
    progress: Arc<dyn OnboardingProgressPort>,
}

impl CompleteOnboarding {
    /// Create a new CompleteOnboarding use case from trait objects.
    pub fn new(progress: Arc<dyn OnboardingProgressPort>) -> Self {
        Self { progress }
    }

    /// Mark onboarding as completed.
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut state = self.progress.get_state().await?;
        state.completed = true;
        self.progress.set_state(&state).await
    }
}

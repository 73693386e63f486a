//! Use case for skipping onboarding.

use std::sync::Arc;

use pv_core::ports::OnboardingProgressPort;

/// Use case for dismissing the carousel early.
///
/// Records the skip in the persistent progress record; the step the user
/// stood on is kept so a future flow can resume or report it.
pub struct SkipOnboarding {
    progress: Arc<dyn OnboardingProgressPort>,
}

impl SkipOnboarding {
    /// Create a new SkipOnboarding use case from trait objects.
    pub fn new(progress: Arc<dyn OnboardingProgressPort>) -> Self {
        Self { progress }
    }

    /// Mark onboarding as skipped.
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut state = self.progress.get_state().await?;
        state.skipped = true;
        self.progress.set_state(&state).await
    }
}

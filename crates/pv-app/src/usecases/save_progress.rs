//! Use case for recording how far the user got

use std::sync::Arc;

use pv_core::ports::OnboardingProgressPort;

/// Use case for persisting the step the user currently stands on.
///
/// Read-modify-write through the progress port; other fields of the record
/// are preserved.
pub struct SaveProgress {
    progress: Arc<dyn OnboardingProgressPort>,
}

impl SaveProgress {
    /// Create a new SaveProgress use case from trait objects.
    pub fn new(progress: Arc<dyn OnboardingProgressPort>) -> Self {
        Self { progress }
    }

    /// Record `step_index` as the last step reached.
    pub async fn execute(&self, step_index: u32) -> anyhow::Result<()> {
        let mut state = self.progress.get_state().await?;
        state.current_step = step_index;
        self.progress.set_state(&state).await
    }
}

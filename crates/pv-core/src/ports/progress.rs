//! Onboarding progress port
//!
//! Contract for persisting and retrieving onboarding progress.
//! Implementations are provided by the infrastructure layer (e.g. file-based
//! storage).

use async_trait::async_trait;

use crate::onboarding::OnboardingProgress;

#[async_trait]
pub trait OnboardingProgressPort: Send + Sync {
    /// Get the current progress record
    async fn get_state(&self) -> anyhow::Result<OnboardingProgress>;

    /// Replace the stored progress record
    async fn set_state(&self, progress: &OnboardingProgress) -> anyhow::Result<()>;

    /// Reset progress (for testing or re-onboarding)
    async fn reset(&self) -> anyhow::Result<()>;

    /// Check whether the user is done with onboarding, either way
    async fn is_finished(&self) -> anyhow::Result<bool> {
        let state = self.get_state().await?;
        Ok(state.completed || state.skipped)
    }
}

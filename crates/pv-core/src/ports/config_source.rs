//! Overrides source port
//!
//! Contract for supplying an optional overrides document to the config
//! loader. Implementations are provided by the infrastructure layer (e.g. a
//! JSON file shipped next to the application data).

use async_trait::async_trait;

use crate::onboarding::OnboardingOverrides;

#[async_trait]
pub trait ConfigSourcePort: Send + Sync {
    /// Fetch the overrides document.
    ///
    /// `Ok(None)` means the deployment ships no overrides; an error means a
    /// document exists but could not be read or parsed.
    async fn load(&self) -> anyhow::Result<Option<OnboardingOverrides>>;
}

//! Use case for retrieving the resolved onboarding settings

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use pv_core::OnboardingSettings;

use crate::config_loader::ConfigLoader;

/// Use case for retrieving the full resolved onboarding settings.
pub struct GetOnboardingSettings {
    loader: Arc<ConfigLoader>,
}

impl GetOnboardingSettings {
    /// Create a new GetOnboardingSettings use case.
    pub fn new(loader: Arc<ConfigLoader>) -> Self {
        Self { loader }
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Result<Arc<OnboardingSettings>> {
        let span = info_span!("usecase.get_onboarding_settings.execute");

        async {
            let settings = self.loader.load(None).await?;
            info!("onboarding settings resolved");
            Ok(settings)
        }
        .instrument(span)
        .await
    }
}

//! Use case for retrieving the resolved onboarding screen list

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use pv_core::ScreenConfig;

use crate::config_loader::ConfigLoader;

/// Use case for retrieving the screens the container should render.
///
/// Thin wrapper over the loader: resolves the configuration (cache semantics
/// included) and hands back the ordered screen list.
pub struct GetScreensConfig {
    loader: Arc<ConfigLoader>,
}

impl GetScreensConfig {
    /// Create a new GetScreensConfig use case.
    pub fn new(loader: Arc<ConfigLoader>) -> Self {
        Self { loader }
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Result<Vec<ScreenConfig>> {
        let span = info_span!("usecase.get_screens_config.execute");

        async {
            let settings = self.loader.load(None).await?;
            info!(screens = settings.screens.len(), "screen list resolved");
            Ok(settings.screens.clone())
        }
        .instrument(span)
        .await
    }
}

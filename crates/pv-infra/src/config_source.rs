//! File-backed onboarding overrides source
//!
//! Reads an optional JSON overrides document from the application data
//! directory. A deployment that ships no document is not an error; a
//! document that exists but cannot be read or parsed is.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use pv_core::onboarding::OnboardingOverrides;
use pv_core::ports::ConfigSourcePort;

pub const DEFAULT_OVERRIDES_FILE: &str = "onboarding.json";

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Create a source reading the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a source with base dir and the default file name
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_OVERRIDES_FILE),
        }
    }
}

#[async_trait]
impl ConfigSourcePort for FileConfigSource {
    async fn load(&self) -> Result<Option<OnboardingOverrides>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no onboarding overrides document");
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("read onboarding overrides failed: {}", self.path.display())
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let overrides: OnboardingOverrides = serde_json::from_str(&content).with_context(|| {
            format!("parse onboarding overrides failed: {}", self.path.display())
        })?;

        Ok(Some(overrides))
    }
}

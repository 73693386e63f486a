//! File-based onboarding progress repository
//!
//! Persists the progress record as JSON in the application data directory.
//! Writes go through a temp file and a rename, so a crash mid-write leaves
//! either the previous record or the new one, never a half-written file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use pv_core::onboarding::OnboardingProgress;
use pv_core::ports::OnboardingProgressPort;

pub const DEFAULT_PROGRESS_FILE: &str = ".onboarding_progress";

pub struct FileProgressRepository {
    path: PathBuf,
}

impl FileProgressRepository {
    /// Create repository with custom file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create repository with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            path: base_dir.join(filename.into()),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_PROGRESS_FILE),
        }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create progress dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp progress failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp progress to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl OnboardingProgressPort for FileProgressRepository {
    async fn get_state(&self) -> Result<OnboardingProgress> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(OnboardingProgress::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("read onboarding progress failed: {}", self.path.display())
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(OnboardingProgress::default());
        }

        serde_json::from_str(&content).with_context(|| {
            format!("parse onboarding progress failed: {}", self.path.display())
        })
    }

    async fn set_state(&self, progress: &OnboardingProgress) -> Result<()> {
        let content = serde_json::to_string_pretty(progress)
            .context("serialize onboarding progress failed")?;

        self.atomic_write(&content).await
    }

    async fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("remove onboarding progress failed: {}", self.path.display())
            }),
        }
    }
}

//! Onboarding configuration loader.
//!
//! Produces a ready-to-use, validated [`OnboardingSettings`]: merges an
//! overrides document over the shipped defaults, validates the result, and
//! caches it for the process lifetime. An invalid configuration degrades to
//! the reduced, always-skippable fallback rather than failing the caller.
//!
//! The loader is an explicit instance owning the single cache slot: the
//! hosting application constructs one and passes it by reference to call
//! sites. Cached values are handed out behind an `Arc`, so callers cannot
//! mutate the canonical configuration in place.

use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use pv_core::onboarding::{fallback_settings, ConfigValidator};
use pv_core::ports::ConfigSourcePort;
use pv_core::{OnboardingOverrides, OnboardingSettings, ScreenConfig};

pub struct ConfigLoader {
    validator: Arc<dyn ConfigValidator>,
    source: Option<Arc<dyn ConfigSourcePort>>,
    defaults: OnboardingSettings,
    cache: RwLock<Option<Arc<OnboardingSettings>>>,
}

impl ConfigLoader {
    /// Create a loader over the shipped defaults, no overrides source.
    pub fn new(validator: Arc<dyn ConfigValidator>) -> Self {
        Self {
            validator,
            source: None,
            defaults: OnboardingSettings::default(),
            cache: RwLock::new(None),
        }
    }

    /// Create a loader that consults `source` for an overrides document on
    /// every cache-miss load that got no explicit overrides argument.
    pub fn with_source(validator: Arc<dyn ConfigValidator>, source: Arc<dyn ConfigSourcePort>) -> Self {
        Self {
            source: Some(source),
            ..Self::new(validator)
        }
    }

    /// Create a loader over non-default base settings.
    pub fn with_defaults(validator: Arc<dyn ConfigValidator>, defaults: OnboardingSettings) -> Self {
        Self {
            defaults,
            ..Self::new(validator)
        }
    }

    /// Resolve the onboarding configuration.
    ///
    /// Cache hits return the previously resolved value without re-validating.
    /// On a miss, `overrides` (or, absent that, the configured source's
    /// document) is merged over the defaults and validated. A valid result is
    /// cached and returned; an invalid one is logged and replaced by the
    /// fallback, which is returned but never cached, so a later call
    /// re-validates.
    ///
    /// The only error this method propagates is a configured source failing
    /// to produce its document. Without a source it is infallible.
    pub async fn load(
        &self,
        overrides: Option<OnboardingOverrides>,
    ) -> Result<Arc<OnboardingSettings>> {
        if let Some(cached) = self.cached() {
            debug!("returning cached onboarding configuration");
            return Ok(cached);
        }

        let overrides = match overrides {
            Some(overrides) => Some(overrides),
            None => match &self.source {
                Some(source) => source
                    .load()
                    .await
                    .context("load onboarding overrides from source failed")?,
                None => None,
            },
        };

        let merged = overrides.unwrap_or_default().apply_to(self.defaults.clone());

        let report = self.validator.validate_settings(&merged);
        if report.is_valid() {
            let resolved = Arc::new(merged);
            *self.cache.write().unwrap() = Some(resolved.clone());
            debug!(
                screens = resolved.screens.len(),
                "onboarding configuration resolved and cached"
            );
            return Ok(resolved);
        }

        for err in report.errors() {
            warn!(%err, "onboarding configuration validation error");
        }
        error!(
            error_count = report.errors().len(),
            "onboarding configuration rejected"
        );
        info!("serving the reduced skippable onboarding flow");

        Ok(Arc::new(fallback_settings()))
    }

    /// Look up a single screen in the resolved configuration.
    ///
    /// Uses the same cache semantics as [`load`](Self::load). Returns `None`
    /// when no screen carries `screen_id`, and also when the underlying load
    /// fails, in which case the failure is logged; this method never
    /// propagates an error.
    pub async fn load_screen(&self, screen_id: &str) -> Option<ScreenConfig> {
        match self.load(None).await {
            Ok(settings) => settings.screens.iter().find(|s| s.id == screen_id).cloned(),
            Err(err) => {
                error!(%err, screen_id, "screen lookup aborted, configuration load failed");
                None
            }
        }
    }

    /// Drop any cached configuration and resolve afresh.
    pub async fn reload(
        &self,
        overrides: Option<OnboardingOverrides>,
    ) -> Result<Arc<OnboardingSettings>> {
        self.clear_cache();
        self.load(overrides).await
    }

    /// Drop the cached configuration; the next load re-validates.
    pub fn clear_cache(&self) {
        *self.cache.write().unwrap() = None;
    }

    /// Whether a resolved configuration is currently cached.
    pub fn has_cache(&self) -> bool {
        self.cache.read().unwrap().is_some()
    }

    /// The cached configuration, without triggering a load.
    pub fn cached(&self) -> Option<Arc<OnboardingSettings>> {
        self.cache.read().unwrap().clone()
    }
}

/// Convenience wrapper delegating to [`ConfigLoader::load`].
pub async fn load_onboarding_config(
    loader: &ConfigLoader,
    overrides: Option<OnboardingOverrides>,
) -> Result<Arc<OnboardingSettings>> {
    loader.load(overrides).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pv_core::onboarding::{RuleValidator, ValidationError, ValidationReport};
    use pv_core::ScreenConfig;

    /// Production rules plus a call counter on the settings-level entry
    /// point, so cache behavior is observable.
    struct CountingValidator {
        inner: RuleValidator,
        settings_calls: AtomicUsize,
    }

    impl CountingValidator {
        fn new() -> Self {
            Self {
                inner: RuleValidator::default(),
                settings_calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.settings_calls.load(Ordering::SeqCst)
        }
    }

    impl ConfigValidator for CountingValidator {
        fn validate_screen(&self, screen: &ScreenConfig) -> ValidationReport {
            self.inner.validate_screen(screen)
        }

        fn validate_settings(&self, settings: &OnboardingSettings) -> ValidationReport {
            self.settings_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.validate_settings(settings)
        }
    }

    /// Rejects everything, regardless of input.
    struct RejectingValidator;

    impl ConfigValidator for RejectingValidator {
        fn validate_screen(&self, _screen: &ScreenConfig) -> ValidationReport {
            ValidationReport::from_errors(vec![ValidationError::MissingField { field: "id" }])
        }

        fn validate_settings(&self, _settings: &OnboardingSettings) -> ValidationReport {
            ValidationReport::from_errors(vec![ValidationError::TooFewScreens {
                actual: 0,
                min: 1,
            }])
        }
    }

    struct FailingSource;

    #[async_trait]
    impl pv_core::ports::ConfigSourcePort for FailingSource {
        async fn load(&self) -> anyhow::Result<Option<OnboardingOverrides>> {
            Err(anyhow::anyhow!("source unavailable"))
        }
    }

    struct FixedSource(OnboardingOverrides);

    #[async_trait]
    impl pv_core::ports::ConfigSourcePort for FixedSource {
        async fn load(&self) -> anyhow::Result<Option<OnboardingOverrides>> {
            Ok(Some(self.0.clone()))
        }
    }

    #[tokio::test]
    async fn default_load_resolves_the_shipped_defaults() {
        let validator = Arc::new(CountingValidator::new());
        let loader = ConfigLoader::new(validator.clone());

        let settings = loader.load(None).await.unwrap();

        assert_eq!(*settings, OnboardingSettings::default());
        assert_eq!(validator.calls(), 1);
    }

    #[tokio::test]
    async fn overridden_fields_win_and_the_rest_retain_defaults() {
        let loader = ConfigLoader::new(Arc::new(RuleValidator::default()));
        let overrides = OnboardingOverrides {
            theme: Some("dark".to_string()),
            skip_enabled: Some(false),
            ..Default::default()
        };

        let settings = loader.load(Some(overrides)).await.unwrap();
        let defaults = OnboardingSettings::default();

        assert_eq!(settings.theme, "dark");
        assert!(!settings.skip_enabled);
        assert_eq!(settings.screens, defaults.screens);
        assert_eq!(settings.animation_speed, defaults.animation_speed);
    }

    #[tokio::test]
    async fn second_load_hits_the_cache_without_revalidating() {
        let validator = Arc::new(CountingValidator::new());
        let loader = ConfigLoader::new(validator.clone());

        let first = loader.load(None).await.unwrap();
        let second = loader.load(None).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(validator.calls(), 1);
    }

    #[tokio::test]
    async fn a_cached_value_wins_over_new_overrides_until_reload() {
        let validator = Arc::new(CountingValidator::new());
        let loader = ConfigLoader::new(validator.clone());

        loader.load(None).await.unwrap();
        let overrides = OnboardingOverrides {
            theme: Some("dark".to_string()),
            ..Default::default()
        };
        let second = loader.load(Some(overrides)).await.unwrap();

        assert_eq!(second.theme, OnboardingSettings::default().theme);
        assert_eq!(validator.calls(), 1);
    }

    #[tokio::test]
    async fn invalid_configuration_degrades_to_the_skippable_fallback() {
        let loader = ConfigLoader::new(Arc::new(RejectingValidator));

        let settings = loader.load(None).await.unwrap();

        assert!(settings.screens.len() < OnboardingSettings::default().screens.len());
        assert!(settings.skip_enabled);
    }

    #[tokio::test]
    async fn the_fallback_is_not_cached() {
        let loader = ConfigLoader::new(Arc::new(RejectingValidator));

        loader.load(None).await.unwrap();

        assert!(!loader.has_cache());
        assert!(loader.cached().is_none());
    }

    #[tokio::test]
    async fn unknown_screen_lookup_resolves_to_none() {
        let loader = ConfigLoader::new(Arc::new(RuleValidator::default()));
        assert!(loader.load_screen("nonexistent").await.is_none());
    }

    #[tokio::test]
    async fn known_screen_lookup_returns_the_default_screen() {
        let loader = ConfigLoader::new(Arc::new(RuleValidator::default()));

        let screen = loader.load_screen("welcome").await.unwrap();

        let expected = OnboardingSettings::default()
            .screens
            .into_iter()
            .find(|s| s.id == "welcome")
            .unwrap();
        assert_eq!(screen, expected);
    }

    #[tokio::test]
    async fn reload_invalidates_the_cache_and_revalidates() {
        let validator = Arc::new(CountingValidator::new());
        let loader = ConfigLoader::new(validator.clone());

        loader.load(None).await.unwrap();
        let overrides = OnboardingOverrides {
            theme: Some("light".to_string()),
            ..Default::default()
        };
        loader.reload(Some(overrides)).await.unwrap();

        assert_eq!(validator.calls(), 2);
        assert_eq!(loader.cached().unwrap().theme, "light");
    }

    #[tokio::test]
    async fn clear_cache_forces_the_next_load_to_revalidate() {
        let validator = Arc::new(CountingValidator::new());
        let loader = ConfigLoader::new(validator.clone());

        loader.load(None).await.unwrap();
        assert!(loader.has_cache());

        loader.clear_cache();
        assert!(!loader.has_cache());

        loader.load(None).await.unwrap();
        assert_eq!(validator.calls(), 2);
    }

    #[tokio::test]
    async fn screen_lookup_absorbs_a_failing_source() {
        let loader = ConfigLoader::with_source(
            Arc::new(RuleValidator::default()),
            Arc::new(FailingSource),
        );

        assert!(loader.load_screen("welcome").await.is_none());
    }

    #[tokio::test]
    async fn a_failing_source_propagates_from_load() {
        let loader = ConfigLoader::with_source(
            Arc::new(RuleValidator::default()),
            Arc::new(FailingSource),
        );

        let err = loader.load(None).await.unwrap_err();
        assert!(err.to_string().contains("overrides from source"));
    }

    #[tokio::test]
    async fn the_source_document_is_applied_on_a_cache_miss() {
        let overrides = OnboardingOverrides {
            animation_speed: Some("fast".to_string()),
            ..Default::default()
        };
        let loader = ConfigLoader::with_source(
            Arc::new(RuleValidator::default()),
            Arc::new(FixedSource(overrides)),
        );

        let settings = loader.load(None).await.unwrap();
        assert_eq!(settings.animation_speed, "fast");
    }

    #[tokio::test]
    async fn explicit_overrides_win_over_the_source_document() {
        let from_source = OnboardingOverrides {
            theme: Some("dark".to_string()),
            ..Default::default()
        };
        let loader = ConfigLoader::with_source(
            Arc::new(RuleValidator::default()),
            Arc::new(FixedSource(from_source)),
        );

        let explicit = OnboardingOverrides {
            theme: Some("light".to_string()),
            ..Default::default()
        };
        let settings = loader.load(Some(explicit)).await.unwrap();
        assert_eq!(settings.theme, "light");
    }

    #[tokio::test]
    async fn custom_defaults_are_the_merge_base() {
        let mut defaults = OnboardingSettings::default();
        defaults.theme = "dark".to_string();
        let loader = ConfigLoader::with_defaults(Arc::new(RuleValidator::default()), defaults);

        let settings = loader.load(None).await.unwrap();
        assert_eq!(settings.theme, "dark");
    }

    #[tokio::test]
    async fn the_free_function_delegates_to_the_loader() {
        let validator = Arc::new(CountingValidator::new());
        let loader = ConfigLoader::new(validator.clone());

        let settings = load_onboarding_config(&loader, None).await.unwrap();

        assert_eq!(*settings, OnboardingSettings::default());
        assert_eq!(validator.calls(), 1);
        assert!(loader.has_cache());
    }
}

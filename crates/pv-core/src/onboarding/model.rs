//! Onboarding configuration models
//!
//! Enumerated fields are carried as strings and checked against the closed
//! sets below by the validator, which is the single enforcement point; a
//! document with an unknown value still deserializes and is reported
//! rule-by-rule instead of failing parse.

use serde::{Deserialize, Serialize};

/// Allowed values for [`ScreenConfig::animation_type`].
pub const ANIMATION_TYPES: &[&str] = &["fade-in", "slide-up", "scale", "morphing", "parallax"];

/// Allowed values for [`ScreenConfig::interaction_type`].
pub const INTERACTION_TYPES: &[&str] = &["tap", "swipe", "auto"];

/// Allowed values for [`OnboardingSettings::theme`].
pub const THEMES: &[&str] = &["light", "dark", "auto"];

/// Allowed values for [`OnboardingSettings::animation_speed`].
pub const ANIMATION_SPEEDS: &[&str] = &["slow", "normal", "fast"];

/// Allowed values for [`OnboardingSettings::progress_indicator_style`].
pub const PROGRESS_INDICATOR_STYLES: &[&str] = &["dots", "bar", "none"];

/// One onboarding screen/card.
///
/// Every field carries a serde default so partially-specified documents
/// deserialize; the validator reports what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Unique identifier within a settings' screen list.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Asset identifier, opaque to this crate.
    pub illustration: String,
    pub animation_type: String,
    pub interaction_type: String,
    /// Display duration in milliseconds, bounded by [`ValidationLimits`].
    pub duration_ms: u64,
}

/// The resolved onboarding configuration handed to the UI container.
///
/// Constructed by merging an [`OnboardingOverrides`] over the shipped
/// defaults and validating once; cached behind an `Arc` by the loader so
/// callers cannot mutate it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSettings {
    /// Ordered screen list.
    pub screens: Vec<ScreenConfig>,
    pub theme: String,
    pub skip_enabled: bool,
    pub animation_speed: String,
    pub progress_indicator_style: String,
}

/// Partial override document supplied by the caller or a config source.
///
/// Absent fields retain defaults. The merge is shallow at the top level:
/// a supplied `screens` list replaces the default list wholesale, individual
/// screens are never merged field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingOverrides {
    pub screens: Option<Vec<ScreenConfig>>,
    pub theme: Option<String>,
    pub skip_enabled: Option<bool>,
    pub animation_speed: Option<String>,
    pub progress_indicator_style: Option<String>,
}

impl OnboardingOverrides {
    /// Shallow merge over `base`: present fields win.
    pub fn apply_to(self, base: OnboardingSettings) -> OnboardingSettings {
        OnboardingSettings {
            screens: self.screens.unwrap_or(base.screens),
            theme: self.theme.unwrap_or(base.theme),
            skip_enabled: self.skip_enabled.unwrap_or(base.skip_enabled),
            animation_speed: self.animation_speed.unwrap_or(base.animation_speed),
            progress_indicator_style: self
                .progress_indicator_style
                .unwrap_or(base.progress_indicator_style),
        }
    }

    /// True when no field is set, i.e. the merge would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.screens.is_none()
            && self.theme.is_none()
            && self.skip_enabled.is_none()
            && self.animation_speed.is_none()
            && self.progress_indicator_style.is_none()
    }
}

/// Numeric bounds enforced by the validator.
///
/// Defaults carry the shipped product values; hosts with different carousel
/// constraints construct their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    pub min_screens: usize,
    pub max_screens: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_duration_ms: 1000,
            max_duration_ms: 5000,
            min_screens: 1,
            max_screens: 10,
        }
    }
}

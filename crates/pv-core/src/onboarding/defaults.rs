//! Shipped default and fallback onboarding configurations.

use super::model::{OnboardingSettings, ScreenConfig};

fn screen(
    id: &str,
    title: &str,
    subtitle: &str,
    illustration: &str,
    animation_type: &str,
    interaction_type: &str,
    duration_ms: u64,
) -> ScreenConfig {
    ScreenConfig {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        illustration: illustration.to_string(),
        animation_type: animation_type.to_string(),
        interaction_type: interaction_type.to_string(),
        duration_ms,
    }
}

/// The full default carousel shown to a new user.
pub fn default_screens() -> Vec<ScreenConfig> {
    vec![
        screen(
            "welcome",
            "Welcome to PocketVault",
            "Your money, ready wherever you are",
            "wallet-hero",
            "fade-in",
            "tap",
            3000,
        ),
        screen(
            "security",
            "Keys that stay yours",
            "Your wallet is protected by keys only you hold",
            "shield-lock",
            "slide-up",
            "swipe",
            3500,
        ),
        screen(
            "cash-in",
            "Top up in seconds",
            "Add funds from a card or a nearby agent",
            "cash-in-card",
            "scale",
            "tap",
            2500,
        ),
        screen(
            "scan-pay",
            "Pay with a scan",
            "Point the camera at any PocketVault code",
            "qr-scan",
            "morphing",
            "auto",
            4000,
        ),
        screen(
            "ready",
            "You're all set",
            "Create your wallet and start moving money",
            "rocket",
            "parallax",
            "tap",
            2000,
        ),
    ]
}

impl Default for OnboardingSettings {
    fn default() -> Self {
        Self {
            screens: default_screens(),
            theme: "auto".to_string(),
            skip_enabled: true,
            animation_speed: "normal".to_string(),
            progress_indicator_style: "dots".to_string(),
        }
    }
}

/// Reduced configuration served when the requested configuration fails
/// validation: only the opening and closing screens, always skippable so a
/// broken config never traps the user in onboarding.
pub fn fallback_settings() -> OnboardingSettings {
    let mut screens = default_screens();
    screens.retain(|s| s.id == "welcome" || s.id == "ready");

    OnboardingSettings {
        screens,
        skip_enabled: true,
        ..OnboardingSettings::default()
    }
}

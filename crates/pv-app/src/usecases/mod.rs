//! Use cases consumed by the onboarding UI container.

pub mod complete_onboarding;
pub mod get_onboarding_settings;
pub mod get_screens_config;
pub mod save_progress;
pub mod skip_onboarding;

pub use complete_onboarding::CompleteOnboarding;
pub use get_onboarding_settings::GetOnboardingSettings;
pub use get_screens_config::GetScreensConfig;
pub use save_progress::SaveProgress;
pub use skip_onboarding::SkipOnboarding;

//! PocketVault Onboarding Orchestration Layer
//!
//! This crate contains the config loader and the use cases the onboarding
//! container invokes.

pub mod config_loader;
pub mod usecases;

pub use config_loader::{load_onboarding_config, ConfigLoader};

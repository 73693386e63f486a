//! # pv-infra
//!
//! Infrastructure adapters for PocketVault onboarding: file-backed
//! implementations of the pv-core ports.

pub mod config_source;
pub mod progress_state;

pub use config_source::FileConfigSource;
pub use progress_state::FileProgressRepository;

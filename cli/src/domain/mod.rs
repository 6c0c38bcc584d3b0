//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod compose;
pub mod env_file;
pub mod error;
pub mod lifecycle;
pub mod provider;
pub mod settings;
pub mod target;

pub use compose::{APP_SERVICE, ComposeStep, render_compose};
pub use env_file::EnvMap;
pub use error::{DeployError, ProviderError, SettingsError};
pub use lifecycle::{DeployOutcome, LifecycleState, Observation, Step};
pub use provider::{ApplyRequest, ProviderEdit, ProviderView};
pub use settings::PostizSettings;
pub use target::DeploymentTarget;

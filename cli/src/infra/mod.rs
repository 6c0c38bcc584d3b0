//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, runtime
//! probing, compose invocation, and filesystem access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod compose;
pub mod env_store;
pub mod fs;
pub mod runtime;
pub mod settings;
pub mod shortcut;

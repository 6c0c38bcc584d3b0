//! Integration tests for postiz CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Every invocation points the settings file and the deployment directory
//! into a temp dir and uses a runtime program that does not exist, so no
//! test touches `~/.postiz` or a real container runtime.

mod cli_tests;
mod providers_command;

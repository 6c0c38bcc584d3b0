//! Unit tests for postiz CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod architecture;
mod env_store;
mod property_tests;
mod provider_service;

//! Integration test support library
//!
//! Spawns the real application on an ephemeral port and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, check_test_env, TestServer};

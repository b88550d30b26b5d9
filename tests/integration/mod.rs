//! Shared fixtures for the integration tests.
#![allow(dead_code)]

pub mod mock_server;
pub mod scripted;

//! Client entry point for the analysis backend.
//!
//! Keep the public surface small: a [`CyberClient`] built once, shared by every
//! page, exposing one typed method per backend capability (see [`crate::api`]).

pub mod builder;
pub mod core;
pub mod error_classification;

pub use builder::CyberClientBuilder;
pub use core::CyberClient;
pub use error_classification::{cancelled, classify, precondition_failed, RawFailure};

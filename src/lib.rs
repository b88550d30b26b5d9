//! # cyber-ia-client
//!
//! Typed client and operation lifecycle for the Cyber IA security-analysis
//! backend.
//!
//! ## Overview
//!
//! The backend runs the analyses (port scans, SSH log audits, password
//! scoring, phishing detection, CVE scans, reports); this crate calls it. It
//! has two halves:
//!
//! - **Client**: one [`CyberClient`] shared by every page, with base URL,
//!   deadlines, bearer-token injection and a single place where failures
//!   become an [`ErrorEnvelope`].
//! - **Lifecycle**: one [`lifecycle::ActionSlot`] per user action that moves
//!   an operation from idle to running to succeeded or failed, and keeps
//!   exactly one notice per operation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cyber_ia_client::{CyberClient, dashboard::NetworkScanPage, lifecycle::TracingNotifier};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> cyber_ia_client::Result<()> {
//!     let client = CyberClient::builder()
//!         .base_url_override("http://localhost:8000")
//!         .build()?;
//!
//!     let page = NetworkScanPage::new(client, Arc::new(TracingNotifier));
//!     match page.quick_scan("192.168.1.1").await {
//!         Ok(scan) => println!("{} open ports", scan.open_ports.len()),
//!         Err(e) => eprintln!("{}", e.message()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | base URL, deadlines, pool and proxy settings |
//! | [`session`] | bearer token state and its persistence |
//! | [`transport`] | request description and the HTTP transport |
//! | [`client`] | client, builder and error classification |
//! | [`api`] | one typed call per backend capability |
//! | [`types`] | backend payload models |
//! | [`lifecycle`] | operations, action slots, notices |
//! | [`dashboard`] | pages wiring slots to the API |

pub mod api;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error_kind;
pub mod lifecycle;
pub mod session;
pub mod transport;
pub mod types;

pub use client::{CyberClient, CyberClientBuilder};
pub use config::ClientConfig;
pub use error_kind::ErrorKind;
pub use session::{KeyringTokenStore, MemoryTokenStore, Session, TokenStore};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorEnvelope};

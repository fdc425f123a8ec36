//! Client for the Proof identity-verification API.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod polling;
pub mod resources;
pub mod runtime;
pub mod types;

pub use client::Proof;
pub use config::ClientConfig;
pub use error::{ConfigError, ErrorInfo, ProofError, Result};
pub use polling::WaitOptions;

/// Version reported in the `User-Agent` header.
pub const VERSION: &str = env!("PROOF_SDK_VERSION");

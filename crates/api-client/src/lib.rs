//! Typed client for the EduDex Data API
//!
//! This crate translates structured method calls into HTTP requests
//! against `https://api.edudex.nl/data/v1/`, parses JSON responses into
//! the typed models of [`edudex_core`], and maps transport/protocol
//! failures onto a small typed error hierarchy.
//!
//! # Example
//!
//! ```rust,no_run
//! use edudex_api_client::EduDexClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Token from EDUDEX_API_TOKEN
//!     let client = EduDexClient::from_env()?;
//!
//!     for org in client.organizations().list().await? {
//!         println!(
//!             "{} ({})",
//!             org.localized_name(None).unwrap_or("-"),
//!             org.id.as_deref().unwrap_or("-")
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Every failure surfaces as an [`Error`] variant with the originating
//! HTTP status preserved, so callers can branch on kind
//! (`is_client_error`, `is_transient`) or on the exact code
//! (`status_code`). Nothing is retried and nothing is swallowed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;

pub use client::EduDexClient;
pub use config::ClientConfig;
pub use error::{ApiResult, Error, ValidationFailure};
pub use http::{HttpClient, RequestOptions};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::EduDexClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        Accreditors, Organizations, Programs, Suppliers, Validations,
    };
    pub use crate::error::{ApiResult, Error};
    pub use edudex_core::prelude::*;
}

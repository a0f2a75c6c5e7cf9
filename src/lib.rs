//! Async HTTP client for the pauta legislative-agenda backend
//!
//! This crate provides a configured HTTP client for the pauta REST API and a
//! typed facade over its Power BI read-only endpoints (eixos, temas and
//! proposicoes).
//!
//! # Features
//!
//! - **Environment-based configuration**: Load the base URL from `PAUTA_API_URL`
//!   with a localhost fallback
//! - **Fixed request timeout**: One 10 second timeout applies to every request
//! - **Concurrent aggregation**: `summary()` fans out the three collection
//!   fetches and joins them all-or-nothing
//! - **Request correlation**: Track requests with unique IDs for debugging
//!
//! # Example
//!
//! ```rust,no_run
//! use pauta_api_client::{PautaClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with environment configuration
//!     let client = PautaClient::new()?;
//!
//!     // Fetch one collection
//!     let eixos = client.agenda().eixos().await?;
//!     println!("Got {} eixos", eixos.len());
//!
//!     // Fetch all three concurrently
//!     let summary = client.agenda().summary().await?;
//!     println!("Got {} temas", summary.temas.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::PautaClient;
pub use config::ClientConfig;
pub use endpoints::agenda::Summary;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::PautaClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::agenda::{AgendaApi, Summary};
    pub use crate::endpoints::health::HealthApi;
    pub use crate::error::{ApiError, ApiResult};
}

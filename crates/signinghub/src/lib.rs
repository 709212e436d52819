//! signinghub - SigningHub API client
//!
//! This library wraps the SigningHub document signing REST API with a
//! session-centric API. All calls flow through a [`Session`], which holds
//! the bearer token and classifies every response into decoded JSON, raw
//! bytes, the untouched response, or a typed [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use serde_json::json;
//! use signinghub::{BaseUrl, ClientCredentials, Grant, PackageId, Session};
//!
//! # async fn example() -> Result<(), signinghub::Error> {
//! let mut session = Session::new(BaseUrl::new("https://api.signinghub.be")?)?;
//! let client = ClientCredentials::new("my-integration", "client-secret");
//! session
//!     .authenticate(&client, Grant::ClientCredentials, Some("alice@example.com"))
//!     .await?;
//!
//! let package = session
//!     .add_package(&json!({"package_name": "Contract"}))
//!     .await?
//!     .into_json()?;
//! let package = PackageId::new(package["package_id"].as_u64().unwrap_or_default());
//!
//! let pdf = Bytes::from(std::fs::read("contract.pdf").unwrap());
//! session
//!     .upload_document(package, pdf, "contract.pdf", "my-app", false)
//!     .await?;
//! session.share_document_package(package).await?;
//!
//! session.logout().await?;
//! # Ok(())
//! # }
//! ```

mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export primary types at crate root for convenience
pub use auth::{ClientCredentials, Grant, Session, SessionSnapshot};
pub use config::ClientConfig;
pub use error::Error;
pub use http::{ApiRequest, ApiResponse, RawResponse, Transport};
pub use types::{BaseUrl, DocumentId, PackageId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

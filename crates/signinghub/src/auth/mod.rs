//! Authentication types and session management.
//!
//! All API calls go through a [`Session`], which holds the bearer token and
//! its expiry.

mod credentials;
mod session;
mod tokens;

pub use credentials::{ClientCredentials, Grant};
pub use session::Session;
pub use tokens::{AccessToken, IssuedToken, RefreshToken, SessionSnapshot, TokenSnapshot};

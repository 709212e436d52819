//! Validated value types used in API calls.

mod base_url;
mod ids;

pub use base_url::BaseUrl;
pub use ids::{DocumentId, PackageId};

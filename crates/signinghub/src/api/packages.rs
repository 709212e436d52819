//! Package creation.

use serde::Serialize;
use tracing::instrument;

use crate::Session;
use crate::error::Error;
use crate::http::{ApiRequest, ApiResponse};

use super::endpoints::PACKAGES;

impl Session {
    /// Create a new, empty document package.
    ///
    /// `data` is the package description, e.g. `{"package_name": "Contract"}`.
    /// The reply carries the new `package_id`.
    #[instrument(skip(self, data))]
    pub async fn add_package<B>(&self, data: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(ApiRequest::post(PACKAGES).json(data)?).await
    }
}

//! Personal settings.

use tracing::instrument;

use crate::Session;
use crate::error::Error;
use crate::http::{ApiRequest, ApiResponse};

use super::endpoints::PROFILE;

impl Session {
    /// Get the general profile information of the authenticated user.
    #[instrument(skip(self))]
    pub async fn get_general_profile_information(&self) -> Result<ApiResponse, Error> {
        self.request(ApiRequest::get(PROFILE)).await
    }
}

//! Workflow management and sharing.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::Session;
use crate::error::{Error, InvalidInputError};
use crate::http::{ApiRequest, ApiResponse};
use crate::types::PackageId;

use super::endpoints::{INTEGRATION_LINK, workflow, workflow_users};

impl Session {
    /// Get the workflow of a package.
    #[instrument(skip(self))]
    pub async fn get_workflow_details(&self, package: PackageId) -> Result<ApiResponse, Error> {
        // No body, but the API expects the JSON content type anyway.
        let request =
            ApiRequest::get(workflow(package)).header_static(CONTENT_TYPE, "application/json");
        self.request(request).await
    }

    /// Update the workflow settings of a package.
    #[instrument(skip(self, data))]
    pub async fn update_workflow_details<B>(
        &self,
        package: PackageId,
        data: &B,
    ) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(ApiRequest::put(workflow(package)).json(data)?)
            .await
    }

    /// Add signers, reviewers or other recipients to a package's workflow.
    #[instrument(skip(self, data))]
    pub async fn add_users_to_workflow<B>(
        &self,
        package: PackageId,
        data: &B,
    ) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(ApiRequest::post(workflow_users(package)).json(data)?)
            .await
    }

    /// Send the package out to the recipients of its workflow.
    #[instrument(skip(self))]
    pub async fn share_document_package(&self, package: PackageId) -> Result<ApiResponse, Error> {
        info!("Sharing document package");
        let request =
            ApiRequest::post(workflow(package)).header_static(CONTENT_TYPE, "application/json");
        self.request(request).await
    }

    /// Generate an integration link that opens the package in SigningHub.
    ///
    /// `data` must serialize to a JSON object; `package_id` is added to it.
    #[instrument(skip(self, data))]
    pub async fn get_integration_link<B>(
        &self,
        package: PackageId,
        data: &B,
    ) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let mut body = serde_json::to_value(data).map_err(|e| InvalidInputError::Payload {
            reason: e.to_string(),
        })?;
        let Value::Object(ref mut fields) = body else {
            return Err(InvalidInputError::Payload {
                reason: "integration link data must be a JSON object".to_string(),
            }
            .into());
        };
        fields.insert("package_id".to_string(), Value::from(package.get()));

        self.request(ApiRequest::post(INTEGRATION_LINK).json(&body)?)

            .await
    }
}

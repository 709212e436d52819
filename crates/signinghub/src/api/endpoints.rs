//! Endpoint paths and request/response types.

use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, PackageId};

// ============================================================================
// Authentication
// ============================================================================

pub const AUTHENTICATE: &str = "authenticate";

pub const AUTHENTICATE_SCOPE: &str = "authenticate/scope";

pub const AUTHENTICATE_SSO: &str = "authenticate/sso";

pub const LOGOUT: &str = "v4/logout";

// ============================================================================
// Settings, packages, documents, workflow
// ============================================================================

pub const PROFILE: &str = "v4/settings/profile";

pub const PACKAGES: &str = "v4/packages";

pub const INTEGRATION_LINK: &str = "v4/links/integration";

pub fn documents(package: PackageId) -> String {
    format!("v4/packages/{}/documents", package)
}

pub fn document(package: PackageId, document: DocumentId) -> String {
    format!("v4/packages/{}/documents/{}", package, document)
}

pub fn signature_field(package: PackageId, document: DocumentId) -> String {
    format!("v4/packages/{}/documents/{}/fields/signature", package, document)
}

pub fn autoplace_fields(package: PackageId, document: DocumentId) -> String {
    format!("v4/packages/{}/documents/{}/fields/autoplace", package, document)
}

pub fn document_fields(package: PackageId, document: DocumentId, page: Option<u32>) -> String {
    match page {
        Some(page) => format!("v4/packages/{}/documents/{}/fields/{}", package, document, page),
        None => format!("v4/packages/{}/documents/{}/fields", package, document),
    }
}

pub fn workflow(package: PackageId) -> String {
    format!("v4/packages/{}/workflow", package)
}

pub fn workflow_users(package: PackageId) -> String {
    format!("v4/packages/{}/workflow/users", package)
}

// ============================================================================
// Vendor headers
// ============================================================================

pub const X_FILE_NAME: &str = "x-file-name";

pub const X_CONVERT_DOCUMENT: &str = "x-convert-document";

pub const X_SOURCE: &str = "x-source";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Successful reply of the authentication endpoints.
#[derive(Debug, Deserialize)]
pub struct AuthenticationResponse {
    pub access_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Request body for `authenticate/scope`.
#[derive(Debug, Serialize)]
pub struct ScopeRequest<'a> {
    pub user_email: &'a str,
}

/// Request body for `authenticate/sso`.
#[derive(Debug, Serialize)]
pub struct SsoRequest<'a> {
    pub token: &'a str,
    pub method: &'a str,
}

//! Document upload, download and field placement.

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderName};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::Session;
use crate::error::Error;
use crate::http::{ApiRequest, ApiResponse};
use crate::types::{DocumentId, PackageId};

use super::endpoints::{
    X_CONVERT_DOCUMENT, X_FILE_NAME, X_SOURCE, autoplace_fields, document, document_fields,
    documents, signature_field,
};

const OCTET_STREAM: &str = "application/octet-stream";

impl Session {
    /// Upload a document into a package.
    ///
    /// `source` identifies the uploading application. With `convert_document`
    /// the server converts the file to PDF.
    #[instrument(skip(self, data), fields(len = data.len()))]
    pub async fn upload_document(
        &self,
        package: PackageId,
        data: Bytes,
        filename: &str,
        source: &str,
        convert_document: bool,
    ) -> Result<ApiResponse, Error> {
        debug!("Uploading document");

        let request = ApiRequest::post(documents(package))
            .header(HeaderName::from_static(X_FILE_NAME), filename)?
            .header_static(
                HeaderName::from_static(X_CONVERT_DOCUMENT),
                if convert_document { "true" } else { "false" },
            )
            .header(HeaderName::from_static(X_SOURCE), source)?
            .header_static(CONTENT_TYPE, OCTET_STREAM)
            .bytes(data);

        self.request(request).await
    }

    /// Download a document. A binary reply arrives as [`ApiResponse::Bytes`].
    #[instrument(skip(self))]
    pub async fn download_document(
        &self,
        package: PackageId,
        document_id: DocumentId,
    ) -> Result<ApiResponse, Error> {
        let request =
            ApiRequest::get(document(package, document_id)).header_static(ACCEPT, OCTET_STREAM);
        self.request(request).await
    }

    /// Place a signature field on a document.
    #[instrument(skip(self, data))]
    pub async fn add_signature_field<B>(
        &self,
        package: PackageId,
        document_id: DocumentId,
        data: &B,
    ) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::post(signature_field(package, document_id)).json(data)?;
        self.request(request).await
    }

    /// Let the server place fields next to a search text in the document.
    #[instrument(skip(self, data))]
    pub async fn auto_place_signature_field<B>(
        &self,
        package: PackageId,
        document_id: DocumentId,
        data: &B,
    ) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::post(autoplace_fields(package, document_id)).json(data)?;
        self.request(request).await
    }

    /// List the fields of a document, optionally for a single page.
    #[instrument(skip(self))]
    pub async fn get_document_fields(
        &self,
        package: PackageId,
        document_id: DocumentId,
        page: Option<u32>,
    ) -> Result<ApiResponse, Error> {
        // No body, but the API expects the JSON content type anyway.
        let request = ApiRequest::get(document_fields(package, document_id, page))
            .header_static(CONTENT_TYPE, "application/json");
        self.request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use reqwest::Method;
    use reqwest::header::{HeaderMap, HeaderValue};
    use serde_json::json;

    use crate::error::InvalidInputError;
    use crate::testing::{ScriptedTransport, session};

    #[tokio::test]
    async fn upload_sets_vendor_headers_and_binary_body() {
        let transport = ScriptedTransport::new();
        transport.push_json(201, json!({"documentid": 77}));

        let session = session(&transport);
        session
            .upload_document(
                PackageId::new(5),
                Bytes::from_static(b"%PDF-1.7"),
                "contract.pdf",
                "kaleidos",
                false,
            )
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.path(), "v4/packages/5/documents");
        let headers = request.headers();
        assert_eq!(headers.get("x-file-name").unwrap(), "contract.pdf");
        assert_eq!(headers.get("x-convert-document").unwrap(), "false");
        assert_eq!(headers.get("x-source").unwrap(), "kaleidos");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), OCTET_STREAM);
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(request.body().unwrap().as_ref(), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn upload_rejects_unsendable_filename_without_calling() {
        let transport = ScriptedTransport::new();
        let session = session(&transport);

        let err = session
            .upload_document(PackageId::new(5), Bytes::new(), "a\nb.pdf", "src", true)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::Header { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn download_returns_bytes_and_accepts_octet_stream() {
        let transport = ScriptedTransport::new();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM));
        transport.push(200, headers, b"%PDF-1.7 signed".to_vec());

        let session = session(&transport);
        let body = session
            .download_document(PackageId::new(5), DocumentId::new(9))
            .await
            .unwrap()
            .into_bytes()
            .unwrap();
        assert_eq!(body.as_ref(), b"%PDF-1.7 signed");

        let request = transport.last_request();
        assert_eq!(request.path(), "v4/packages/5/documents/9");
        assert_eq!(request.headers().get(ACCEPT).unwrap(), OCTET_STREAM);
    }

    #[tokio::test]
    async fn download_accept_does_not_leak_into_next_call() {
        let transport = ScriptedTransport::new();
        transport.push(200, HeaderMap::new(), Vec::new());
        transport.push_json(200, json!({}));

        let session = session(&transport);
        session
            .download_document(PackageId::new(1), DocumentId::new(2))
            .await
            .unwrap();
        session.get_general_profile_information().await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[1].headers().get(ACCEPT).unwrap(), "application/json");
    }

    #[tokio::test]
    async fn field_placement_paths() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, json!({}));
        transport.push_json(200, json!([]));

        let session = session(&transport);
        session
            .add_signature_field(
                PackageId::new(3),
                DocumentId::new(4),
                &json!({"order": 1, "page_no": 1}),
            )
            .await
            .unwrap();
        session
            .auto_place_signature_field(
                PackageId::new(3),
                DocumentId::new(4),
                &json!({"search_text": "Signature", "order": 1, "placement": "BOTTOM"}),
            )
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path(), "v4/packages/3/documents/4/fields/signature");
        assert_eq!(requests[1].path(), "v4/packages/3/documents/4/fields/autoplace");
        let body: serde_json::Value = serde_json::from_slice(requests[1].body().unwrap()).unwrap();
        assert_eq!(body["search_text"], "Signature");
    }

    #[tokio::test]
    async fn document_fields_with_and_without_page() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, json!({"signature": []}));
        transport.push_json(200, json!({"signature": []}));

        let session = session(&transport);
        session
            .get_document_fields(PackageId::new(3), DocumentId::new(4), None)
            .await
            .unwrap();
        session
            .get_document_fields(PackageId::new(3), DocumentId::new(4), Some(2))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path(), "v4/packages/3/documents/4/fields");
        assert_eq!(requests[1].path(), "v4/packages/3/documents/4/fields/2");
        assert_eq!(
            requests[0].headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(requests[0].body().is_none());
    }
}

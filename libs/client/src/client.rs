//! HTTP client for the identifier backend.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use shelfmark_compose::{compose, ComposeContext, PREVIEW_SEQUENCE_VALUE};
use shelfmark_format::{validate, IdentifierFormat, InventoryId, SequenceScope};

use crate::error::ClientError;

/// API client for the identifier persistence & counter backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error envelope the backend returns on failures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorResponse {
    code: String,
    message: String,
    request_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AllocateSequenceRequest<'a> {
    scope: SequenceScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    inventory_id: Option<&'a InventoryId>,
}

#[derive(Debug, Deserialize)]
struct AllocateSequenceResponse {
    value: u64,
}

#[derive(Debug, Serialize)]
struct RemotePreviewRequest<'a> {
    format: &'a IdentifierFormat,
    fields: &'a BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RemotePreviewResponse {
    identifier: String,
}

impl ApiClient {
    /// Creates a client for `base_url`, with bearer auth when a token is given.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ClientError::Config("token contains invalid characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the stored identifier format for an inventory.
    ///
    /// An inventory that never configured one gets the default (disabled,
    /// empty) format from the backend.
    pub async fn fetch_format(
        &self,
        inventory: &InventoryId,
    ) -> Result<IdentifierFormat, ClientError> {
        let path = format!("/v1/inventories/{inventory}/custom-id");
        debug!(%inventory, "fetching identifier format");

        let response = self.client.get(self.url(&path)).send().await?;
        self.handle_response(response).await
    }

    /// Persists an identifier format for an inventory.
    ///
    /// Refuses locally with [`ClientError::Invalid`] while the format has
    /// validation errors; the backend re-validates regardless.
    pub async fn save_format(
        &self,
        inventory: &InventoryId,
        format: &IdentifierFormat,
    ) -> Result<(), ClientError> {
        let errors = validate(format);
        if !errors.is_empty() {
            return Err(ClientError::Invalid(errors));
        }

        let path = format!("/v1/inventories/{inventory}/custom-id");
        debug!(%inventory, elements = format.len(), "saving identifier format");

        let response = self
            .client
            .put(self.url(&path))
            .json(format)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            self.handle_error(response).await
        }
    }

    /// Allocates the next sequence value for `(scope, inventory)`.
    ///
    /// The backend performs the atomic increment-and-read; the inventory key
    /// only matters for the per-inventory scope.
    pub async fn allocate_sequence(
        &self,
        scope: SequenceScope,
        inventory: &InventoryId,
    ) -> Result<u64, ClientError> {
        let request = AllocateSequenceRequest {
            scope,
            inventory_id: match scope {
                SequenceScope::PerInventory => Some(inventory),
                SequenceScope::Global => None,
            },
        };
        debug!(%scope, %inventory, "allocating sequence value");

        let response = self
            .client
            .post(self.url("/v1/sequences/allocate"))
            .json(&request)
            .send()
            .await?;

        let allocated: AllocateSequenceResponse = self.handle_response(response).await?;
        Ok(allocated.value)
    }

    /// Runs the backend's preview endpoint for a consistency check against
    /// the local composer. Both sides must agree bit-for-bit on identical
    /// inputs.
    pub async fn preview_remote(
        &self,
        inventory: &InventoryId,
        format: &IdentifierFormat,
        fields: &BTreeMap<String, String>,
    ) -> Result<String, ClientError> {
        let path = format!("/v1/inventories/{inventory}/custom-id/preview");
        let request = RemotePreviewRequest { format, fields };

        let response = self
            .client
            .post(self.url(&path))
            .json(&request)
            .send()
            .await?;

        let preview: RemotePreviewResponse = self.handle_response(response).await?;
        Ok(preview.identifier)
    }

    /// Commit-mode composition: mints the real identifier for a record.
    ///
    /// Refuses while the format has validation errors. A sequence value is
    /// allocated only when the format contains a `sequence` token, so minting
    /// a sequence-free format never ticks a counter.
    pub async fn mint_identifier(
        &self,
        inventory: &InventoryId,
        format: &IdentifierFormat,
        fields: BTreeMap<String, String>,
    ) -> Result<String, ClientError> {
        let errors = validate(format);
        if !errors.is_empty() {
            return Err(ClientError::Invalid(errors));
        }

        let sequence_value = match format.sequence_scope() {
            Some(scope) => self.allocate_sequence(scope, inventory).await?,
            // No sequence token; the value is never rendered.
            None => PREVIEW_SEQUENCE_VALUE,
        };

        let ctx = ComposeContext::commit(sequence_value).with_fields(fields);
        Ok(compose(format, &ctx))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::Network)
        } else {
            self.handle_error(response).await
        }
    }

    async fn handle_error<T>(&self, response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status().as_u16();

        let body: ApiErrorResponse = response.json().await.unwrap_or_else(|_| ApiErrorResponse {
            code: "unknown".to_string(),
            message: "Unknown error".to_string(),
            request_id: None,
        });

        Err(ClientError::Api {
            status,
            code: body.code,
            message: body.message,
            request_id: body.request_id,
        })
    }
}

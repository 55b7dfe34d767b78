//! Stateless HTTP request builder and response parser for contact creation.
//!
//! # Design
//! `ContactClient` holds only a `base_url`. `build_create_contact` produces
//! an `HttpRequest`, `parse_create_contact` consumes an `HttpResponse`, and
//! `create_contact` runs both around a single transport round trip.

use tracing::{error, info};

use crate::error::ContactError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::HttpTransport;
use crate::types::{ContactDraft, ContactId, ContactRecord};

#[derive(Debug, Clone)]
pub struct ContactClient {
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create_contact(&self, draft: &ContactDraft) -> Result<HttpRequest, ContactError> {
        let body = serde_json::to_string(draft).map_err(|e| ContactError::Transport(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/contact", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Turn the server reply into a record. Every non-2xx status is a
    /// rejection, whatever the body says.
    pub fn parse_create_contact(
        &self,
        draft: &ContactDraft,
        response: HttpResponse,
    ) -> Result<ContactRecord, ContactError> {
        if !response.is_success() {
            return Err(ContactError::Rejected {
                status: response.status,
            });
        }
        let id: ContactId =
            serde_json::from_str(&response.body).map_err(|e| ContactError::Transport(e.to_string()))?;
        info!(%id, "contact created");
        Ok(ContactRecord::from_draft(id, draft))
    }

    /// Submit `draft` and wait for the server to assign an id.
    pub async fn create_contact<T>(&self, transport: &T, draft: ContactDraft) -> Result<ContactRecord, ContactError>
    where
        T: HttpTransport + ?Sized,
    {
        let result = self.round_trip(transport, &draft).await;
        if let Err(err) = &result {
            error!(error = %err, "error creating contact");
        }
        result
    }

    async fn round_trip<T>(&self, transport: &T, draft: &ContactDraft) -> Result<ContactRecord, ContactError>
    where
        T: HttpTransport + ?Sized,
    {
        let request = self.build_create_contact(draft)?;
        let response = transport.execute(request).await?;
        self.parse_create_contact(draft, response)
    }
}

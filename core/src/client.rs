//! Stateless HTTP request builder and response parser for the hosted data
//! service.
//!
//! # Design
//! `DataClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller (usually `HttpStore`) executes the actual round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::{Collection, ListOptions};

#[derive(Debug, Clone)]
pub struct DataClient {
    base_url: String,
}

impl DataClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list(&self, collection: Collection, options: &ListOptions) -> HttpRequest {
        let query = options.to_query_string();
        let path = if query.is_empty() {
            format!("{}/{collection}", self.base_url)
        } else {
            format!("{}/{collection}?{query}", self.base_url)
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn build_create<T: Serialize>(
        &self,
        collection: Collection,
        fields: &T,
    ) -> Result<HttpRequest, ApiError> {
        if !collection.accepts_writes() {
            return Err(ApiError::ReadOnlyCollection(collection));
        }
        let body = serde_json::to_string(fields).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/{collection}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

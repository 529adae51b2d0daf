//! Blocking client for the paper-discovery endpoints.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use citegraph_proto::{Category, CoauthorPaper, PaperDetail, PaperStub, SearchEntry};

use crate::config::SiteConfig;

/// Seam between the controllers and the network. Implemented by the HTTP
/// client below and by in-test stubs.
pub trait DiscoveryApi {
    fn get_paper(&self, id: &str) -> Result<PaperDetail, ApiError>;

    /// Papers authored by `name`. The endpoint body is a bare JSON array.
    fn get_author(&self, name: &str) -> Result<Vec<PaperStub>, ApiError>;

    fn autocomplete(&self, query: &str) -> Result<Vec<SearchEntry>, ApiError>;

    fn popular_queries(&self) -> Result<Vec<SearchEntry>, ApiError>;

    /// Listing rows for the selected authors on the co-authorship view.
    fn coauthor_papers(&self, author_names: &[String]) -> Result<Vec<CoauthorPaper>, ApiError>;

    fn categories(&self) -> Result<Vec<Category>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpDiscoveryClient {
    base_url: String,
    client: Client,
}

impl HttpDiscoveryClient {
    pub fn from_config(config: &SiteConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms.max(1)))
            .build()
            .map_err(|err| ApiError::BuildClient {
                message: err.to_string(),
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|err| ApiError::Http {
                message: err.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().unwrap_or_else(|_| "<no body>".to_string());
            return Err(ApiError::Status {
                code: status.as_u16(),
                message,
            });
        }

        response.json().map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })
    }
}

impl DiscoveryApi for HttpDiscoveryClient {
    fn get_paper(&self, id: &str) -> Result<PaperDetail, ApiError> {
        self.get_json("/get_paper", &[("id", id)])
    }

    fn get_author(&self, name: &str) -> Result<Vec<PaperStub>, ApiError> {
        self.get_json("/get_author", &[("name", name)])
    }

    fn autocomplete(&self, query: &str) -> Result<Vec<SearchEntry>, ApiError> {
        self.get_json("/autocomplete_2", &[("q", query)])
    }

    fn popular_queries(&self) -> Result<Vec<SearchEntry>, ApiError> {
        self.get_json("/popular_queries", &[])
    }

    fn coauthor_papers(&self, author_names: &[String]) -> Result<Vec<CoauthorPaper>, ApiError> {
        // The endpoint takes the selected names as one JSON-encoded array.
        let encoded = serde_json::to_string(author_names).map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })?;
        self.get_json("/author_papers", &[("q", encoded.as_str())])
    }

    fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories", &[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BuildClient { message: String },
    Http { message: String },
    Status { code: u16, message: String },
    Decode { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BuildClient { message } => write!(f, "client build failed: {message}"),
            ApiError::Http { message } => write!(f, "http request failed: {message}"),
            ApiError::Status { code, message } => write!(f, "http status {code}: {message}"),
            ApiError::Decode { message } => write!(f, "decode response failed: {message}"),
        }
    }
}

impl Error for ApiError {}

pub mod endpoints;
mod envelope;
mod error;
mod macros;
pub mod repositories;
pub mod video;

pub use crate::envelope::{Acknowledgement, ApiEnvelope};
pub use crate::error::StudioApiError;
pub use tower_api_client::{Request as ApiRequest, StatusCode};
use repositories::*;
use secrecy::{ExposeSecret, SecretString};
use tower_api_client::Client as ApiClient;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// HTTP client for the studio content API.
///
/// A client built with [`Client::with_token`] sends `Authorization: Bearer`
/// on every request; one built with [`Client::new`] never does.
pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url),
        }
    }

    pub fn with_token(base_url: &str, token: &SecretString) -> Self {
        Self {
            inner: ApiClient::new(base_url).bearer_auth(token.expose_secret()),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, StudioApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    pub fn projects() -> ProjectRepository {
        ProjectRepository::new()
    }

    pub fn categories() -> CategoryRepository {
        CategoryRepository::new()
    }

    pub fn reels() -> ReelRepository {
        ReelRepository::new()
    }

    pub fn contact() -> ContactRepository {
        ContactRepository::new()
    }
}

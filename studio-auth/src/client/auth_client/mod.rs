mod models;

use crate::common::{ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, Principal};
pub use models::{AuthClientError, LOGIN_FAILED};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Token and profile issued by a successful login.
#[derive(Debug)]
pub struct LoginGrant {
    pub token: SecretString,
    pub user: Principal,
}

/// Client for the remote auth endpoints under `{base_url}/auth`.
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthClientError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginGrant, AuthClientError> {
        let url = format!("{}/auth/login", self.base_url);
        let req = LoginRequest {
            email,
            password: password.expose_secret(),
        };

        let resp = self.http_client.post(&url).json(&req).send().await?;
        let resp = Self::check_status(resp).await?;
        let body = resp.json::<LoginResponse>().await?;

        match (body.token, body.user) {
            (Some(token), Some(user)) if !token.is_empty() => Ok(LoginGrant {
                token: SecretString::from(token),
                user,
            }),
            _ => Err(AuthClientError::InvalidResponse(
                "login response is missing the token or user".into(),
            )),
        }
    }

    /// Fetch the profile of the token's owner.
    pub async fn me(&self, token: &SecretString) -> Result<Principal, AuthClientError> {
        let url = format!("{}/auth/me", self.base_url);

        let resp = self
            .http_client
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        Ok(resp.json::<Principal>().await?)
    }

    pub async fn forgot_password(&self, email: &str) -> Result<String, AuthClientError> {
        let url = format!("{}/auth/forgot-password", self.base_url);

        let resp = self
            .http_client
            .post(&url)
            .json(&ForgotPasswordRequest { email })
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        let body = resp.json::<MessageResponse>().await?;

        Ok(body.message.unwrap_or_default())
    }

    async fn check_status(resp: Response) -> Result<Response, AuthClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        // Error bodies are best effort; a missing or non-JSON body keeps the status only.
        let message = resp
            .json::<MessageResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|msg| !msg.is_empty());

        Err(AuthClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

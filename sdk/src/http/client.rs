use crate::client::Client;
use crate::error::CoveraError;
use crate::http::config::HttpClientConfig;
use crate::http::HttpTransport;
use crate::token::store::TokenStore;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Response, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Serialize;

const BEARER: &str = "Bearer ";

/// HTTP client for the Covera API. The bearer header is injected here, and
/// only here, from the shared token slot; resource modules never touch
/// authentication wiring.
#[derive(Debug)]
pub struct HttpClient {
    pub api_url: Url,
    client: ClientWithMiddleware,
    token: TokenStore,
}

impl Client for HttpClient {}

impl HttpClient {
    pub fn new(api_url: &str) -> Result<Self, CoveraError> {
        Self::create(HttpClientConfig {
            api_url: api_url.to_string(),
            ..Default::default()
        })
    }

    pub fn create(config: HttpClientConfig) -> Result<Self, CoveraError> {
        Self::create_with_token_store(config, TokenStore::in_memory())
    }

    /// Builds the client around an existing token slot, so guards, pollers
    /// and the transport observe the same identity.
    pub fn create_with_token_store(
        config: HttpClientConfig,
        token: TokenStore,
    ) -> Result<Self, CoveraError> {
        let api_url = Url::parse(&config.api_url).map_err(|_| CoveraError::CannotParseUrl)?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            api_url,
            client,
            token,
        })
    }

    fn with_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.token() {
            Some(token) => request.header(AUTHORIZATION, format!("{BEARER}{token}")),
            None => request,
        }
    }

    fn fail_if_error(response: Response) -> Result<Response, CoveraError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(CoveraError::Unauthorized),
            StatusCode::FORBIDDEN => Err(CoveraError::Forbidden),
            _ => Err(CoveraError::InvalidResponse(status.as_u16())),
        }
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    fn get_url(&self, path: &str) -> Result<Url, CoveraError> {
        self.api_url
            .join(path)
            .map_err(|_| CoveraError::CannotParseUrl)
    }

    fn token_store(&self) -> &TokenStore {
        &self.token
    }

    fn is_authenticated(&self) -> bool {
        self.token.is_authenticated()
    }

    fn set_access_token(&self, token: Option<String>) {
        match token {
            Some(token) => self.token.set_token(&token),
            None => self.token.clear(),
        }
    }

    async fn get(&self, path: &str) -> Result<Response, CoveraError> {
        let url = self.get_url(path)?;
        let response = self.with_bearer(self.client.get(url)).send().await?;
        Self::fail_if_error(response)
    }

    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, CoveraError> {
        let url = self.get_url(path)?;
        let response = self
            .with_bearer(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Self::fail_if_error(response)
    }

    async fn post_for_text<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<String, CoveraError> {
        let response = self.post(path, payload).await?;
        let text = response.text().await?;
        Ok(text)
    }

    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, CoveraError> {
        let url = self.get_url(path)?;
        let response = self
            .with_bearer(self.client.put(url))
            .json(payload)
            .send()
            .await?;
        Self::fail_if_error(response)
    }

    async fn delete(&self, path: &str) -> Result<Response, CoveraError> {
        let url = self.get_url(path)?;
        let response = self.with_bearer(self.client.delete(url)).send().await?;
        Self::fail_if_error(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_paths_against_api_url() {
        let client = HttpClient::new("http://localhost:8763").unwrap();
        let url = client.get_url("/notify/agent/42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8763/notify/agent/42");
    }

    #[test]
    fn should_reject_invalid_api_url() {
        let result = HttpClient::new("not a url");
        assert!(matches!(result, Err(CoveraError::CannotParseUrl)));
    }

    #[test]
    fn should_share_the_token_slot() {
        let store = TokenStore::in_memory();
        let client =
            HttpClient::create_with_token_store(HttpClientConfig::default(), store.clone())
                .unwrap();
        client.set_access_token(Some("header.payload.signature".to_string()));
        assert_eq!(store.token().as_deref(), Some("header.payload.signature"));
        client.set_access_token(None);
        assert_eq!(store.token(), None);
    }
}

use crate::error::CoveraError;
use crate::token::store::TokenStore;
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Serialize;

pub mod agents;
pub mod auth;
pub mod claims;
pub mod client;
pub mod communication;
pub mod config;
pub mod customers;
pub mod notifications;
pub mod policies;

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Get full URL for the provided path.
    fn get_url(&self, path: &str) -> Result<Url, CoveraError>;

    /// The token slot shared with guards and pollers. The bearer header is
    /// attached from this slot in exactly one place.
    fn token_store(&self) -> &TokenStore;

    /// Returns true if a decodable token is stored.
    fn is_authenticated(&self) -> bool;

    /// Replace or clear the stored token.
    fn set_access_token(&self, token: Option<String>);

    /// Invoke HTTP GET request to the Covera API.
    async fn get(&self, path: &str) -> Result<Response, CoveraError>;

    /// Invoke HTTP POST request to the Covera API.
    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, CoveraError>;

    /// Invoke HTTP POST request to the Covera API and read the response as
    /// raw text. The login endpoints return the bearer token this way, and
    /// the registration and claim endpoints return text confirmations.
    async fn post_for_text<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<String, CoveraError>;

    /// Invoke HTTP PUT request to the Covera API.
    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, CoveraError>;

    /// Invoke HTTP DELETE request to the Covera API.
    async fn delete(&self, path: &str) -> Result<Response, CoveraError>;
}

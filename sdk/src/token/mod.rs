//! Identity token handling: decoding the bearer token payload into typed
//! claims and owning the single process-wide token slot.

pub mod claims;
pub mod store;

pub use claims::Claims;
pub use store::{InMemoryTokenStorage, TokenStorage, TokenStore};

use crate::error::CoveraError;
use crate::models::role::Role;
use crate::token::claims::Claims;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// `TokenStorage` is the persistence seam for the single token slot. The
/// in-memory implementation covers tests and short-lived processes; hosts
/// with durable storage provide their own implementation.
pub trait TokenStorage: Debug + Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory token slot guarded by a `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryTokenStorage {
    token: RwLock<Option<String>>,
}

impl TokenStorage for InMemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(token.to_string());
    }

    fn clear(&self) {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

/// `TokenStore` is the single authority for reading, decoding and clearing
/// the identity token. All identity-derived state is computed on demand
/// from the stored token; nothing else is persisted.
#[derive(Debug, Clone)]
pub struct TokenStore {
    storage: Arc<dyn TokenStorage>,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl TokenStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTokenStorage::default()))
    }

    /// Returns the raw stored token, treating blank values as absent.
    pub fn token(&self) -> Option<String> {
        self.storage
            .load()
            .filter(|token| !token.trim().is_empty())
    }

    /// Replaces the stored token wholesale.
    pub fn set_token(&self, token: &str) {
        self.storage.save(token);
    }

    /// Deletes the stored token. Idempotent: clearing an already-empty
    /// slot is not an error.
    pub fn clear(&self) {
        self.storage.clear();
    }

    /// Decoded claims of the current token, or `None` when no token is
    /// stored or the stored token is malformed.
    pub fn claims(&self) -> Option<Claims> {
        let token = self.token()?;
        match Claims::decode(&token) {
            Ok(claims) => Some(claims),
            Err(error) => {
                debug!("Stored token cannot be decoded: {error}");
                None
            }
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.claims().map(|claims| claims.role)
    }

    /// The subject name of the signed-in identity, falling back to the
    /// literal `User`.
    pub fn display_name(&self) -> String {
        self.claims()
            .map(|claims| claims.subject)
            .unwrap_or_else(|| "User".to_string())
    }

    /// The customer or agent id of the signed-in identity.
    pub fn entity_id(&self) -> Option<u64> {
        self.claims().and_then(|claims| claims.entity_id)
    }

    /// Whether the stored token carries an expiry in the past. Advisory
    /// only, never enforced against the backend.
    pub fn is_expired(&self) -> bool {
        self.claims().map(|claims| claims.is_expired()).unwrap_or(false)
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims().is_some()
    }

    /// Initials of the display name, for avatar badges.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|initial| initial.to_uppercase())
            .collect()
    }

    /// Resolves role and entity id or fails with `MissingIdentity`, for
    /// call sites which cannot proceed anonymously.
    pub fn require_identity(&self) -> Result<(Role, u64), CoveraError> {
        let claims = self.claims().ok_or(CoveraError::MissingIdentity)?;
        let entity_id = claims.entity_id.ok_or(CoveraError::MissingIdentity)?;
        Ok((claims.role, entity_id))
    }
}

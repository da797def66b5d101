use crate::error::CoveraError;
use crate::models::role::Role;
use crate::utils::timestamp::CoveraTimestamp;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

/// `Claims` is the decoded payload of the identity token, reconciled into
/// one canonical field per concept.
///
/// The token is a three-segment `header.payload.signature` string. Only the
/// payload is read and the signature is never verified client-side: the
/// token is forwarded verbatim to the backend, which is the trust boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    /// The subject name carried by the token.
    pub subject: String,
    /// The resolved user role.
    pub role: Role,
    /// The customer or agent id, depending on the role.
    pub entity_id: Option<u64>,
    /// When the token was issued.
    pub issued_at: Option<CoveraTimestamp>,
    /// When the token expires.
    pub expires_at: Option<CoveraTimestamp>,
}

const SUBJECT_FALLBACK: &str = "User";

/// Raw wire shape of the payload. Several historical claim names exist for
/// the same concepts; they are reconciled once, here, and nowhere else.
#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    role: Option<Value>,
    #[serde(default)]
    authorities: Option<Value>,
    #[serde(default)]
    authority: Option<Value>,
    #[serde(default)]
    roles: Option<Value>,
    #[serde(rename = "customerId", default)]
    customer_id: Option<u64>,
    #[serde(rename = "agentId", default)]
    agent_id: Option<u64>,
    #[serde(default)]
    iat: Option<u64>,
    #[serde(default)]
    exp: Option<u64>,
}

impl Claims {
    /// Decodes the payload segment of the provided token.
    ///
    /// Fails with `InvalidTokenFormat` unless the token splits into exactly
    /// three non-empty dot-separated segments and the middle segment is
    /// valid base64url-encoded JSON. Never panics on arbitrary input.
    pub fn decode(token: &str) -> Result<Claims, CoveraError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 || segments.iter().any(|segment| segment.is_empty()) {
            return Err(CoveraError::InvalidTokenFormat);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(segments[1])
            .map_err(|_| CoveraError::InvalidTokenFormat)?;
        let raw: RawClaims =
            serde_json::from_slice(&payload).map_err(|_| CoveraError::InvalidTokenFormat)?;

        let role = resolve_role(&raw)?;
        let entity_id = resolve_entity_id(&raw, role);
        Ok(Claims {
            subject: raw
                .sub
                .unwrap_or_else(|| SUBJECT_FALLBACK.to_string()),
            role,
            entity_id,
            issued_at: raw.iat.map(CoveraTimestamp::from),
            expires_at: raw.exp.map(CoveraTimestamp::from),
        })
    }

    /// Whether the `exp` claim lies in the past. Advisory only: the backend
    /// rejects expired tokens regardless of what the client believes.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at.to_secs() <= CoveraTimestamp::now().to_secs(),
            None => false,
        }
    }
}

fn resolve_role(raw: &RawClaims) -> Result<Role, CoveraError> {
    let candidates = [&raw.role, &raw.authorities, &raw.authority, &raw.roles];
    for value in candidates.into_iter().flatten() {
        if let Some(name) = claim_as_str(value) {
            return name.parse();
        }
    }
    // A token without any role claim belongs to a customer. Tokens issued
    // before agent logins existed carry no role at all.
    Ok(Role::Customer)
}

fn claim_as_str(value: &Value) -> Option<&str> {
    match value {
        Value::String(name) => Some(name),
        Value::Array(items) => items.first().and_then(|item| item.as_str()),
        _ => None,
    }
}

fn resolve_entity_id(raw: &RawClaims, role: Role) -> Option<u64> {
    // The backend overloads one identity concept across two claim names.
    // The role decides which one applies; administrators carry neither.
    match role {
        Role::Customer => raw.customer_id,
        Role::Agent => raw.agent_id,
        Role::Admin => None,
    }
}

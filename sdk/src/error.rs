use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoveraError {
    #[error("Invalid configuration")]
    InvalidConfiguration,
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Invalid token format")]
    InvalidTokenFormat,
    #[error("Invalid role")]
    InvalidRole,
    #[error("Invalid claim status")]
    InvalidClaimStatus,
    #[error("Missing identity")]
    MissingIdentity,
    #[error("Invalid name")]
    InvalidName,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Invalid response: {0}")]
    InvalidResponse(u16),
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("Request middleware error")]
    RequestMiddlewareError(#[from] reqwest_middleware::Error),
    #[error("Invalid JSON payload")]
    InvalidJsonPayload(#[from] serde_json::Error),
    #[error("Cannot read configuration file")]
    CannotReadConfigurationFile(#[from] std::io::Error),
    #[error("Cannot parse configuration file")]
    CannotParseConfigurationFile(#[from] toml::de::Error),
}

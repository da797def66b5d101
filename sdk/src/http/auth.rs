use crate::auth::login::Login;
use crate::auth::register::Register;
use crate::auth::register_agent::RegisterAgent;
use crate::client::AuthClient;
use crate::error::CoveraError;
use crate::http::client::HttpClient;
use crate::http::HttpTransport;
use crate::validatable::Validatable;
use async_trait::async_trait;
use tracing::debug;

const PATH: &str = "/auth";

#[async_trait]
impl AuthClient for HttpClient {
    async fn login(&self, command: &Login) -> Result<String, CoveraError> {
        login(self, command, &format!("{PATH}/login")).await
    }

    async fn login_agent(&self, command: &Login) -> Result<String, CoveraError> {
        login(self, command, &format!("{PATH}/agentlogin")).await
    }

    async fn register(&self, command: &Register) -> Result<String, CoveraError> {
        command.validate()?;
        let confirmation = self.post_for_text(&format!("{PATH}/register"), &command).await?;
        Ok(confirmation)
    }

    async fn register_agent(&self, command: &RegisterAgent) -> Result<String, CoveraError> {
        command.validate()?;
        let confirmation = self
            .post_for_text(&format!("{PATH}/registeragent"), &command)
            .await?;
        Ok(confirmation)
    }

    async fn logout(&self) {
        self.set_access_token(None);
        debug!("Discarded stored token");
    }
}

/// Both login endpoints return the bearer token as a raw text body. The
/// token is stored immediately so every following request carries it.
async fn login<T: HttpTransport>(
    transport: &T,
    command: &Login,
    path: &str,
) -> Result<String, CoveraError> {
    command.validate()?;
    let token = transport.post_for_text(path, &command).await?;
    transport.set_access_token(Some(token.clone()));
    debug!("Logged in as {command}");
    Ok(token)
}

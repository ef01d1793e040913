//! Thin client for the hosted auth provider. Only the admin back office is
//! gated; catalog browsing never touches this.

use crate::store::supabase::{backend_message, StoreConfig};
use crate::store::StoreError;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// The signed-in user, as reported by the auth provider.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub email: Option<String>,
}

/// An admin session. The access token is what the record store uses to
/// authorize writes.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub user: SessionUser,
}

/// Password-grant auth client. Holds at most one session; callers read it
/// back through `session()` rather than subscribing to change events.
pub struct AuthClient {
    client: Client,
    config: StoreConfig,
    session: Option<Session>,
}

impl AuthClient {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            config,
            session: None,
        })
    }

    /// Sign in with email + password. On success the session is retained and
    /// returned; on failure the provider's message is passed through.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<&Session, StoreError> {
        let response = self
            .client
            .post(format!(
                "{}/auth/v1/token?grant_type=password",
                self.config.base_url
            ))
            .header("apikey", &self.config.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = backend_message(response).await;
            warn!("Sign-in rejected: {}", message);
            return Err(StoreError::Backend { status, message });
        }

        let session: Session = response.json().await?;
        info!(
            "Signed in as {}",
            session.user.email.as_deref().unwrap_or("unknown user")
        );
        Ok(self.session.insert(session))
    }

    /// Revoke the current session, if any. Clears local state even when the
    /// provider call fails, matching the provider's own client behavior.
    pub async fn sign_out(&mut self) -> Result<(), StoreError> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        let response = self
            .client
            .post(format!("{}/auth/v1/logout", self.config.base_url))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Backend {
                status,
                message: backend_message(response).await,
            });
        }
        info!("Signed out");
        Ok(())
    }

    /// The current session, or `None` when signed out.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_payload_deserializes() {
        let json = r#"{
            "access_token": "jwt-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "abc", "email": "admin@forbescapital.com" }
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.access_token, "jwt-token");
        assert_eq!(
            session.user.email.as_deref(),
            Some("admin@forbescapital.com")
        );
    }

    #[tokio::test]
    async fn sign_out_without_session_is_a_no_op() {
        let mut auth = AuthClient::new(StoreConfig {
            base_url: "https://example.supabase.co".to_string(),
            api_key: "anon".to_string(),
        })
        .unwrap();
        assert!(auth.session().is_none());
        auth.sign_out().await.unwrap();
        assert!(auth.session().is_none());
    }
}

//! Token-backed auth provider.
//!
//! Stands in for the hosted identity service: a session token in the
//! environment means a signed-in patient. The subscription still goes
//! through the full loading → terminal-state handshake so the gate
//! exercises all three of its views.

use log::info;

use super::{AuthProvider, AuthState, AuthSubscription, Identity, subscription_pair};

/// Environment variable holding the patient session token.
pub const TOKEN_ENV_VAR: &str = "BEDSIDE_AUTH_TOKEN";

pub struct TokenAuthProvider {
    token: Option<String>,
}

impl TokenAuthProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Reads the session token from `BEDSIDE_AUTH_TOKEN`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(TOKEN_ENV_VAR).ok())
    }
}

impl AuthProvider for TokenAuthProvider {
    fn name(&self) -> &str {
        "token"
    }

    fn subscribe(&self) -> AuthSubscription {
        let (tx, subscription) = subscription_pair();
        let user = self.token.as_ref().map(|token| Identity {
            id: token.clone(),
            display_name: None,
        });

        tokio::spawn(async move {
            // Loading first, then the terminal state. Sends fail only if the
            // subscriber already dropped, which ends the stream anyway.
            if tx
                .send(AuthState {
                    user: None,
                    is_loading: true,
                })
                .await
                .is_err()
            {
                return;
            }
            info!(
                "Auth resolved: {}",
                if user.is_some() { "signed in" } else { "signed out" }
            );
            let _ = tx
                .send(AuthState {
                    user,
                    is_loading: false,
                })
                .await;
        });

        subscription
    }
}

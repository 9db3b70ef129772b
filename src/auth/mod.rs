//! # Authentication Gate
//!
//! A push-based subscription interface over an external auth provider. The
//! core consumes the stream as opaque state: a user is present or absent,
//! plus a loading tri-state. Any implementation (polling, websocket,
//! callback) satisfies the same contract.
//!
//! A subscription is established once per run and torn down by dropping the
//! [`AuthSubscription`] — the provider side sees the channel close and stops
//! emitting. If the stream never emits, the UI stays in its loading state;
//! there is deliberately no timeout.

mod token;

pub use token::TokenAuthProvider;

use tokio::sync::mpsc;

/// Buffered states per subscription. Providers emit rarely; a small buffer
/// keeps `subscribe` from ever blocking the caller.
const SUBSCRIPTION_BUFFER: usize = 8;

/// Opaque authenticated-identity handle. The core only ever checks presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub display_name: Option<String>,
}

/// One emission from the auth provider's state stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub is_loading: bool,
}

impl Default for AuthState {
    /// Unknown state is treated as still loading, the safe default for a
    /// stream that hasn't said anything definite yet.
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

/// Receiving end of an auth state stream. Dropping it unsubscribes.
pub struct AuthSubscription {
    rx: mpsc::Receiver<AuthState>,
}

impl AuthSubscription {
    fn new(rx: mpsc::Receiver<AuthState>) -> Self {
        Self { rx }
    }

    /// Waits for the next state emission. Returns `None` once the provider
    /// side has closed the stream.
    pub async fn next(&mut self) -> Option<AuthState> {
        self.rx.recv().await
    }
}

/// Sending half handed to provider implementations by [`subscription_pair`].
pub(crate) type AuthSender = mpsc::Sender<AuthState>;

/// Creates a connected sender/subscription pair for provider implementations.
pub(crate) fn subscription_pair() -> (AuthSender, AuthSubscription) {
    let (tx, rx) = mpsc::channel(SUBSCRIPTION_BUFFER);
    (tx, AuthSubscription::new(rx))
}

pub trait AuthProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Starts a new state stream. Called once per mount; the returned
    /// subscription is released by dropping it.
    fn subscribe(&self) -> AuthSubscription;
}

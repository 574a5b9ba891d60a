//! # Auth Context
//!
//! Explicit sign-in lifecycle for the merchant dashboard.
//!
//! ## Rules
//! - `init()` runs once at startup: a persisted token means a returning
//!   merchant (`SignedIn`), no token means `SignedOut`
//! - `login()` persists the token before reporting `SignedIn`
//! - `logout()` clears the store; logout is purely local, the backend
//!   keeps no session state to tear down
//!
//! Nothing here is global: the context hands out `&AuthSession` and
//! callers pass it explicitly to authenticated API calls.

use std::io;

use tracing::{debug, info};

use shopfront_client::{AuthSession, TokenStore};

/// Whether a merchant is signed in.
#[derive(Debug, Clone)]
pub enum AuthState {
    /// `init()` has not run yet.
    Unknown,
    SignedOut,
    SignedIn(AuthSession),
}

/// Owns the sign-in state and the token store behind it.
pub struct AuthContext<S> {
    store: S,
    state: AuthState,
}

impl<S: TokenStore> AuthContext<S> {
    pub fn new(store: S) -> Self {
        AuthContext {
            store,
            state: AuthState::Unknown,
        }
    }

    /// Restores a persisted session, if any. Called once at startup.
    pub fn init(&mut self) -> io::Result<()> {
        self.state = match self.store.load()? {
            Some(token) => {
                debug!("Restored persisted session");
                AuthState::SignedIn(AuthSession::new(token))
            }
            None => AuthState::SignedOut,
        };
        Ok(())
    }

    /// Enters `SignedIn`, persisting the token first.
    pub fn login(&mut self, session: AuthSession) -> io::Result<()> {
        self.store.save(session.token())?;
        info!("Signed in");
        self.state = AuthState::SignedIn(session);
        Ok(())
    }

    /// Clears the persisted token and returns to `SignedOut`.
    pub fn logout(&mut self) -> io::Result<()> {
        self.store.clear()?;
        info!("Signed out");
        self.state = AuthState::SignedOut;
        Ok(())
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The live session, if signed in.
    pub fn session(&self) -> Option<&AuthSession> {
        match &self.state {
            AuthState::SignedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, AuthState::SignedIn(_))
    }
}

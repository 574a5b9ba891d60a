//! # Authentication
//!
//! Merchant account registration, login, and token custody.
//!
//! ## Explicit Sessions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Token Lifecycle                                   │
//! │                                                                         │
//! │  login(email, password) ──► TokenResponse ──► AuthSession              │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                          TokenStore::save ──► survives restarts        │
//! │                                                                         │
//! │  startup: TokenStore::load ──► Some(token) ──► AuthSession             │
//! │                            └─► None ─────────► logged out              │
//! │                                                                         │
//! │  logout: TokenStore::clear (token discarded locally; the backend       │
//! │          keeps no session state to tear down)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every authenticated call takes `&AuthSession` explicitly. There is no
//! ambient global token: a caller can always see, in the signature,
//! whether an operation needs auth.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ApiResult;

// =============================================================================
// Wire Types
// =============================================================================

/// Request body for `POST /users/`.
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

/// A merchant account, as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
}

/// Response body from `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Debug, Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
}

// =============================================================================
// AuthSession
// =============================================================================

/// A live authenticated session: a bearer token and nothing else.
///
/// The token is opaque to the client; only the backend interprets it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    token: String,
}

impl AuthSession {
    pub fn new(token: impl Into<String>) -> Self {
        AuthSession {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl From<TokenResponse> for AuthSession {
    fn from(response: TokenResponse) -> Self {
        AuthSession::new(response.access_token)
    }
}

// =============================================================================
// Auth Endpoints
// =============================================================================

impl ApiClient {
    /// Registers a new merchant account.
    ///
    /// `POST /users/`. Does not log in: callers follow up with [`login`]
    /// to obtain a session.
    ///
    /// [`login`]: ApiClient::login
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<UserProfile> {
        let body = NewUser {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/users/", &body, None).await
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// `POST /users/login`, form-encoded with `username`/`password` field
    /// names (the email goes in `username`).
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthSession> {
        let form = LoginForm {
            username: email,
            password,
        };
        let response: TokenResponse = self.post_form("/users/login", &form, None).await?;
        debug!("Login succeeded");
        Ok(AuthSession::from(response))
    }
}

// =============================================================================
// TokenStore
// =============================================================================

/// Persistence for the auth token across app restarts.
///
/// ## Rules
/// - `load` on a store that has never saved returns `Ok(None)`
/// - `clear` is idempotent
pub trait TokenStore {
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&self, token: &str) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

/// Token store backed by a file in the platform config directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store at the platform-conventional location
    /// (e.g. `~/.config/shopfront/token` on Linux).
    pub fn new() -> io::Result<Self> {
        let dirs = ProjectDirs::from("", "", "shopfront").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "No config directory available")
        })?;
        Ok(FileTokenStore {
            path: dirs.config_dir().join("token"),
        })
    }

    /// Creates a store at an explicit path. Used in tests.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        FileTokenStore { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(token) => {
                let token = token.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Token store that forgets on drop. Used in tests and headless tools.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        InMemoryTokenStore::default()
    }

    /// A token is plain data; a panic elsewhere cannot have left it in a
    /// torn state, so a poisoned lock is still readable.
    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

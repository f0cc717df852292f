//! Auth configuration types

use crate::error::{Error, Result};

/// Environment variable holding the GitHub token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// A resolved API credential
///
/// The token is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wrap an explicit token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from [`TOKEN_ENV_VAR`]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(TOKEN_ENV_VAR, |key| std::env::var(key).ok())
    }

    /// Read the token through an arbitrary lookup
    ///
    /// An unset or blank variable is a configuration error.
    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(token) if !token.trim().is_empty() => Ok(Self::new(token.trim())),
            _ => Err(Error::missing_credential(var)),
        }
    }

    /// The raw token value
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Authentication applied to every request
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Bearer token authentication
    Bearer {
        /// The credential to send
        credentials: Credentials,
    },
}

impl AuthConfig {
    /// Bearer auth from a credential
    pub fn bearer(credentials: Credentials) -> Self {
        Self::Bearer { credentials }
    }
}

//! Authentication module
//!
//! Resolves the API credential from the process environment and applies it
//! to outgoing requests as a bearer token.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Credentials, TOKEN_ENV_VAR};

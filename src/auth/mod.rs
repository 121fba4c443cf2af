//! Authentication module
//!
//! The `Authenticator` owns the key/secret pair and the current bearer token.
//! The token is refreshed lazily: whenever it is missing or past its expiry,
//! the next call to [`Authenticator::token`] authenticates again.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{Credentials, Token, TokenState, AUTH_TYPE};

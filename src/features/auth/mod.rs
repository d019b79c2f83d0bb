//! Bearer token authentication.
//!
//! Every state and district endpoint sits behind
//! [`crate::core::middleware::auth_middleware`], which verifies the token with
//! [`JwtValidator`] and stores the resulting [`model::AuthenticatedUser`] as a
//! request extension.

mod validator;

pub mod model;

pub use validator::JwtValidator;

//! Authentication primitives shared across Keikakun services.
//!
//! Provides access-token validation, request credential lookup, TOTP secrets,
//! MFA recovery codes and password verification. Everything here is a pure
//! function; persistence lives in the services.

pub mod credentials;
pub mod password;
pub mod recovery;
pub mod token;
pub mod totp;

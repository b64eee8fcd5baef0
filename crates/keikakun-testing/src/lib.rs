//! Test utilities for Keikakun services.
//!
//! Provides `MockAuth` (signed access tokens and request headers) and JSON
//! request-body fixtures. Use from dev-dependencies only.

pub mod auth;
pub mod fixture;

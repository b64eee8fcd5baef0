//! Cross-cutting plumbing shared by Keikakun services: configuration loading,
//! request-id middleware, tracing setup and the localized message table.

pub mod config;
pub mod messages;
pub mod middleware;
pub mod tracing;

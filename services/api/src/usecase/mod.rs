pub mod auth;
pub mod mfa;
pub mod restriction;
pub mod welfare_recipient;

pub mod health;
pub mod mfa;
pub mod welfare_recipient;

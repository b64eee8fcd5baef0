mod auth_test;
mod helpers;
mod mfa_test;
mod router_test;

//! Provider capability interface, grant rules, and the Mollie adapter.
//!
//! `strategy` defines [`ProviderStrategy`], the hooks the engine calls to learn a provider's
//! endpoints, scopes, and error conventions. `grant` models the OAuth 2.0 grants and their
//! required parameters. `mollie` implements the hooks for Mollie Connect.

pub mod grant;
pub mod mollie;
pub mod strategy;

pub use grant::*;
pub use mollie::*;
pub use strategy::*;

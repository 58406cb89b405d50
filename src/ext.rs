//! Extension contracts layered on top of the engine.
//!
//! Only request signing lives here for now: [`BearerAuthorization`] is the decorator the client
//! uses for authenticated calls, and [`RequestSignerExt`] lets callers plug in other schemes.

pub mod request_signer;

pub use request_signer::*;

//! Access token model and the redacting secret wrapper it is built on.

pub mod access;
pub mod secret;

//! Testing helpers for the API Hub playground.
pub mod configuration;
pub mod random;

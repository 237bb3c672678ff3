//! Adapters - Implementations of ports against concrete technology.

pub mod auth;

//! tokensec validator library entry.
//!
//! This crate wires namespace trust, access attribute resolution, and token
//! value policy into a single `DefinitionValidator`. It is intended to be
//! consumed by the binary (`main.rs`), by definition loaders embedding the
//! engine, and by integration tests.

pub mod access;
pub mod bundle;
pub mod config;
pub mod context;
pub mod definition;
pub mod engine;
pub mod policy;

pub use engine::DefinitionValidator;

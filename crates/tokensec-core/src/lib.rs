//! tokensec core: access decisions, token values, and the shared error type.
//!
//! This crate holds the model types exchanged between the validator engine,
//! its registries, and callers embedding the engine in a definition loader.
//! It carries no config or registry dependencies so it can be reused on its own.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed definitions surface as `TokenSecError`/`Result`, never a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod access;
pub mod error;
pub mod token;

pub use access::{AccessDecision, Authentication, Visibility};
pub use error::{ErrorKind, LocatedError, Result, SourceLocation, TokenSecError};
pub use token::{Expression, ExpressionKind, TokenValue};

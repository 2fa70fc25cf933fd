//! Access attribute layer (tokenize, resolve method references, decide).
//!
//! Turns a raw `access="..."` string plus the declaring namespace's trust
//! into an `AccessDecision`, or the first violation found.

pub mod attribute;
pub mod methods;
pub mod resolver;

pub use attribute::{AccessAttribute, AccessKeyword, AccessToken};
pub use methods::{AccessMethod, MethodOutput, MethodRegistry, ResolutionError, StaticAccessMethodInvoker};
pub use resolver::AccessResolver;

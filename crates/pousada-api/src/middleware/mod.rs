//! HTTP middleware

pub mod domain;

pub use domain::{resolve_domain, ResolvedProperty};

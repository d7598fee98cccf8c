//! # singleton-core
//!
//! Core types for the singleton workspace.
//!
//! This crate provides the error type, the generic one-time initialisation
//! guard ([`patterns::singleton::Singleton`]) and the process-wide
//! [`SingletonHolder`] with its shared counter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

/// The process-wide holder and its counter.
pub mod holder;

/// Design patterns: the lazily initialised singleton guard.
pub mod patterns;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use holder::SingletonHolder;
pub use patterns::singleton::{Singleton, SingletonState};

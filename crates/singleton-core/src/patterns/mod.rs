//! Patterns sub-module: the one-time initialisation guard.

pub mod singleton;

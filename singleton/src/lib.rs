//! # singleton
//!
//! Demonstration of a lazily initialised, process-wide singleton.
//!
//! This crate is a **façade** that re-exports [`singleton_core`] and adds the
//! scripted [`demo`] run by the `singleton` binary.
//!
//! ```rust
//! use singleton::core::SingletonHolder;
//!
//! let a = SingletonHolder::get_instance();
//! a.increase_value();
//! let b = SingletonHolder::get_instance();
//! assert_eq!(b.counter(), a.counter());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types: the holder, the one-time initialisation guard, and errors.
pub use singleton_core as core;

/// The scripted demonstration.
pub mod demo;

pub use demo::{run, Scenario, Transcript};

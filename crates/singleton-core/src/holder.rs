//! The process-wide [`SingletonHolder`] and its shared counter.
//!
//! There is exactly one `SingletonHolder` per process. It is built lazily by
//! the first call to [`SingletonHolder::get_instance`] and handed out only as
//! a `&'static` reference, so every caller aliases the same counter.
//!
//! The type cannot be constructed, copied, or moved from outside this module:
//!
//! ```compile_fail
//! use singleton_core::SingletonHolder;
//! let rogue = SingletonHolder::new(); // private constructor
//! ```
//!
//! ```compile_fail
//! use singleton_core::SingletonHolder;
//! let handle = SingletonHolder::get_instance();
//! let copy: SingletonHolder = handle.clone(); // no `Clone`
//! ```
//!
//! ```compile_fail
//! use singleton_core::SingletonHolder;
//! let handle = SingletonHolder::get_instance();
//! let moved: SingletonHolder = *handle; // cannot move out of a shared reference
//! ```
//!
//! ```compile_fail
//! use singleton_core::SingletonHolder;
//! let a = SingletonHolder::get_instance();
//! let b = SingletonHolder::get_instance();
//! *a = *b; // cannot assign through a shared reference
//! ```

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::patterns::singleton::SingletonState;

crate::define_singleton!(INSTANCE: SingletonHolder = SingletonHolder::new);

/// Number of `SingletonHolder` values ever built in this process.
static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

/// The single shared instance, carrying a mutable counter.
///
/// The counter is atomic so the `static` is `Sync` and increments from
/// several threads never race.
#[derive(Debug)]
pub struct SingletonHolder {
    counter: AtomicU64,
}

impl SingletonHolder {
    fn new() -> Self {
        let nth = CONSTRUCTED.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("SingletonHolder constructed (instance #{nth})");
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Return the process-wide instance, building it on the first call.
    ///
    /// Any two calls return references to the same storage.
    ///
    /// # Example
    /// ```
    /// use singleton_core::SingletonHolder;
    ///
    /// let a = SingletonHolder::get_instance();
    /// let b = SingletonHolder::get_instance();
    /// assert!(std::ptr::eq(a, b));
    /// ```
    pub fn get_instance() -> &'static SingletonHolder {
        INSTANCE.get()
    }

    /// Increment the counter by exactly one.
    pub fn increase_value(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// Current counter value.
    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Overwrite the counter.
    pub fn set_counter(&self, value: u64) {
        let previous = self.counter.swap(value, Ordering::SeqCst);
        log::trace!("counter set from {previous} to {value}");
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.set_counter(0);
    }

    /// Whether the instance has been built yet. Does not build it.
    pub fn state() -> SingletonState {
        INSTANCE.state()
    }

    /// Number of instances built so far: `0` before first access, `1` after.
    pub fn live_instances() -> usize {
        CONSTRUCTED.load(Ordering::SeqCst)
    }
}

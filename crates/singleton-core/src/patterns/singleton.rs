//! One-time initialisation guard for process-wide singletons.
//!
//! [`Singleton<T>`] pairs a `std::sync::OnceLock<T>` with the function that
//! builds the value, so it can live in a `static` and construct its contents
//! on first access. Concurrent first callers block on the `OnceLock` until
//! the single winning initialiser has finished; every caller then sees the
//! fully built value (acquire/release ordering is provided by `OnceLock`).
//!
//! The [`define_singleton!`] macro declares such a `static`.

use std::fmt;
use std::sync::OnceLock;

/// Lifecycle of a [`Singleton`].
///
/// The only transition is `Uninitialized -> Initialized`, taken once by the
/// first call to [`Singleton::get`]. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonState {
    /// No access has happened yet; the value has not been built.
    Uninitialized,
    /// The value has been built and lives until process exit.
    Initialized,
}

impl fmt::Display for SingletonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingletonState::Uninitialized => write!(f, "Uninitialized"),
            SingletonState::Initialized => write!(f, "Initialized"),
        }
    }
}

/// A lazily built value shared by the whole process.
///
/// Use it as a `static`; the contents are built by `init` on the first call
/// to [`get`](Self::get) and never dropped before process exit.
pub struct Singleton<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> Singleton<T> {
    /// Create an empty guard that will build its value with `init`.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Return the shared value, building it first if this is the first call.
    ///
    /// `init` runs at most once, even when several threads race here.
    pub fn get(&self) -> &T {
        self.cell.get_or_init(self.init)
    }

    /// Return the value if it has already been built, without building it.
    pub fn try_get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SingletonState {
        if self.cell.get().is_some() {
            SingletonState::Initialized
        } else {
            SingletonState::Uninitialized
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(v) => write!(f, "Singleton({:?})", v),
            None => write!(f, "Singleton(<uninitialized>)"),
        }
    }
}

/// Declare a `static` [`Singleton`] built by `$init` on first access.
///
/// `$init` must be a function (or non-capturing closure) returning `$ty`.
///
/// # Example
/// ```
/// use singleton_core::define_singleton;
/// use singleton_core::patterns::singleton::SingletonState;
///
/// struct Registry { names: Vec<&'static str> }
/// define_singleton!(pub REGISTRY: Registry = || Registry { names: vec!["a"] });
///
/// assert_eq!(REGISTRY.state(), SingletonState::Uninitialized);
/// assert_eq!(REGISTRY.get().names, ["a"]);
/// assert_eq!(REGISTRY.state(), SingletonState::Initialized);
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($vis:vis $name:ident : $ty:ty = $init:expr) => {
        $vis static $name: $crate::patterns::singleton::Singleton<$ty> =
            $crate::patterns::singleton::Singleton::new($init);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn starts_uninitialized_and_transitions_once() {
        define_singleton!(NAMES: Vec<u32> = || vec![1, 2, 3]);

        assert_eq!(NAMES.state(), SingletonState::Uninitialized);
        assert!(NAMES.try_get().is_none());

        assert_eq!(NAMES.get(), &vec![1, 2, 3]);
        assert_eq!(NAMES.state(), SingletonState::Initialized);
        assert_eq!(NAMES.try_get(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn every_get_aliases_the_same_value() {
        define_singleton!(VALUE: String = || "shared".to_string());

        let a = VALUE.get();
        let b = VALUE.get();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn concurrent_first_access_builds_once() {
        static BUILDS: AtomicUsize = AtomicUsize::new(0);

        fn build() -> u64 {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(5));
            42
        }

        define_singleton!(SLOW: u64 = build);

        let addrs: Vec<usize> = std::thread::scope(|s| {
            let workers: Vec<_> = (0..8)
                .map(|_| s.spawn(|| SLOW.get() as *const u64 as usize))
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(*SLOW.get(), 42);
    }

    #[test]
    fn debug_and_display() {
        define_singleton!(LAZY: i32 = || 7);

        assert_eq!(format!("{:?}", LAZY), "Singleton(<uninitialized>)");
        assert_eq!(LAZY.state().to_string(), "Uninitialized");
        LAZY.get();
        assert_eq!(format!("{:?}", LAZY), "Singleton(7)");
        assert_eq!(LAZY.state().to_string(), "Initialized");
    }
}

//! # Reducible Testing
//!
//! Testing utilities and helpers for the Reducible architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducers ([`ReducerTest`])
//! - Mock implementations of environment collaborators ([`mocks`])
//! - Logging setup for tests ([`init_test_logging`])
//!
//! ## Example
//!
//! ```ignore
//! use reducible_testing::ReducerTest;
//!
//! ReducerTest::new(CounterReducer)
//!     .with_env(())
//!     .given_state(CounterState::default())
//!     .when_action(CounterAction::Increment)
//!     .then_state(|state| {
//!         assert_eq!(state.count, 1);
//!     })
//!     .run();
//! ```


/// Mock implementations of environment collaborators.
pub mod mocks {
    use reducible_core::environment::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic id generator for tests.
    ///
    /// Produces `"<prefix>-1"`, `"<prefix>-2"`, ... in call order, making
    /// test assertions on ids stable across runs.
    ///
    /// # Example
    ///
    /// ```
    /// use reducible_core::environment::IdGenerator;
    /// use reducible_testing::mocks::SequentialIdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new("todo");
    /// assert_eq!(ids.fresh_id(), "todo-1");
    /// assert_eq!(ids.fresh_id(), "todo-2");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: &'static str,
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator that counts up from 1 under the given prefix
        #[must_use]
        pub const fn new(prefix: &'static str) -> Self {
            Self {
                prefix,
                next: AtomicU64::new(1),
            }
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new("id")
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn fresh_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::Relaxed);
            format!("{}-{}", self.prefix, n)
        }
    }
}

/// Initialise tracing output for a test run.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Filtering follows `RUST_LOG`.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::SequentialIdGenerator;
pub use reducer_test::ReducerTest;

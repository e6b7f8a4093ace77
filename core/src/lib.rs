//! # Reducible Core
//!
//! Core traits and types for the Reducible state-container architecture.
//!
//! This crate provides the fundamental abstractions for building
//! deterministic, single-writer state containers using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: All possible inputs to a reducer, as a closed sum type
//! - **Reducer**: Pure transition `(State, Action, Environment) → State`
//! - **Environment**: Injected collaborators via traits
//!
//! There is no effect system: every transition is total, synchronous, and
//! completes before the next action is accepted. Reducers are values with no
//! interior state, so replaying the same action sequence over the same
//! initial state always yields the same final state.
//!
//! ## Two composition styles
//!
//! The crate supports the same container shape two ways:
//!
//! - [`composition`]: plain reducer composition. Hand-written field-level
//!   reducers are focused onto a parent state with [`composition::scope_reducer`]
//!   and merged with [`composition::combine_reducers`].
//! - [`slice`]: a helper layer that bundles a named concern (initial child
//!   state plus child reducer) into a [`slice::Slice`], mounted onto the
//!   parent with [`slice::mount_slice`].
//!
//! ## Example
//!
//! ```
//! use reducible_core::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: u64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!     }
//! }
//!
//! // The hosting application owns the state and applies actions explicitly.
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

pub mod composition;
pub mod environment;
pub mod logging;
pub mod reducer;
pub mod slice;

pub use composition::{combine_reducers, scope_reducer};
pub use environment::{IdGenerator, UuidGenerator};
pub use logging::logged;
pub use reducer::Reducer;
pub use slice::{mount_slice, Slice};

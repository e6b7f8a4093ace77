//! Todo store built twice on the Reducible reducer core.
//!
//! The same state container - an ordered todo collection, a selection
//! marker, and a mutation counter - is implemented two ways:
//!
//! - [`composed`]: plain reducer composition. One hand-written reducer per
//!   state field, focused and merged with the
//!   [`reducible_core::composition`] combinators.
//! - [`sliced`]: the slice helper layer. The same concerns as
//!   [`reducible_core::slice::Slice`] implementations, which also supply
//!   the initial state.
//!
//! Both renditions expose the identical contract: a pure, total transition
//! over [`StoreState`] for every [`TodoAction`], applied one at a time by
//! whoever owns the state. There is no store singleton; the hosting
//! application holds the one `StoreState` value and passes it in
//! explicitly.
//!
//! # Quick Start
//!
//! ```
//! use reducible_core::environment::UuidGenerator;
//! use reducible_core::{logged, Reducer};
//! use todo_store::{actions, composed};
//!
//! let ids = UuidGenerator;
//! let reducer = logged("todo", composed::reducer());
//! let mut state = composed::initial_state();
//!
//! reducer.reduce(&mut state, actions::create_todo(&ids, "Buy milk"), &());
//! let id = state.todos[0].id.clone();
//!
//! reducer.reduce(&mut state, actions::toggle_todo(id.clone(), true), &());
//! reducer.reduce(&mut state, actions::select_todo(id), &());
//!
//! assert!(state.todos[0].is_complete);
//! assert_eq!(state.counter, 2);
//! ```

pub mod actions;
pub mod composed;
pub mod sliced;
pub mod types;

// Re-export commonly used types
pub use actions::TodoAction;
pub use types::{StoreState, Todo, TodoId};

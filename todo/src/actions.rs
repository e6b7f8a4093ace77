//! Actions and action constructors for the todo store.
//!
//! [`TodoAction`] is the closed sum type over the five action kinds. The
//! constructors below are the only externally invoked API surface; note
//! that [`create_todo`] stamps the fresh id into the payload at
//! construction time, so the reducers themselves stay deterministic and
//! replayable.
//!
//! On the wire an action is a tagged `{kind, payload}` value:
//!
//! ```text
//! {"kind": "CREATE_TODO", "payload": {"id": "...", "desc": "...", "isComplete": false}}
//! ```

use crate::types::{Todo, TodoId};
use reducible_core::environment::IdGenerator;
use serde::{Deserialize, Serialize};

/// All actions the todo store accepts.
///
/// The enum is matched exhaustively by every reducer; actions a reducer
/// does not handle fall into its no-op arm, so each state field is only
/// ever touched by the kinds listed for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a freshly created todo to the collection
    CreateTodo(Todo),
    /// Replace the description of the todo with the given id
    #[serde(rename_all = "camelCase")]
    EditTodo {
        /// Id of the todo to edit
        id: TodoId,
        /// New description
        desc: String,
    },
    /// Replace the completion flag of the todo with the given id
    #[serde(rename_all = "camelCase")]
    ToggleTodo {
        /// Id of the todo to toggle
        id: TodoId,
        /// New completion flag
        is_complete: bool,
    },
    /// Remove the todo with the given id
    DeleteTodo {
        /// Id of the todo to remove
        id: TodoId,
    },
    /// Mark a todo id as selected, without any existence check
    SelectTodo {
        /// Id to select
        id: TodoId,
    },
}

/// Builds a [`TodoAction::CreateTodo`] with a fresh id from the generator.
///
/// The created todo always starts with `is_complete == false`.
#[must_use]
pub fn create_todo(ids: &dyn IdGenerator, desc: impl Into<String>) -> TodoAction {
    TodoAction::CreateTodo(Todo::new(TodoId::new(ids.fresh_id()), desc))
}

/// Builds a [`TodoAction::EditTodo`]
#[must_use]
pub fn edit_todo(id: TodoId, desc: impl Into<String>) -> TodoAction {
    TodoAction::EditTodo {
        id,
        desc: desc.into(),
    }
}

/// Builds a [`TodoAction::ToggleTodo`]
#[must_use]
pub fn toggle_todo(id: TodoId, is_complete: bool) -> TodoAction {
    TodoAction::ToggleTodo { id, is_complete }
}

/// Builds a [`TodoAction::DeleteTodo`]
#[must_use]
pub fn delete_todo(id: TodoId) -> TodoAction {
    TodoAction::DeleteTodo { id }
}

/// Builds a [`TodoAction::SelectTodo`]
#[must_use]
pub fn select_todo(id: TodoId) -> TodoAction {
    TodoAction::SelectTodo { id }
}

impl TodoAction {
    /// Whether this action mutates the todo collection.
    ///
    /// Mutation actions bump the counter; selection does not.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::SelectTodo { .. })
    }
}

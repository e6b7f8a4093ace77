//! Domain types for the todo store.
//!
//! A todo list is an ordered collection of items plus a selection marker and
//! a mutation counter. The whole of the externally observable state lives in
//! [`StoreState`]; the hosting application owns exactly one value of it and
//! passes it explicitly to a reducer.

use serde::{Deserialize, Serialize};

/// Unique, opaque identifier for a todo item.
///
/// Ids are produced by an external generator (see
/// [`reducible_core::environment::IdGenerator`]); the store trusts the
/// generator and never re-derives or validates uniqueness.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps an already-generated identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Description of the todo
    pub desc: String,
    /// Whether the todo is completed
    pub is_complete: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed todo item
    #[must_use]
    pub fn new(id: TodoId, desc: impl Into<String>) -> Self {
        Self {
            id,
            desc: desc.into(),
            is_complete: false,
        }
    }
}

/// The aggregate state of the todo store.
///
/// Insertion order of `todos` is significant for display and preserved by
/// every transition. `selected_todo` is a reference by id, not ownership:
/// it may point at a since-deleted id, which is preserved behavior (the
/// selection is never cleared on delete).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// All todos, in insertion order
    pub todos: Vec<Todo>,
    /// Currently selected todo id, if any
    pub selected_todo: Option<TodoId>,
    /// Number of accepted mutation actions since the initial state
    pub counter: u64,
}

impl StoreState {
    /// Creates an empty store state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Checks whether a todo with the given id exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }
}

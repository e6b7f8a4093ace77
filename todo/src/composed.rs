//! Plain reducer composition rendition of the todo store.
//!
//! Each field of [`StoreState`] gets its own hand-written reducer over the
//! field's type; the field reducers are focused onto the parent state with
//! [`scope_reducer`] and merged with [`combine_reducers`]. This is the
//! long-hand layout; [`crate::sliced`] builds the same container out of
//! slices.
//!
//! Both renditions implement identical transition semantics, which
//! `tests/equivalence.rs` pins down over arbitrary action sequences.

use crate::actions::TodoAction;
use crate::types::{StoreState, Todo, TodoId};
use reducible_core::composition::CombinedReducer;
use reducible_core::{combine_reducers, scope_reducer, Reducer};

/// Reducer over the todo collection.
///
/// Edit, toggle, and delete are no-ops when the id is absent; the
/// collection is otherwise only changed for the matching item.
pub struct TodosReducer;

impl Reducer for TodosReducer {
    type State = Vec<Todo>;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &mut Vec<Todo>, action: TodoAction, _env: &()) {
        match action {
            TodoAction::CreateTodo(todo) => state.push(todo),
            TodoAction::EditTodo { id, desc } => {
                if let Some(todo) = state.iter_mut().find(|todo| todo.id == id) {
                    todo.desc = desc;
                }
            }
            TodoAction::ToggleTodo { id, is_complete } => {
                if let Some(todo) = state.iter_mut().find(|todo| todo.id == id) {
                    todo.is_complete = is_complete;
                }
            }
            TodoAction::DeleteTodo { id } => state.retain(|todo| todo.id != id),
            _ => {}
        }
    }
}

/// Reducer over the selection marker.
///
/// Select stores the id without checking that it exists; nothing else,
/// including deletion of the selected todo, ever touches the selection.
pub struct SelectedTodoReducer;

impl Reducer for SelectedTodoReducer {
    type State = Option<TodoId>;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &mut Option<TodoId>, action: TodoAction, _env: &()) {
        match action {
            TodoAction::SelectTodo { id } => *state = Some(id),
            _ => {}
        }
    }
}

/// Reducer over the mutation counter.
///
/// Reacts to the action kind only: every create/edit/toggle/delete bumps
/// the counter exactly once, whether or not the id matched anything.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = u64;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &mut u64, action: TodoAction, _env: &()) {
        match action {
            TodoAction::CreateTodo(_)
            | TodoAction::EditTodo { .. }
            | TodoAction::ToggleTodo { .. }
            | TodoAction::DeleteTodo { .. } => *state += 1,
            _ => {}
        }
    }
}

/// The initial state of this rendition: no todos, no selection, counter 0
#[must_use]
pub fn initial_state() -> StoreState {
    StoreState::new()
}

/// Builds the composed store reducer.
///
/// # Example
///
/// ```
/// use reducible_core::Reducer;
/// use reducible_core::environment::UuidGenerator;
/// use todo_store::{actions, composed};
///
/// let reducer = composed::reducer();
/// let mut state = composed::initial_state();
///
/// reducer.reduce(&mut state, actions::create_todo(&UuidGenerator, "Buy milk"), &());
/// assert_eq!(state.count(), 1);
/// assert_eq!(state.counter, 1);
/// ```
#[must_use]
pub fn reducer() -> CombinedReducer<StoreState, TodoAction, ()> {
    combine_reducers(vec![
        Box::new(scope_reducer(
            TodosReducer,
            |state: &StoreState| &state.todos,
            |state: &mut StoreState, todos| state.todos = todos,
        )),
        Box::new(scope_reducer(
            SelectedTodoReducer,
            |state: &StoreState| &state.selected_todo,
            |state: &mut StoreState, selected| state.selected_todo = selected,
        )),
        Box::new(scope_reducer(
            CounterReducer,
            |state: &StoreState| &state.counter,
            |state: &mut StoreState, counter| state.counter = counter,
        )),
    ])
}

//! Slice-based rendition of the todo store.
//!
//! The same three concerns as [`crate::composed`], expressed as
//! [`Slice`] implementations: each slice names its field, owns the field's
//! initial value, and reduces the shared [`TodoAction`] type. The counter
//! slice is the interesting one: it reacts to action kinds owned by the
//! todos slice, which slices support without extra wiring because every
//! slice sees the full action.

use crate::actions::TodoAction;
use crate::types::{StoreState, Todo, TodoId};
use reducible_core::composition::CombinedReducer;
use reducible_core::{combine_reducers, mount_slice, Slice};

/// Slice owning the todo collection
pub struct TodosSlice;

impl Slice for TodosSlice {
    type State = Vec<Todo>;
    type Action = TodoAction;
    type Environment = ();

    fn name(&self) -> &'static str {
        "todos"
    }

    fn initial(&self) -> Vec<Todo> {
        Vec::new()
    }

    fn reduce(&self, state: &mut Vec<Todo>, action: &TodoAction, _env: &()) {
        match action {
            TodoAction::CreateTodo(todo) => state.push(todo.clone()),
            TodoAction::EditTodo { id, desc } => {
                if let Some(todo) = state.iter_mut().find(|todo| &todo.id == id) {
                    todo.desc = desc.clone();
                }
            }
            TodoAction::ToggleTodo { id, is_complete } => {
                if let Some(todo) = state.iter_mut().find(|todo| &todo.id == id) {
                    todo.is_complete = *is_complete;
                }
            }
            TodoAction::DeleteTodo { id } => {
                // Index 0 counts as found; a falsy-index check here would
                // silently keep the first todo alive.
                if let Some(index) = state.iter().position(|todo| &todo.id == id) {
                    state.remove(index);
                }
            }
            _ => {}
        }
    }
}

/// Slice owning the selection marker
pub struct SelectedTodoSlice;

impl Slice for SelectedTodoSlice {
    type State = Option<TodoId>;
    type Action = TodoAction;
    type Environment = ();

    fn name(&self) -> &'static str {
        "selected_todo"
    }

    fn initial(&self) -> Option<TodoId> {
        None
    }

    fn reduce(&self, state: &mut Option<TodoId>, action: &TodoAction, _env: &()) {
        match action {
            TodoAction::SelectTodo { id } => *state = Some(id.clone()),
            _ => {}
        }
    }
}

/// Slice owning the mutation counter
pub struct CounterSlice;

impl Slice for CounterSlice {
    type State = u64;
    type Action = TodoAction;
    type Environment = ();

    fn name(&self) -> &'static str {
        "counter"
    }

    fn initial(&self) -> u64 {
        0
    }

    fn reduce(&self, state: &mut u64, action: &TodoAction, _env: &()) {
        if action.is_mutation() {
            *state += 1;
        }
    }
}

/// The initial state of this rendition, assembled from the slices
#[must_use]
pub fn initial_state() -> StoreState {
    StoreState {
        todos: TodosSlice.initial(),
        selected_todo: SelectedTodoSlice.initial(),
        counter: CounterSlice.initial(),
    }
}

/// Builds the slice-based store reducer.
///
/// # Example
///
/// ```
/// use reducible_core::Reducer;
/// use reducible_core::environment::UuidGenerator;
/// use todo_store::{actions, sliced};
///
/// let reducer = sliced::reducer();
/// let mut state = sliced::initial_state();
///
/// reducer.reduce(&mut state, actions::create_todo(&UuidGenerator, "Buy milk"), &());
/// assert_eq!(state.count(), 1);
/// assert_eq!(state.counter, 1);
/// ```
#[must_use]
pub fn reducer() -> CombinedReducer<StoreState, TodoAction, ()> {
    combine_reducers(vec![
        Box::new(mount_slice(
            TodosSlice,
            |state: &StoreState| &state.todos,
            |state: &mut StoreState, todos| state.todos = todos,
        )),
        Box::new(mount_slice(
            SelectedTodoSlice,
            |state: &StoreState| &state.selected_todo,
            |state: &mut StoreState, selected| state.selected_todo = selected,
        )),
        Box::new(mount_slice(
            CounterSlice,
            |state: &StoreState| &state.counter,
            |state: &mut StoreState, counter| state.counter = counter,
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{create_todo, delete_todo, edit_todo, select_todo, toggle_todo};
    use reducible_core::Reducer;
    use reducible_testing::{ReducerTest, SequentialIdGenerator};

    fn state_with(todos: Vec<Todo>) -> StoreState {
        StoreState {
            todos,
            ..initial_state()
        }
    }

    #[test]
    fn initial_state_is_empty() {
        let state = initial_state();
        assert_eq!(state.count(), 0);
        assert_eq!(state.selected_todo, None);
        assert_eq!(state.counter, 0);
    }

    #[test]
    fn create_appends_and_counts() {
        let ids = SequentialIdGenerator::new("todo");

        ReducerTest::new(reducer())
            .with_env(())
            .given_state(initial_state())
            .when_action(create_todo(&ids, "a"))
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert!(!state.todos[0].is_complete);
                assert_eq!(state.counter, 1);
            })
            .run();
    }

    #[test]
    fn delete_removes_the_first_todo_too() {
        // Regression: an index-0 match must count as found.
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(state_with(vec![
                Todo::new(TodoId::from("first"), "x"),
                Todo::new(TodoId::from("second"), "y"),
            ]))
            .when_action(delete_todo(TodoId::from("first")))
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert!(!state.exists(&TodoId::from("first")));
                assert!(state.exists(&TodoId::from("second")));
                assert_eq!(state.counter, 1);
            })
            .run();
    }

    #[test]
    fn delete_of_absent_id_still_counts() {
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(state_with(vec![Todo::new(TodoId::from("a"), "x")]))
            .when_action(delete_todo(TodoId::from("missing")))
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.counter, 1);
            })
            .run();
    }

    #[test]
    fn edit_and_toggle_only_touch_the_matching_todo() {
        let combined = reducer();
        let mut state = state_with(vec![
            Todo::new(TodoId::from("a"), "one"),
            Todo::new(TodoId::from("b"), "two"),
        ]);

        combined.reduce(&mut state, edit_todo(TodoId::from("a"), "edited"), &());
        combined.reduce(&mut state, toggle_todo(TodoId::from("b"), true), &());

        assert_eq!(state.todos[0].desc, "edited");
        assert!(!state.todos[0].is_complete);
        assert_eq!(state.todos[1].desc, "two");
        assert!(state.todos[1].is_complete);
        assert_eq!(state.counter, 2);
    }

    #[test]
    fn select_never_bumps_the_counter() {
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(initial_state())
            .when_actions([
                select_todo(TodoId::from("x")),
                select_todo(TodoId::from("y")),
            ])
            .then_state(|state| {
                assert_eq!(state.selected_todo, Some(TodoId::from("y")));
                assert_eq!(state.counter, 0);
            })
            .run();
    }

    #[test]
    fn mutation_counter_tracks_every_mutation_kind() {
        let ids = SequentialIdGenerator::new("todo");

        ReducerTest::new(reducer())
            .with_env(())
            .given_state(initial_state())
            .when_actions([
                create_todo(&ids, "a"),
                edit_todo(TodoId::from("todo-1"), "b"),
                toggle_todo(TodoId::from("todo-1"), true),
                delete_todo(TodoId::from("todo-1")),
                select_todo(TodoId::from("todo-1")),
            ])
            .then_state(|state| {
                assert_eq!(state.counter, 4);
                assert_eq!(state.count(), 0);
            })
            .run();
    }
}

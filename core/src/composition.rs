//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//!
//! Together they cover the classic "one reducer per state field" layout:
//! write each field's reducer against its own state type, focus each onto
//! the parent with [`scope_reducer`], then merge the focused reducers with
//! [`combine_reducers`].

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence over the same state. This is useful when
/// reducer logic is split across multiple implementations, each owning one
/// concern of a larger state value.
///
/// # Examples
///
/// ```
/// use reducible_core::Reducer;
/// use reducible_core::composition::combine_reducers;
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: u64,
///     name: String,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Increment,
///     SetName(String),
/// }
///
/// struct CounterReducer;
/// struct NameReducer;
///
/// impl Reducer for CounterReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut AppState, action: AppAction, _env: &()) {
///         if matches!(action, AppAction::Increment) {
///             state.counter += 1;
///         }
///     }
/// }
///
/// impl Reducer for NameReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut AppState, action: AppAction, _env: &()) {
///         if let AppAction::SetName(name) = action {
///             state.name = name;
///         }
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);
///
/// let mut state = AppState::default();
/// combined.reduce(&mut state, AppAction::Increment, &());
/// assert_eq!(state.counter, 1);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows reducers written for a single field to be reused within a
/// larger application state. The lens is a get/set function pair; the child
/// state is cloned out, reduced, and written back.
///
/// # Examples
///
/// ```
/// use reducible_core::Reducer;
/// use reducible_core::composition::scope_reducer;
///
/// #[derive(Clone)]
/// enum Action {
///     Increment,
/// }
///
/// struct CountReducer;
///
/// impl Reducer for CountReducer {
///     type State = u64;
///     type Action = Action;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut u64, action: Action, _env: &()) {
///         match action {
///             Action::Increment => *state += 1,
///         }
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     count: u64,
///     label: String,
/// }
///
/// let scoped = scope_reducer(
///     CountReducer,
///     |app: &AppState| &app.count,
///     |app: &mut AppState, count| app.count = count,
/// );
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, Action::Increment, &());
/// assert_eq!(state.count, 1);
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        let mut sub_state = (self.get_state)(state).clone();
        self.reducer.reduce(&mut sub_state, action, env);
        (self.set_state)(state, sub_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        counter: i64,
        name: String,
    }

    #[derive(Clone)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut TestState, action: TestAction, _env: &()) {
            match action {
                TestAction::Increment => state.counter += 1,
                TestAction::Decrement => state.counter -= 1,
                TestAction::SetName(_) => {}
            }
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut TestState, action: TestAction, _env: &()) {
            if let TestAction::SetName(name) = action {
                state.name = name;
            }
        }
    }

    #[test]
    fn test_combine_reducers() {
        let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);

        let mut state = TestState::default();

        combined.reduce(&mut state, TestAction::Increment, &());
        assert_eq!(state.counter, 1);

        combined.reduce(&mut state, TestAction::SetName("Alice".to_string()), &());
        assert_eq!(state.name, "Alice");

        combined.reduce(&mut state, TestAction::Decrement, &());
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct ParentState {
        sub: i64,
        other: String,
    }

    #[derive(Clone)]
    enum SubAction {
        Add(i64),
    }

    struct SubReducer;

    impl Reducer for SubReducer {
        type State = i64;
        type Action = SubAction;
        type Environment = ();

        fn reduce(&self, state: &mut i64, action: SubAction, _env: &()) {
            match action {
                SubAction::Add(n) => *state += n,
            }
        }
    }

    #[test]
    fn test_scope_reducer() {
        let scoped = scope_reducer(
            SubReducer,
            |parent: &ParentState| &parent.sub,
            |parent: &mut ParentState, sub| parent.sub = sub,
        );

        let mut state = ParentState {
            sub: 5,
            other: "test".to_string(),
        };

        scoped.reduce(&mut state, SubAction::Add(3), &());
        assert_eq!(state.sub, 8);
        assert_eq!(state.other, "test");
    }

    proptest! {
        #[test]
        fn scoped_reducer_never_touches_sibling_fields(start in -1_000_000i64..1_000_000, delta in -1000i64..1000, other in ".*") {
            let scoped = scope_reducer(
                SubReducer,
                |parent: &ParentState| &parent.sub,
                |parent: &mut ParentState, sub| parent.sub = sub,
            );

            let mut state = ParentState {
                sub: start,
                other: other.clone(),
            };

            scoped.reduce(&mut state, SubAction::Add(delta), &());
            prop_assert_eq!(state.sub, start + delta);
            prop_assert_eq!(state.other, other);
        }
    }
}

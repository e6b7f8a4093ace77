//! The Reducer trait - core abstraction for state transitions.
//!
//! Reducers are pure functions: `(State, Action, Environment) → State`.
//! The state is updated in place through a mutable reference, which is the
//! in-place rendering of the conceptual `apply(state, action) -> state'`
//! transition. A reducer must not perform I/O, hold interior state, or
//! observe anything beyond its three arguments.

/// The Reducer trait.
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected collaborators this reducer needs
///
/// Actions a reducer does not recognise must leave the state untouched;
/// implementations carry a `_ => {}` arm for forward compatibility.
///
/// # Example
///
/// ```
/// use reducible_core::Reducer;
///
/// struct NameReducer;
///
/// #[derive(Clone)]
/// enum Action {
///     SetName(String),
///     Noop,
/// }
///
/// impl Reducer for NameReducer {
///     type State = String;
///     type Action = Action;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut String, action: Action, _env: &()) {
///         match action {
///             Action::SetName(name) => *state = name,
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected collaborators
    type Environment;

    /// Apply an action to the state.
    ///
    /// This is a total function: every action value yields a valid
    /// successor state, and unrecognised actions are a no-op.
    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct State {
        applied: Vec<String>,
    }

    #[derive(Clone)]
    enum Action {
        Record(String),
        Ignored,
    }

    struct RecordingReducer;

    impl Reducer for RecordingReducer {
        type State = State;
        type Action = Action;
        type Environment = ();

        fn reduce(&self, state: &mut State, action: Action, _env: &()) {
            match action {
                Action::Record(label) => state.applied.push(label),
                Action::Ignored => {}
            }
        }
    }

    #[test]
    fn reduce_applies_actions_in_submission_order() {
        let mut state = State::default();
        RecordingReducer.reduce(&mut state, Action::Record("first".to_string()), &());
        RecordingReducer.reduce(&mut state, Action::Record("second".to_string()), &());
        assert_eq!(state.applied, vec!["first", "second"]);
    }

    #[test]
    fn unrecognised_action_is_a_no_op() {
        let mut state = State::default();
        let before = state.clone();
        RecordingReducer.reduce(&mut state, Action::Ignored, &());
        assert_eq!(state, before);
    }
}

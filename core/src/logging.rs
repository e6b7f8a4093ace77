//! Action logging combinator
//!
//! [`logged`] wraps any reducer so that every action flowing through it is
//! emitted on the `tracing` spans/events pipeline before the inner reducer
//! runs. The wrapper is transparent: it adds no transition semantics of its
//! own, so a logged reducer and its inner reducer always produce the same
//! state.

use crate::reducer::Reducer;

/// Wraps a reducer with action logging.
///
/// Actions are logged at `debug` level, the resulting state at `trace`
/// level under the given container name.
///
/// # Examples
///
/// ```
/// use reducible_core::{logged, Reducer};
///
/// struct CountReducer;
///
/// #[derive(Clone, Debug)]
/// enum Action {
///     Increment,
/// }
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
/// let reducer = logged("counter", CountReducer);
/// let mut state = 0;
/// reducer.reduce(&mut state, Action::Increment, &());
/// assert_eq!(state, 1);
/// ```
pub fn logged<R>(name: &'static str, reducer: R) -> Logged<R>
where
    R: Reducer,
    R::State: std::fmt::Debug,
    R::Action: std::fmt::Debug,
{
    Logged {
        name,
        inner: reducer,
    }
}

/// A reducer wrapped with action logging.
///
/// Created by [`logged`].
pub struct Logged<R> {
    name: &'static str,
    inner: R,
}

impl<R> Reducer for Logged<R>
where
    R: Reducer,
    R::State: std::fmt::Debug,
    R::Action: std::fmt::Debug,
{
    type State = R::State;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        tracing::debug!(store = self.name, action = ?action, "applying action");
        self.inner.reduce(state, action, env);
        tracing::trace!(store = self.name, state = ?state, "state after action");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    enum TestAction {
        Add(u64),
    }

    struct AddReducer;

    impl Reducer for AddReducer {
        type State = u64;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut u64, action: TestAction, _env: &()) {
            match action {
                TestAction::Add(n) => *state += n,
            }
        }
    }

    #[test]
    fn logged_reducer_is_transparent() {
        let plain = AddReducer;
        let wrapped = logged("test", AddReducer);

        let mut plain_state = 0;
        let mut wrapped_state = 0;

        plain.reduce(&mut plain_state, TestAction::Add(7), &());
        wrapped.reduce(&mut wrapped_state, TestAction::Add(7), &());

        assert_eq!(plain_state, wrapped_state);
    }
}

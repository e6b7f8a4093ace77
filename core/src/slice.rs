//! Slice helper layer
//!
//! A [`Slice`] bundles one named concern of a larger state: its initial
//! child state and a child reducer over the shared action type. Slices are
//! the higher-level alternative to hand-wiring [`crate::composition`]
//! lenses for every field: mount each slice once with [`mount_slice`] and
//! merge the mounted reducers with [`crate::composition::combine_reducers`].
//!
//! Because every slice sees the full action type, a slice can react to
//! actions "owned" by another slice (a counter slice counting todo
//! mutations, for example) without any extra wiring.
//!
//! # Examples
//!
//! ```
//! use reducible_core::{mount_slice, Reducer, Slice};
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     count: u64,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Increment,
//! }
//!
//! struct CountSlice;
//!
//! impl Slice for CountSlice {
//!     type State = u64;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn name(&self) -> &'static str {
//!         "count"
//!     }
//!
//!     fn initial(&self) -> u64 {
//!         0
//!     }
//!
//!     fn reduce(&self, state: &mut u64, action: &AppAction, _env: &()) {
//!         match action {
//!             AppAction::Increment => *state += 1,
//!         }
//!     }
//! }
//!
//! let mounted = mount_slice(
//!     CountSlice,
//!     |app: &AppState| &app.count,
//!     |app: &mut AppState, count| app.count = count,
//! );
//!
//! let mut state = AppState { count: CountSlice.initial() };
//! mounted.reduce(&mut state, AppAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

use crate::reducer::Reducer;

/// One named concern of a larger state.
///
/// A slice owns its child state type end to end: it knows the state's
/// initial value and how every action transforms it. The action is taken by
/// reference because the same action value is offered to every slice.
pub trait Slice {
    /// The child state this slice owns
    type State: Clone;

    /// The shared action type offered to every slice
    type Action;

    /// The environment type with injected collaborators
    type Environment;

    /// Name of the slice, used in trace output
    fn name(&self) -> &'static str;

    /// The initial value of the child state
    fn initial(&self) -> Self::State;

    /// Apply an action to the child state.
    ///
    /// Actions this slice does not handle must leave the state untouched.
    fn reduce(&self, state: &mut Self::State, action: &Self::Action, env: &Self::Environment);
}

/// Mounts a slice onto a parent state through a get/set lens.
///
/// The returned value implements [`Reducer`] over the parent state, so
/// mounted slices compose with
/// [`combine_reducers`](crate::composition::combine_reducers) exactly like
/// hand-scoped reducers do.
pub fn mount_slice<S, L, A, E>(
    slice: L,
    get_state: fn(&S) -> &L::State,
    set_state: fn(&mut S, L::State),
) -> MountedSlice<S, L, A, E>
where
    S: 'static,
    L: Slice<Action = A, Environment = E>,
    A: 'static,
    E: 'static,
{
    MountedSlice {
        slice,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A slice mounted onto a parent state.
///
/// Created by [`mount_slice`].
pub struct MountedSlice<S, L, A, E>
where
    S: 'static,
    L: Slice<Action = A, Environment = E>,
    A: 'static,
    E: 'static,
{
    slice: L,
    get_state: fn(&S) -> &L::State,
    set_state: fn(&mut S, L::State),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, L, A, E> Reducer for MountedSlice<S, L, A, E>
where
    S: 'static,
    L: Slice<Action = A, Environment = E>,
    A: 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        tracing::trace!(slice = self.slice.name(), "reducing slice");
        let mut sub_state = (self.get_state)(state).clone();
        self.slice.reduce(&mut sub_state, &action, env);
        (self.set_state)(state, sub_state);
    }
}

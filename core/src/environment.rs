//! Environment traits - injected collaborators
//!
//! External collaborators are abstracted behind traits and injected where
//! they are needed, keeping reducers deterministic and testable. The only
//! collaborator this crate defines is the identifier generator: fresh ids
//! are stamped into action payloads at construction time so that replaying
//! the same actions always reproduces the same state.

use uuid::Uuid;

/// Generates fresh, unique, opaque identifiers.
///
/// Uniqueness is the generator's responsibility; consumers trust it and
/// never re-validate.
///
/// # Examples
///
/// ```
/// use reducible_core::environment::{IdGenerator, UuidGenerator};
///
/// let ids = UuidGenerator;
/// assert_ne!(ids.fresh_id(), ids.fresh_id());
/// ```
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier, distinct from every other id this
    /// generator has produced.
    fn fresh_id(&self) -> String;
}

/// Production id generator backed by random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn fresh_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

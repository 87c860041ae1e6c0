//! Change-notification contract consumed by at most one subscriber.

use crate::collection::change::ChangeOperation;

/// Receiver of collection change notifications.
///
/// Methods take `&self`; implementors keep their own state behind interior
/// mutability because the collection only holds a `Weak` reference.
pub trait ChangeObserver {
    /// Discard incremental state and re-read the whole collection.
    fn full_reload(&self);

    /// Perform exactly the structural change named by `operation`.
    ///
    /// Calls for one mutation arrive as `BeginBatch`, op, `EndBatch`, never
    /// interleaved with another mutation.
    fn apply(&self, operation: ChangeOperation);
}

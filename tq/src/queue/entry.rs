//! What the queue needs from the values it orders

/// A payload the priority queue can order and look up
///
/// The queue reads `id` for lookup during key adjustment and reads and
/// writes `priority` for ordering. Nothing else about the payload is
/// inspected.
pub trait Schedulable {
    /// Identity used to locate an enqueued entry
    type Id: PartialEq;

    /// Ordering key; lower values are extracted first
    type Priority: Ord + Copy;

    /// Identity of this entry
    fn id(&self) -> &Self::Id;

    /// Current priority
    fn priority(&self) -> Self::Priority;

    /// Overwrite the priority
    ///
    /// The queue calls this only from its own adjustment operations, which
    /// repair the heap immediately afterwards.
    fn set_priority(&mut self, priority: Self::Priority);
}

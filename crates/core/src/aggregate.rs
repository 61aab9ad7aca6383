//! Command/event aggregate contract.

/// State that changes only through events it decided on itself.
///
/// `handle` inspects the current state and a command and reports what
/// happened; `apply` folds one of those events back in. A store can therefore
/// reject a command with the state untouched, and publish the very events it
/// applied.
pub trait Aggregate {
    type Id: Copy + Eq + core::fmt::Debug;
    type Command: core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    fn id(&self) -> Self::Id;

    /// Count of events applied since construction.
    fn version(&self) -> u64;

    /// Pure decision. An empty list means "accepted, nothing changes".
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Must advance `version()` by exactly one.
    fn apply(&mut self, event: &Self::Event);

    /// Apply a history in order.
    fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a Self::Event>)
    where
        Self::Event: 'a,
    {
        for event in events {
            self.apply(event);
        }
    }
}

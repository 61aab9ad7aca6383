/// Something that happened to an aggregate, published after it was applied.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name observers match on, e.g. `cart.item.added`.
    fn event_type(&self) -> &'static str;

    /// Bumped when the payload shape changes.
    fn schema_version(&self) -> u32 {
        1
    }
}

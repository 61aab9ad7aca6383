use storefront_core::Aggregate;

/// Decide, then apply what was decided.
///
/// A rejected command returns before anything is applied.
pub fn execute<A: Aggregate>(
    aggregate: &mut A,
    command: &A::Command,
) -> Result<Vec<A::Event>, A::Error> {
    let decided = aggregate.handle(command)?;
    aggregate.replay(&decided);
    Ok(decided)
}

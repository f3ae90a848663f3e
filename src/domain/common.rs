use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Entities that carry a monetary amount.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of any collection of amounted entities. An empty
/// collection totals `0.0`, never `-0.0`.
pub fn total_amount<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(Amounted::amount)
        .fold(0.0, |acc, amount| acc + amount)
}

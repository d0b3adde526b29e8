//! Multi-predicate filtering over record snapshots.

/// A single filter condition over a record type.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Wrap a closure as a [`Predicate`].
pub fn matching<T, F>(condition: F) -> Predicate<T>
where
    F: Fn(&T) -> bool + 'static,
{
    Box::new(condition)
}

/// Apply all predicates (AND-combined) to a record snapshot.
///
/// Returns a new vector; the input and its order are untouched. An empty
/// predicate list selects everything.
pub fn filter<T: Clone>(records: &[T], predicates: &[Predicate<T>]) -> Vec<T> {
    records
        .iter()
        .filter(|record| predicates.iter().all(|p| p(record)))
        .cloned()
        .collect()
}

/// Case-insensitive substring search across a set of string-valued fields.
///
/// Absent fields are treated as empty strings. An empty needle matches
/// every record.
pub fn search<T: 'static>(needle: &str, fields: Vec<fn(&T) -> Option<&str>>) -> Predicate<T> {
    let needle = needle.to_lowercase();
    Box::new(move |record| {
        if needle.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| field(record).unwrap_or_default().to_lowercase().contains(&needle))
    })
}

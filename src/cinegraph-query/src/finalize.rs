//! Result finalization: deduplication and deterministic ordering.

use std::collections::HashSet;

use cinegraph_core::CatalogEntity;

/// Requested ordering for a finalized result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Keep the traversal's emission order (after deduplication).
    #[default]
    Unordered,
    /// Ascending display name, ties broken by ascending identifier.
    ByName,
}

/// Collapse a multiset by entity identifier, keeping the first occurrence.
pub fn distinct<'a, T: CatalogEntity>(items: Vec<&'a T>) -> Vec<&'a T> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.key()))
        .collect()
}

/// Sort ascending by display name, breaking name ties by ascending
/// identifier so the order is total and deterministic.
pub fn sorted_by_name<'a, T: CatalogEntity>(mut items: Vec<&'a T>) -> Vec<&'a T> {
    items.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.key().cmp(b.key())));
    items
}

/// Convert an emitted multiset into the final distinct sequence, sorted
/// when the query semantics request it.
pub fn finalize<'a, T: CatalogEntity>(items: Vec<&'a T>, order: Order) -> Vec<&'a T> {
    let items = distinct(items);
    match order {
        Order::Unordered => items,
        Order::ByName => sorted_by_name(items),
    }
}

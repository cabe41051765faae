//! Duplication checking.
//!
//! A reusable, stateless grouping utility behind every "duplicated X"
//! rule in the analyzers: features, scenarios, UI elements, test cases,
//! constants, tables and databases all reduce to
//! [`check_duplicated_named_nodes`] with a different label and key.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::ast::NamedNode;

use super::LocatedException;

/// Items that repeat an earlier value under identity equality.
pub fn duplicates<T: PartialEq>(items: &[T]) -> Vec<&T> {
    let mut seen: Vec<&T> = Vec::new();
    let mut repeated = Vec::new();
    for item in items {
        if seen.contains(&item) {
            repeated.push(item);
        } else {
            seen.push(item);
        }
    }
    repeated
}

/// For every group of two or more items sharing a key, every item after
/// the first, in declaration order.
pub fn with_duplicated_property<'a, T, K, F>(items: &'a [T], key_fn: F) -> Vec<&'a T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    map_duplicates(items, key_fn)
        .into_iter()
        .flat_map(|(_, group)| group.into_iter().skip(1))
        .collect()
}

/// Group items by key, keeping only keys with two or more items.
/// Keys and group members preserve first-seen order.
pub fn map_duplicates<'a, T, K, F>(items: &'a [T], key_fn: F) -> IndexMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<&T>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(item)).or_default().push(item);
    }
    groups.retain(|_, group| group.len() >= 2);
    groups
}

/// The canonical "duplicate X" rule, keyed by node name.
///
/// For every group of two or more same-named nodes, appends one error
/// listing every member's location in first-seen order.
pub fn check_duplicated_named_nodes<N: NamedNode>(
    nodes: &[&N],
    errors: &mut Vec<LocatedException>,
    label: &str,
) {
    check_duplicated_nodes_with_key(nodes, errors, label, |node| node.name().to_string());
}

/// Same as [`check_duplicated_named_nodes`] with a caller-supplied key
/// (e.g. the composite scenario/variant/name key of test cases).
pub fn check_duplicated_nodes_with_key<N, F>(
    nodes: &[&N],
    errors: &mut Vec<LocatedException>,
    label: &str,
    key_fn: F,
) where
    N: NamedNode,
    F: Fn(&N) -> String,
{
    for (key, group) in map_duplicates(nodes, |node| key_fn(node)) {
        let places = group
            .iter()
            .map(|node| node.location().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let anchor = group[0].location().clone();
        errors.push(LocatedException::new(
            format!("Duplicated {label} \"{key}\" in: {places}"),
            anchor,
        ));
    }
}

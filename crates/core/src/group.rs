//! List helpers behind the OR-group and AND-OR matrix transitions.
//!
//! All helpers return new lists and leave their inputs untouched.

use crate::types::FilterItem;

/// Drop every entry sharing `item`'s value, then append `item`.
///
/// Re-adding an existing value therefore moves it to the end of the group:
/// the most recently selected item is always last.
pub fn add_or_replace_by_value(items: Option<&[FilterItem]>, item: &FilterItem) -> Vec<FilterItem> {
    let mut next: Vec<FilterItem> = items
        .unwrap_or_default()
        .iter()
        .filter(|existing| !existing.same_value(item))
        .cloned()
        .collect();
    next.push(item.clone());
    next
}

/// Every entry of `items` whose value differs from `item`'s.
pub fn remove_by_value(items: &[FilterItem], item: &FilterItem) -> Vec<FilterItem> {
    items
        .iter()
        .filter(|existing| !existing.same_value(item))
        .cloned()
        .collect()
}

/// Copy of `items` with the element at `at_index` replaced by `new_item`.
///
/// A negative or out-of-range index appends `new_item` instead of padding
/// the list, and a missing or empty list yields `[new_item]`.
pub fn replace_item_at_index<T: Clone>(items: Option<&[T]>, at_index: i64, new_item: T) -> Vec<T> {
    let items = items.unwrap_or_default();
    if items.is_empty() {
        return vec![new_item];
    }

    let mut next = items.to_vec();
    match valid_index(items.len(), at_index) {
        Some(i) => next[i] = new_item,
        None => next.push(new_item),
    }
    next
}

/// `at_index` as a position inside a list of `len` elements, if it is one.
pub fn valid_index(len: usize, at_index: i64) -> Option<usize> {
    usize::try_from(at_index).ok().filter(|i| *i < len)
}

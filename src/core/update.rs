//! Helpers that build updated copies of sequences and sets
//!
//! None of these touch their input; each returns a fresh value that the
//! reducer swaps into the next state.

use std::collections::BTreeSet;

use super::charter::Direction;
use super::error::EditError;

/// Copy of `items` with `item` appended
pub fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

/// Copy of `items` with the element at `index` passed through `edit`
pub fn updated<T: Clone>(
    items: &[T],
    list: &'static str,
    index: usize,
    edit: impl FnOnce(&mut T),
) -> Result<Vec<T>, EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            list,
            index,
            len: items.len(),
        });
    }
    let mut next = items.to_vec();
    edit(&mut next[index]);
    Ok(next)
}

/// Copy of `items` with the element at `index` swapped with its neighbour
pub fn swapped<T: Clone>(
    items: &[T],
    index: usize,
    direction: Direction,
) -> Result<Vec<T>, EditError> {
    let out_of_range = EditError::MoveOutOfRange {
        index,
        direction,
        len: items.len(),
    };
    let target = match direction.target(index) {
        Some(target) if index < items.len() && target < items.len() => target,
        _ => return Err(out_of_range),
    };
    let mut next = items.to_vec();
    next.swap(index, target);
    Ok(next)
}

/// Copy of `set` with `value` removed if present, inserted otherwise
pub fn toggled<T: Ord + Clone>(set: &BTreeSet<T>, value: T) -> BTreeSet<T> {
    let mut next = set.clone();
    if !next.remove(&value) {
        next.insert(value);
    }
    next
}

//! Stable merge sort and the strategy trait the search engine sorts through.

use std::cmp::Ordering;

/// A sorting strategy: takes a sequence and a comparator, returns it sorted.
pub trait Sorter {
    fn sort_by<T, F>(&self, items: Vec<T>, cmp: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort<T: Ord>(&self, items: Vec<T>) -> Vec<T> {
        self.sort_by(items, T::cmp)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort_by<T, F>(&self, items: Vec<T>, cmp: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort_by(items, cmp)
    }
}

pub fn merge_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Top-down merge sort. Splits at the midpoint, sorts both halves, then
/// merges taking the left head unless the right one is strictly smaller.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_rec(items, &mut cmp)
}

fn sort_rec<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = sort_rec(items, cmp);
    let right = sort_rec(right, cmp);
    merge(left, right, cmp)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

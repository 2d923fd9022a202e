//! Searching without mutation.
//!
//! Every routine returns `Option<QueryResult>`: `None` means no match (or an
//! empty input), so a hit at index 0 is never ambiguous.

use alloc::vec::Vec;

use kioku_check::kioku_assert;
use kioku_dstruct::Sequence;

/// Where a search found its answer, and the element found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryResult<T> {
    pub idx: usize,
    pub val: T,
}

impl<T: Clone> QueryResult<T> {
    fn at(slice: &[T], idx: usize) -> Self {
        Self {
            idx,
            val: slice[idx].clone(),
        }
    }
}

/// Which match [`linear_with_mode`] reports when there are several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    #[default]
    First,
    Last,
}

/// First element equal to `value`. O(n).
pub fn linear<S>(seq: &S, value: &S::Item) -> Option<QueryResult<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq + Clone,
{
    linear_with_mode(seq, value, QueryMode::First)
}

pub fn linear_with_mode<S>(
    seq: &S,
    value: &S::Item,
    mode: QueryMode,
) -> Option<QueryResult<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq + Clone,
{
    let slice = seq.as_slice();
    let idx = match mode {
        QueryMode::First => slice.iter().position(|elem| elem == value),
        QueryMode::Last => slice.iter().rposition(|elem| elem == value),
    }?;
    Some(QueryResult::at(slice, idx))
}

/// Indices of every element equal to `value`, ascending.
pub fn linear_all<S>(seq: &S, value: &S::Item) -> Vec<usize>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    seq.as_slice()
        .iter()
        .enumerate()
        .filter_map(|(idx, elem)| (elem == value).then_some(idx))
        .collect()
}

/// Binary search over an ascending sequence. O(log n) in release builds;
/// debug builds first verify sortedness in O(n).
///
/// With duplicates, any one of the equal elements may be reported. Empty
/// input yields `None`.
///
/// # Panics
///
/// In debug builds, when `seq` is not sorted ascending.
#[track_caller]
pub fn binary<S>(seq: &S, value: &S::Item) -> Option<QueryResult<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd + Clone,
{
    let slice = seq.as_slice();
    if cfg!(debug_assertions) {
        kioku_assert!(slice.is_sorted());
    }

    // Half-open window: `right` is one past the last candidate.
    let (mut left, mut right) = (0, slice.len());
    while left < right {
        let mid = left + (right - left) / 2;
        if slice[mid] < *value {
            left = mid + 1;
        } else if slice[mid] > *value {
            right = mid;
        } else {
            return Some(QueryResult::at(slice, mid));
        }
    }
    None
}

/// Smallest element and the index of its first occurrence. O(n).
pub fn min<S>(seq: &S) -> Option<QueryResult<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd + Clone,
{
    extremum(seq.as_slice(), |candidate, best| candidate < best)
}

/// Largest element and the index of its first occurrence. O(n).
pub fn max<S>(seq: &S) -> Option<QueryResult<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd + Clone,
{
    extremum(seq.as_slice(), |candidate, best| candidate > best)
}

fn extremum<T: Clone>(slice: &[T], beats: impl Fn(&T, &T) -> bool) -> Option<QueryResult<T>> {
    let (first, rest) = slice.split_first()?;
    let (mut best_idx, mut best) = (0, first);
    for (offset, elem) in rest.iter().enumerate() {
        if beats(elem, best) {
            best_idx = offset + 1;
            best = elem;
        }
    }
    Some(QueryResult {
        idx: best_idx,
        val: best.clone(),
    })
}

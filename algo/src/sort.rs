//! In-place sorting.
//!
//! All routines sort ascending and assume `PartialOrd` behaves as a total
//! order on the input; incomparable values (NaN) leave the result unspecified
//! but never panic.
//!
//! | Routine | Comparisons | Extra memory | Notes |
//! |---------|-------------|--------------|-------|
//! | [`selection`] | O(n²) | O(1) | at most n swaps |
//! | [`insertion`] | O(n²) | O(1) | adaptive, fast on nearly sorted input |
//! | [`bubble`] | O(n²) | O(1) | stops after a pass without swaps |
//! | [`merge`] | O(n log n) | O(n) | bottom-up, stable |

use alloc::vec::Vec;

use kioku_dstruct::SequenceMut;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Selection,
    Insertion,
    Bubble,
    Merge,
}

impl SortKind {
    pub const ALL: [SortKind; 4] = [
        SortKind::Selection,
        SortKind::Insertion,
        SortKind::Bubble,
        SortKind::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortKind::Selection => "selection",
            SortKind::Insertion => "insertion",
            SortKind::Bubble => "bubble",
            SortKind::Merge => "merge",
        }
    }
}

/// Sorts `seq` with the routine named by `kind`.
pub fn sort<S>(kind: SortKind, seq: &mut S)
where
    S: SequenceMut + ?Sized,
    S::Item: PartialOrd + Clone,
{
    match kind {
        SortKind::Selection => selection(seq),
        SortKind::Insertion => insertion(seq),
        SortKind::Bubble => bubble(seq),
        SortKind::Merge => merge(seq),
    }
}

/// Moves the minimum of `i..` into position `i`, for each `i`.
pub fn selection<S>(seq: &mut S)
where
    S: SequenceMut + ?Sized,
    S::Item: PartialOrd,
{
    let data = seq.as_mut_slice();
    for i in 0..data.len() {
        let mut min_idx = i;
        for j in i + 1..data.len() {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        data.swap(i, min_idx);
    }
}

/// Swaps each element leftwards until its left neighbor is not larger.
pub fn insertion<S>(seq: &mut S)
where
    S: SequenceMut + ?Sized,
    S::Item: PartialOrd,
{
    let data = seq.as_mut_slice();
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j] < data[j - 1] {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Swaps out-of-order neighbors until a full pass makes no swap.
pub fn bubble<S>(seq: &mut S)
where
    S: SequenceMut + ?Sized,
    S::Item: PartialOrd,
{
    let data = seq.as_mut_slice();
    // After each pass the largest remaining element is in its final slot.
    let mut end = data.len();
    let mut swapped = true;
    while swapped && end > 1 {
        swapped = false;
        for i in 1..end {
            if data[i - 1] > data[i] {
                data.swap(i - 1, i);
                swapped = true;
            }
        }
        end -= 1;
    }
}

/// Bottom-up merge sort.
///
/// Runs of `stride` elements are merged pairwise into a scratch copy, which is
/// written back before the stride doubles. Ties take the left run first, so
/// equal elements keep their relative order.
pub fn merge<S>(seq: &mut S)
where
    S: SequenceMut + ?Sized,
    S::Item: PartialOrd + Clone,
{
    let data = seq.as_mut_slice();
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut scratch: Vec<S::Item> = data.to_vec();
    let mut stride = 1;
    while stride < len {
        let block = stride.saturating_mul(2);
        for head in (0..len).step_by(block) {
            let mid = head.saturating_add(stride).min(len);
            let end = head.saturating_add(block).min(len);
            merge_runs(&data[head..mid], &data[mid..end], &mut scratch[head..end]);
        }
        data.clone_from_slice(&scratch);
        stride = block;
    }
}

/// Merges two ascending runs into `out`, whose length is their combined length.
/// An exhausted run never wins, so the other one drains.
fn merge_runs<T: PartialOrd + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    debug_assert_eq!(left.len() + right.len(), out.len());
    let (mut l, mut r) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = match (left.get(l), right.get(r)) {
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if take_left {
            *slot = left[l].clone();
            l += 1;
        } else {
            *slot = right[r].clone();
            r += 1;
        }
    }
}

//! Search and sort routines over the kioku capability traits.
//!
//! Everything here is generic over [`Sequence`](kioku_dstruct::Sequence) or
//! [`SequenceMut`](kioku_dstruct::SequenceMut), so the same routine works on a
//! [`StaticArray`](kioku_dstruct::StaticArray), a narrowed
//! [`View`](kioku_dstruct::View), a `Vec`, or a plain slice.
//!
//! ```
//! use kioku_algo::{search, sort};
//! use kioku_dstruct::StaticArray;
//!
//! let mut array = StaticArray::<i32, 10>::from_array([-1, 0, -2, 4, 12, -11, 0, -2, 25, -3]);
//! sort::merge(&mut array);
//! assert_eq!(array.as_slice(), &[-11, -3, -2, -2, -1, 0, 0, 4, 12, 25]);
//!
//! let hit = search::binary(&array, &12).unwrap();
//! assert_eq!(hit.idx, 8);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod search;
pub mod sort;

pub use search::{QueryMode, QueryResult};
pub use sort::SortKind;

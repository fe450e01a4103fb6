// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Textspan Core
//!
//! Half-open integer intervals `[start, end)`, ordered interval sets with
//! their set algebra, and byte-offset text editing driven by intervals.
//!
//! ## Modules
//!
//! - `math`: `Interval<T>` with validity, containment, overlap,
//!   intersection, merge, subtraction and ordering, and `IntervalSet<T>` with
//!   normalization, union, intersection, subtraction and complement.
//! - `text`: slicing, replacing, removing and inserting substrings of a
//!   `&str` at the byte offsets an interval describes, plus per-member
//!   extraction for whole sets.
//! - `error`: `TextError`, the only error type; the algebra itself never
//!   fails.
//!
//! ## Example
//!
//! ```rust
//! use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
//!
//! let edits = IntervalSet::from_intervals([Interval::new(0, 1), Interval::new(2, 3)]);
//! let kept = edits.complement(Interval::new(0, 3));
//! assert_eq!(kept.to_string(), "{[1,2)}");
//! assert_eq!(kept.extract_slices("abc").unwrap(), vec!["b"]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `Interval` and `IntervalSet`.

pub mod error;
pub mod math;
pub mod text;

pub use error::TextError;
pub use math::{interval::Interval, interval_set::IntervalSet};

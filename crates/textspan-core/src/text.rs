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

//! # Byte-Offset Text Editing
//!
//! Applies intervals to strings as byte ranges. An interval is usable against
//! a text when it is valid, starts at or after `0` and ends at or before
//! `text.len()`. Offsets that fall inside a multi-byte UTF-8 character are
//! rejected with [`TextError::NotCharBoundary`].
//!
//! Every operation either returns the complete result or an error; the input
//! text is never modified.
//!
//! ```rust
//! # use textspan_core::math::interval::Interval;
//!
//! let iv = Interval::new(1, 2);
//! assert_eq!(iv.slice("abc").unwrap(), "b");
//! assert_eq!(iv.replace("abc", "X").unwrap(), "aXc");
//! assert_eq!(iv.remove("abc").unwrap(), "ac");
//! assert_eq!(Interval::new(0, 0).insert("abc", "X").unwrap(), "Xabc");
//! ```

use crate::{
    error::TextError,
    math::{interval::Interval, interval_set::IntervalSet},
};
use num_traits::{PrimInt, Signed};

fn check_boundary(text: &str, offset: usize) -> Result<(), TextError> {
    if text.is_char_boundary(offset) {
        Ok(())
    } else {
        Err(TextError::NotCharBoundary { offset })
    }
}

impl<T> Interval<T>
where
    T: PrimInt + Signed,
{
    /// Converts the interval into a byte range of `text`.
    fn byte_range(&self, text: &str) -> Result<std::ops::Range<usize>, TextError> {
        let len = text.len();
        let out_of_range = || TextError::out_of_range(self.start(), self.end(), len);

        if !self.is_valid() {
            return Err(out_of_range());
        }
        // Negative endpoints do not convert.
        let start = self.start().to_usize().ok_or_else(out_of_range)?;
        let end = self.end().to_usize().ok_or_else(out_of_range)?;
        if end > len {
            return Err(out_of_range());
        }

        check_boundary(text, start)?;
        check_boundary(text, end)?;
        Ok(start..end)
    }

    /// Returns the substring of `text` covered by the interval.
    ///
    /// # Errors
    ///
    /// [`TextError::OutOfRange`] if the interval is invalid or exceeds the
    /// text, [`TextError::NotCharBoundary`] if an endpoint splits a character.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> Result<&'a str, TextError> {
        let range = self.byte_range(text)?;
        Ok(&text[range])
    }

    /// Returns a copy of `text` with the covered bytes replaced by `replacement`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Interval::slice`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 5);
    /// assert_eq!(iv.replace("hello world", "goodbye").unwrap(), "goodbye world");
    /// assert!(Interval::new(0, 20).replace("hello", "x").is_err());
    /// ```
    pub fn replace(&self, text: &str, replacement: &str) -> Result<String, TextError> {
        let range = self.byte_range(text)?;

        let mut result = String::with_capacity(text.len() - range.len() + replacement.len());
        result.push_str(&text[..range.start]);
        result.push_str(replacement);
        result.push_str(&text[range.end..]);
        Ok(result)
    }

    /// Returns a copy of `text` with the covered bytes removed.
    #[inline]
    pub fn remove(&self, text: &str) -> Result<String, TextError> {
        self.replace(text, "")
    }

    /// Returns a copy of `text` with `insert` placed at byte offset `start`.
    ///
    /// The end of the interval is ignored apart from the validity check.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidPosition`] if the interval is invalid, or `start`
    /// is negative or past the end of the text.
    pub fn insert(&self, text: &str, insert: &str) -> Result<String, TextError> {
        let len = text.len();
        let invalid = || TextError::invalid_position(self.start(), len);

        if !self.is_valid() {
            return Err(invalid());
        }
        let at = self.start().to_usize().ok_or_else(invalid)?;
        if at > len {
            return Err(invalid());
        }
        check_boundary(text, at)?;

        let mut result = String::with_capacity(len + insert.len());
        result.push_str(&text[..at]);
        result.push_str(insert);
        result.push_str(&text[at..]);
        Ok(result)
    }
}

impl<T> IntervalSet<T>
where
    T: PrimInt + Signed,
{
    /// Slices `text` once per member, in member order.
    ///
    /// Duplicates and overlaps are preserved. Stops at the first member that
    /// cannot be sliced.
    ///
    /// # Errors
    ///
    /// [`TextError::SliceOutOfRange`] carrying the index of the failing member
    /// and the error its [`Interval::slice`] returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_intervals([Interval::new(4, 5), Interval::new(0, 2)]);
    /// assert_eq!(set.extract_slices("hello").unwrap(), vec!["o", "he"]);
    /// ```
    pub fn extract_slices<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TextError> {
        self.iter()
            .enumerate()
            .map(|(index, iv)| {
                iv.slice(text).map_err(|source| TextError::SliceOutOfRange {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn iv(start: i64, end: i64) -> Interval<i64> {
        Interval::new(start, end)
    }

    #[test]
    fn test_slice() {
        assert_eq!(iv(1, 2).slice("abc"), Ok("b"));
        assert_eq!(iv(0, 3).slice("abc"), Ok("abc"));
        assert_eq!(iv(3, 3).slice("abc"), Ok(""));
        assert_eq!(iv(0, 0).slice(""), Ok(""));
    }

    #[rstest]
    #[case::reversed(iv(2, 1))]
    #[case::negative_start(iv(-1, 2))]
    #[case::past_end(iv(1, 4))]
    #[case::both_past_end(iv(4, 5))]
    fn test_slice_out_of_range(#[case] bad: Interval<i64>) {
        let err = bad.slice("abc").unwrap_err();
        assert_eq!(
            err,
            TextError::OutOfRange {
                start: i128::from(bad.start()),
                end: i128::from(bad.end()),
                len: 3,
            }
        );
        assert_eq!(bad.replace("abc", "X"), Err(err.clone()));
        assert_eq!(bad.remove("abc"), Err(err));
    }

    #[test]
    fn test_replace_and_remove() {
        assert_eq!(iv(1, 2).replace("abc", "X").unwrap(), "aXc");
        assert_eq!(iv(0, 3).replace("abc", "").unwrap(), "");
        assert_eq!(iv(3, 3).replace("abc", "def").unwrap(), "abcdef");
        assert_eq!(iv(1, 2).remove("abc").unwrap(), "ac");
    }

    #[test]
    fn test_insert() {
        assert_eq!(iv(0, 0).insert("abc", "X").unwrap(), "Xabc");
        assert_eq!(iv(3, 3).insert("abc", "X").unwrap(), "abcX");
        // The end is ignored.
        assert_eq!(iv(1, 100).insert("abc", "X").unwrap(), "aXbc");
    }

    #[rstest]
    #[case::negative(iv(-1, 0), -1)]
    #[case::past_end(iv(4, 4), 4)]
    #[case::reversed(iv(2, 1), 2)]
    fn test_insert_invalid_position(#[case] bad: Interval<i64>, #[case] position: i128) {
        assert_eq!(
            bad.insert("abc", "X"),
            Err(TextError::InvalidPosition { position, len: 3 })
        );
    }

    #[test]
    fn test_char_boundaries() {
        // "é" is two bytes.
        let text = "aéb";
        assert_eq!(iv(1, 3).slice(text), Ok("é"));
        assert_eq!(
            iv(1, 2).slice(text),
            Err(TextError::NotCharBoundary { offset: 2 })
        );
        assert_eq!(
            iv(2, 4).replace(text, "x"),
            Err(TextError::NotCharBoundary { offset: 2 })
        );
        assert_eq!(
            iv(2, 2).insert(text, "x"),
            Err(TextError::NotCharBoundary { offset: 2 })
        );
    }

    #[test]
    fn test_extract_slices() {
        let set = IntervalSet::from_intervals([iv(2, 3), iv(0, 2), iv(0, 2), iv(1, 3)]);
        assert_eq!(set.extract_slices("abc").unwrap(), vec!["c", "ab", "ab", "bc"]);
        assert!(IntervalSet::<i64>::new()
            .extract_slices("abc")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_extract_slices_reports_first_failure() {
        let set = IntervalSet::from_intervals([iv(0, 1), iv(2, 9), iv(-1, 0)]);
        let err = set.extract_slices("abc").unwrap_err();
        assert_eq!(
            err,
            TextError::SliceOutOfRange {
                index: 1,
                source: Box::new(TextError::OutOfRange {
                    start: 2,
                    end: 9,
                    len: 3
                }),
            }
        );
    }

    proptest! {
        #[test]
        fn prop_replace_with_own_slice_is_identity(
            text in "[a-z]{0,16}",
            a in 0usize..17,
            b in 0usize..17,
        ) {
            let (lo, hi) = (a.min(b).min(text.len()), a.max(b).min(text.len()));
            let range = iv(lo as i64, hi as i64);
            let sliced = range.slice(&text).unwrap();
            prop_assert_eq!(range.replace(&text, sliced).unwrap(), text.clone());
            prop_assert_eq!(
                range.remove(&text).unwrap().len(),
                text.len() - sliced.len()
            );
        }
    }
}

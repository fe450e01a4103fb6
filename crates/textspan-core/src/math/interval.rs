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

//! # Half-Open Intervals
//!
//! `Interval<T>` models the integer range `[start, end)`. The type does not
//! enforce `start <= end` at construction: a reversed pair is a representable
//! *invalid* interval that callers detect with [`Interval::is_valid`]. Most
//! predicates are plain comparisons on the two endpoints and behave as if an
//! invalid interval were empty.

use num_traits::{PrimInt, Signed};
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{max, min, Ordering},
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

/// A half-open interval `[start, end)` over a signed integer type.
///
/// Field order makes the derived `Ord` lexicographic by `(start, end)`,
/// which is the same order as [`Interval::compare`].
///
/// # Examples
///
/// ```rust
/// # use textspan_core::math::interval::Interval;
///
/// let iv = Interval::new(2, 5);
/// assert!(iv.is_valid());
/// assert_eq!(iv.len(), 3);
/// assert_eq!(iv.to_string(), "[2,5)");
///
/// let reversed = Interval::new(5, 2);
/// assert!(!reversed.is_valid());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T>
where
    T: PrimInt + Signed,
{
    start: T,
    end: T,
}

/// An iterator over the integer points contained within an `Interval`.
///
/// # Examples
///
/// ```rust
/// # use textspan_core::math::interval::Interval;
///
/// let iv = Interval::new(1, 5);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalPoints<T>
where
    T: PrimInt + Signed,
{
    end: T,
    current: T,
}

impl<T> Iterator for IntervalPoints<T>
where
    T: PrimInt + Signed,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            let result = self.current;
            self.current = self.current + T::one();
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntervalPoints<T>
where
    T: PrimInt + Signed,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            self.end = self.end - T::one();
            Some(self.end)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntervalPoints<T>
where
    T: PrimInt + Signed,
{
    fn len(&self) -> usize {
        if self.end <= self.current {
            return 0;
        }
        // Widen first: the distance may not fit in `T` even when it fits in `usize`.
        self.end
            .to_i128()
            .zip(self.current.to_i128())
            .and_then(|(end, current)| end.checked_sub(current))
            .and_then(|d| usize::try_from(d).ok())
            .unwrap_or(usize::MAX)
    }
}

impl<T> FusedIterator for IntervalPoints<T> where T: PrimInt + Signed {}

impl<T> Interval<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `Interval` from its two endpoints.
    ///
    /// No ordering is enforced; `start > end` produces an invalid interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Creates a new `Interval` only if `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0, 10).is_some());
    /// assert!(Interval::try_new(3, 3).is_some());
    /// assert!(Interval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        let iv = Self::new(start, end);
        iv.is_valid().then_some(iv)
    }

    /// Returns the inclusive start bound of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end bound of the interval.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(2, 2).is_valid());
    /// assert!(!Interval::new(3, 2).is_valid());
    /// ```
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Returns `end - start`. Negative for an invalid interval.
    ///
    /// The subtraction saturates: a distance that does not fit in `T`, such
    /// as the length of `[i64::MIN, i64::MAX)`, is clamped to `T::max_value()`
    /// (or `T::min_value()` for a reversed interval).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(10, 20).len(), 10);
    /// assert_eq!(Interval::new(5, 2).len(), -3);
    /// ```
    #[inline]
    pub fn len(&self) -> T {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if `start == end`.
    ///
    /// An invalid interval is not empty in this sense, even though it
    /// contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(9));
    /// assert!(!iv.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Touching endpoints do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.overlaps(Interval::new(5, 15)));
    /// assert!(!a.overlaps(Interval::new(10, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns `true` if one interval ends exactly where the other starts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.is_adjacent(Interval::new(10, 20)));
    /// assert!(a.is_adjacent(Interval::new(-5, 0)));
    /// assert!(!a.is_adjacent(Interval::new(9, 11)));
    /// ```
    #[inline]
    pub fn is_adjacent(&self, other: Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Returns `true` if every point of `other` lies in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.covers(Interval::new(2, 8)));
    /// assert!(a.covers(a));
    /// assert!(!a.covers(Interval::new(5, 11)));
    /// ```
    #[inline]
    pub fn covers(&self, other: Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Structural equality of both endpoints.
    #[inline]
    pub fn equal(&self, other: Self) -> bool {
        self == &other
    }

    /// Orders by `start`, breaking ties by `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use textspan_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::new(0, 5).compare(Interval::new(1, 2)), Ordering::Less);
    /// assert_eq!(Interval::new(1, 5).compare(Interval::new(1, 2)), Ordering::Greater);
    /// ```
    #[inline]
    pub fn compare(&self, other: Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` when the intersection would be empty, which includes
    /// adjacent intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert_eq!(a.intersect(Interval::new(5, 15)), Some(Interval::new(5, 10)));
    /// assert_eq!(a.intersect(Interval::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersect(&self, other: Self) -> Option<Self> {
        let start = max(self.start, other.start);
        let end = min(self.end, other.end);

        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }

    /// Merges two intervals into the smallest interval covering both.
    ///
    /// Returns `None` only if a gap separates the intervals; overlapping and
    /// adjacent intervals merge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 2);
    /// assert_eq!(a.merge(Interval::new(2, 5)), Some(Interval::new(0, 5)));
    /// assert_eq!(a.merge(Interval::new(3, 5)), None);
    /// ```
    #[inline]
    pub fn merge(&self, other: Self) -> Option<Self> {
        if self.end < other.start || other.end < self.start {
            return None;
        }
        Some(Self::new(
            min(self.start, other.start),
            max(self.end, other.end),
        ))
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// * 0 intervals: `other` covers `self`.
    /// * 1 interval: `other` clips one side of `self`, or does not overlap it
    ///   at all (then `self` is returned unchanged).
    /// * 2 intervals: `other` lies strictly inside `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// let diff = a.subtract(Interval::new(4, 6));
    /// assert_eq!(diff.as_slice(), &[Interval::new(0, 4), Interval::new(6, 10)]);
    /// ```
    pub fn subtract(&self, other: Self) -> SmallVec<[Self; 2]> {
        let Some(overlap) = self.intersect(other) else {
            return smallvec![*self];
        };

        let mut result = SmallVec::new();
        if self.start < overlap.start {
            result.push(Self::new(self.start, overlap.start));
        }
        if overlap.end < self.end {
            result.push(Self::new(overlap.end, self.end));
        }
        result
    }

    /// Returns the interval strictly between two separated intervals.
    ///
    /// Returns `None` if the intervals overlap or are adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 5);
    /// let b = Interval::new(10, 15);
    /// assert_eq!(a.gap(b), Some(Interval::new(5, 10)));
    /// assert_eq!(b.gap(a), Some(Interval::new(5, 10)));
    /// ```
    #[inline]
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self::new(self.end, other.start))
        } else if other.end < self.start {
            Some(Self::new(other.end, self.start))
        } else {
            None
        }
    }

    /// Creates an iterator over the points in the interval.
    ///
    /// Yields nothing for empty and invalid intervals.
    #[inline]
    pub fn iter(&self) -> IntervalPoints<T> {
        IntervalPoints {
            end: self.end,
            current: self.start,
        }
    }
}

impl<T> BitAnd for Interval<T>
where
    T: PrimInt + Signed,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T> BitOr for Interval<T>
where
    T: PrimInt + Signed,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl<T> Default for Interval<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Interval<T>
where
    T: PrimInt + Signed,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end)
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt + Signed,
{
    type Item = T;
    type IntoIter = IntervalPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: PrimInt + Signed,
{
    type Item = T;
    type IntoIter = IntervalPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Interval<T>> for std::ops::Range<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.start..iv.end
    }
}

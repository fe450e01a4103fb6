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

//! # Interval Sets
//!
//! `IntervalSet<T>` is an ordered sequence of [`Interval`]s with set algebra
//! on top. The sequence carries no invariant of its own: members may overlap,
//! touch, repeat or appear in any order. [`IntervalSet::normalize`] produces
//! the canonical form (sorted, pairwise disjoint, no two members adjacent),
//! and every operation documented as normalizing returns that form.
//!
//! All set operations are built from the pairwise operations of `Interval`
//! followed by a single normalization sweep.
//!
//! ```rust
//! # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
//!
//! let a = IntervalSet::from_intervals([Interval::new(0, 2), Interval::new(5, 6)]);
//! let b = IntervalSet::from_intervals([Interval::new(1, 4), Interval::new(6, 8)]);
//! assert_eq!(a.union(&b).to_string(), "{[0,4), [5,8)}");
//! ```

use crate::math::interval::Interval;
use num_traits::{PrimInt, Signed};
use std::ops::{BitAnd, BitOr, Sub};

/// An ordered collection of half-open intervals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct IntervalSet<T>
where
    T: PrimInt + Signed,
{
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSet<T>
where
    T: PrimInt + Signed,
{
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a set holding `intervals` in the given order, unnormalized.
    #[inline]
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        Self {
            intervals: intervals.into_iter().collect(),
        }
    }

    /// Returns the number of member intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    #[inline]
    pub fn into_inner(self) -> Vec<Interval<T>> {
        self.intervals
    }

    /// Appends a member without normalizing.
    #[inline]
    pub fn push(&mut self, interval: Interval<T>) {
        self.intervals.push(interval);
    }

    /// Returns the set with `interval` appended, without normalizing.
    #[inline]
    pub fn with(mut self, interval: Interval<T>) -> Self {
        self.push(interval);
        self
    }

    /// Returns the canonical form of the set.
    ///
    /// Members are sorted by [`Interval::compare`] and every run of
    /// overlapping or adjacent members is merged into one. Total coverage is
    /// preserved. Degenerate members (`start == end`) are kept unless they
    /// merge into a neighbour.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_intervals([
    ///     Interval::new(5, 6),
    ///     Interval::new(0, 2),
    ///     Interval::new(1, 4),
    /// ]);
    /// assert_eq!(set.normalize().to_string(), "{[0,4), [5,6)}");
    /// ```
    pub fn normalize(&self) -> Self {
        let mut sorted = self.intervals.clone();
        sorted.sort_by(|a, b| a.compare(*b));

        let mut rest = sorted.into_iter();
        let Some(mut current) = rest.next() else {
            return Self::new();
        };

        let mut result = Vec::with_capacity(self.intervals.len());
        for next in rest {
            match current.merge(next) {
                Some(merged) => current = merged,
                None => {
                    result.push(current);
                    current = next;
                }
            }
        }
        result.push(current);

        tracing::trace!(
            input = self.intervals.len(),
            output = result.len(),
            "normalized interval set"
        );

        Self { intervals: result }
    }

    /// Returns `true` if the set is already in the form `normalize` produces.
    pub fn is_normalized(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|w| w[0].compare(w[1]).is_lt() && w[0].merge(w[1]).is_none())
    }

    /// Returns `true` if any member contains `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_intervals([Interval::new(0, 3), Interval::new(5, 7)]);
    /// assert!(set.contains_point(2));
    /// assert!(!set.contains_point(4));
    /// ```
    pub fn contains_point(&self, value: T) -> bool {
        self.intervals.iter().any(|iv| iv.contains(value))
    }

    /// Returns `true` if a single member covers `interval`.
    ///
    /// This does not consider the union of members: on an unnormalized set,
    /// `{[0,2), [2,4)}` does not contain `[1,3)`. Use
    /// [`IntervalSet::covers_interval`] for union coverage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_intervals([Interval::new(0, 3), Interval::new(5, 7)]);
    /// assert!(set.contains_interval(Interval::new(1, 2)));
    /// assert!(!set.contains_interval(Interval::new(2, 5)));
    /// ```
    pub fn contains_interval(&self, interval: Interval<T>) -> bool {
        self.intervals.iter().any(|iv| iv.covers(interval))
    }

    /// Returns `true` if the union of all members covers `interval`.
    pub fn covers_interval(&self, interval: Interval<T>) -> bool {
        self.normalize().contains_interval(interval)
    }

    /// Removes `interval` from every member and returns the normalized result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_intervals([Interval::new(0, 5)]);
    /// assert_eq!(set.subtract(Interval::new(2, 4)).to_string(), "{[0,2), [4,5)}");
    /// ```
    pub fn subtract(&self, interval: Interval<T>) -> Self {
        let pieces: Self = self
            .intervals
            .iter()
            .flat_map(|iv| iv.subtract(interval))
            .collect();
        pieces.normalize()
    }

    /// Returns the normalized union of both sets.
    pub fn union(&self, other: &Self) -> Self {
        let combined: Self = self
            .intervals
            .iter()
            .chain(other.intervals.iter())
            .copied()
            .collect();
        combined.normalize()
    }

    /// Returns the normalized intersection of both sets.
    ///
    /// Every pair of members, one from each side, contributes its non-empty
    /// intersection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let a = IntervalSet::from_intervals([Interval::new(0, 5), Interval::new(6, 8)]);
    /// let b = IntervalSet::from_intervals([Interval::new(3, 7)]);
    /// assert_eq!(a.intersect(&b).to_string(), "{[3,5), [6,7)}");
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        let pairs: Self = self
            .intervals
            .iter()
            .flat_map(|a| other.intervals.iter().filter_map(|b| a.intersect(*b)))
            .collect();

        tracing::trace!(
            lhs = self.intervals.len(),
            rhs = other.intervals.len(),
            pieces = pairs.len(),
            "intersected interval sets"
        );

        pairs.normalize()
    }

    /// Returns the parts of `base` not covered by any member, normalized.
    ///
    /// An empty `base` yields the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use textspan_core::math::{interval::Interval, interval_set::IntervalSet};
    ///
    /// let set = IntervalSet::from_intervals([Interval::new(0, 1), Interval::new(2, 3)]);
    /// assert_eq!(set.complement(Interval::new(0, 3)).to_string(), "{[1,2)}");
    /// ```
    pub fn complement(&self, base: Interval<T>) -> Self {
        if base.is_empty() {
            tracing::debug!("complement requested over an empty base");
            return Self::new();
        }

        let mut remaining = vec![base];
        for removed in &self.intervals {
            remaining = remaining
                .iter()
                .flat_map(|piece| piece.subtract(*removed))
                .collect();
            if remaining.is_empty() {
                break;
            }
        }

        Self {
            intervals: remaining,
        }
        .normalize()
    }

    /// Returns the number of points covered by the union of all members.
    ///
    /// Saturates at `T::max_value()` like [`Interval::len`].
    pub fn total_len(&self) -> T {
        self.normalize()
            .intervals
            .iter()
            .filter(|iv| iv.is_valid())
            .fold(T::zero(), |acc, iv| acc.saturating_add(iv.len()))
    }
}

impl<T> Default for IntervalSet<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for IntervalSet<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", iv)?;
        }
        write!(f, "}}")
    }
}

impl<T> From<Vec<Interval<T>>> for IntervalSet<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn from(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }
}

impl<T> FromIterator<Interval<T>> for IntervalSet<T>
where
    T: PrimInt + Signed,
{
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl<T> Extend<Interval<T>> for IntervalSet<T>
where
    T: PrimInt + Signed,
{
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.intervals.extend(iter);
    }
}

impl<T> IntoIterator for IntervalSet<T>
where
    T: PrimInt + Signed,
{
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
where
    T: PrimInt + Signed,
{
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T> BitOr for &IntervalSet<T>
where
    T: PrimInt + Signed,
{
    type Output = IntervalSet<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> BitAnd for &IntervalSet<T>
where
    T: PrimInt + Signed,
{
    type Output = IntervalSet<T>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T> Sub<Interval<T>> for &IntervalSet<T>
where
    T: PrimInt + Signed,
{
    type Output = IntervalSet<T>;

    #[inline]
    fn sub(self, rhs: Interval<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

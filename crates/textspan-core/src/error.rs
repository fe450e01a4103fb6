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

//! Errors produced when an interval is applied to a string.
//!
//! The interval algebra itself never fails. Only the byte-offset text
//! operations in [`crate::text`] return a [`TextError`]. Endpoints are stored
//! as `i128` so that the error type does not depend on the interval's integer
//! type.

use num_traits::PrimInt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The interval is reversed, starts before `0`, or ends past the text.
    #[error("interval [{start},{end}) is out of range for text of length {len}")]
    OutOfRange { start: i128, end: i128, len: usize },

    /// An insert position is negative, belongs to a reversed interval, or
    /// lies past the end of the text.
    #[error("invalid insert position {position} for text of length {len}")]
    InvalidPosition { position: i128, len: usize },

    /// The byte offset is in range but splits a UTF-8 encoded character.
    #[error("byte offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },

    /// A member of an interval set could not be sliced.
    #[error("interval #{index} in set: {source}")]
    SliceOutOfRange {
        index: usize,
        source: Box<TextError>,
    },
}

impl TextError {
    pub(crate) fn out_of_range<T: PrimInt>(start: T, end: T, len: usize) -> Self {
        Self::OutOfRange {
            start: widen(start),
            end: widen(end),
            len,
        }
    }

    pub(crate) fn invalid_position<T: PrimInt>(position: T, len: usize) -> Self {
        Self::InvalidPosition {
            position: widen(position),
            len,
        }
    }

    /// Returns the error of the offending member if this error came from a set.
    pub fn member_error(&self) -> Option<(usize, &TextError)> {
        match self {
            Self::SliceOutOfRange { index, source } => Some((*index, source.as_ref())),
            _ => None,
        }
    }
}

fn widen<T: PrimInt>(value: T) -> i128 {
    value.to_i128().unwrap_or(if value < T::zero() {
        i128::MIN
    } else {
        i128::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            TextError::out_of_range(2i64, 9i64, 3).to_string(),
            "interval [2,9) is out of range for text of length 3"
        );
        assert_eq!(
            TextError::invalid_position(-1i32, 3).to_string(),
            "invalid insert position -1 for text of length 3"
        );
        assert_eq!(
            TextError::NotCharBoundary { offset: 1 }.to_string(),
            "byte offset 1 is not on a char boundary"
        );
    }

    #[test]
    fn test_member_error() {
        let inner = TextError::out_of_range(0i64, 4i64, 3);
        let err = TextError::SliceOutOfRange {
            index: 2,
            source: Box::new(inner.clone()),
        };
        assert_eq!(err.member_error(), Some((2, &inner)));
        assert_eq!(
            err.to_string(),
            "interval #2 in set: interval [0,4) is out of range for text of length 3"
        );
        assert_eq!(inner.member_error(), None);

        let as_dyn: &dyn std::error::Error = &err;
        assert!(as_dyn.source().is_some());
    }
}

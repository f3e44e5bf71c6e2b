// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::string::String;
use core::fmt;

/// An error related to dimension names or named indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameError
{
    // we want to be able to change this representation later
    repr: Repr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Repr
{
    ShapeMismatch
    {
        ndim: usize,
        names: usize,
    },
    UnknownName(String),
    IndexOutOfBounds
    {
        axis: usize,
        index: isize,
        len: usize,
    },
    AxisOutOfBounds
    {
        axis: usize,
        ndim: usize,
    },
    IndexCount
    {
        expected: usize,
        found: usize,
    },
    InvalidIndex(&'static str),
    Unsupported(&'static str),
}

impl NameError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        match self.repr {
            Repr::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Repr::UnknownName(_) => ErrorKind::UnknownName,
            Repr::IndexOutOfBounds { .. } | Repr::AxisOutOfBounds { .. } => ErrorKind::OutOfBounds,
            Repr::IndexCount { .. } | Repr::InvalidIndex(_) => ErrorKind::IncompatibleIndex,
            Repr::Unsupported(_) => ErrorKind::Unsupported,
        }
    }

    /// For a shape mismatch, return the rank of the array and the number of
    /// names that were supplied for it, in that order.
    pub fn shape_mismatch(&self) -> Option<(usize, usize)>
    {
        match self.repr {
            Repr::ShapeMismatch { ndim, names } => Some((ndim, names)),
            _ => None,
        }
    }

    /// For an unknown dimension name, return the name that was looked up.
    pub fn name(&self) -> Option<&str>
    {
        match self.repr {
            Repr::UnknownName(ref name) => Some(name),
            _ => None,
        }
    }
}

/// Error code for an error related to dimension names or named indexing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
    /// the number of names does not match the number of axes
    ShapeMismatch,
    /// a name is not among the dimension names of the array
    UnknownName,
    /// an axis or index is out of bounds
    OutOfBounds,
    /// the indices do not fit the array (wrong count, zero step, not a permutation)
    IncompatibleIndex,
    /// the selection cannot be expressed by the requested operation
    Unsupported,
}

impl ErrorKind
{
    fn description(self) -> &'static str
    {
        match self {
            ErrorKind::ShapeMismatch => "number of names does not match number of axes",
            ErrorKind::UnknownName => "unknown dimension name",
            ErrorKind::OutOfBounds => "out of bounds indexing",
            ErrorKind::IncompatibleIndex => "incompatible index",
            ErrorKind::Unsupported => "unsupported selection",
        }
    }
}

impl fmt::Display for NameError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.kind().description())?;
        match self.repr {
            Repr::ShapeMismatch { ndim, names } => {
                write!(f, ": array has {} axes, got {} names", ndim, names)
            }
            Repr::UnknownName(ref name) => write!(f, ": {:?}", name),
            Repr::IndexOutOfBounds { axis, index, len } => {
                write!(f, ": index {} for axis {} with length {}", index, axis, len)
            }
            Repr::AxisOutOfBounds { axis, ndim } => {
                write!(f, ": axis {} for array with {} axes", axis, ndim)
            }
            Repr::IndexCount { expected, found } => {
                write!(f, ": expected {} indices, got {}", expected, found)
            }
            Repr::InvalidIndex(reason) | Repr::Unsupported(reason) => write!(f, ": {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NameError {}

#[inline(always)]
fn from_repr(repr: Repr) -> NameError
{
    NameError { repr }
}

pub(crate) fn shape_mismatch(ndim: usize, names: usize) -> NameError
{
    from_repr(Repr::ShapeMismatch { ndim, names })
}

pub(crate) fn unknown_name(name: &str) -> NameError
{
    from_repr(Repr::UnknownName(String::from(name)))
}

pub(crate) fn index_out_of_bounds(axis: usize, index: isize, len: usize) -> NameError
{
    from_repr(Repr::IndexOutOfBounds { axis, index, len })
}

pub(crate) fn axis_out_of_bounds(axis: usize, ndim: usize) -> NameError
{
    from_repr(Repr::AxisOutOfBounds { axis, ndim })
}

pub(crate) fn index_count(expected: usize, found: usize) -> NameError
{
    from_repr(Repr::IndexCount { expected, found })
}

pub(crate) fn invalid_index(reason: &'static str) -> NameError
{
    from_repr(Repr::InvalidIndex(reason))
}

pub(crate) fn unsupported(reason: &'static str) -> NameError
{
    from_repr(Repr::Unsupported(reason))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_carries_details()
    {
        let e = shape_mismatch(2, 3);
        assert_eq!(e.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(e.shape_mismatch(), Some((2, 3)));
        assert_eq!(e.to_string(), "number of names does not match number of axes: array has 2 axes, got 3 names");

        let e = unknown_name("time");
        assert_eq!(e.kind(), ErrorKind::UnknownName);
        assert_eq!(e.name(), Some("time"));
        assert_eq!(e.to_string(), "unknown dimension name: \"time\"");
    }

    #[test]
    fn kinds()
    {
        assert_eq!(index_out_of_bounds(0, 5, 4).kind(), ErrorKind::OutOfBounds);
        assert_eq!(axis_out_of_bounds(3, 2).kind(), ErrorKind::OutOfBounds);
        assert_eq!(index_count(2, 1).kind(), ErrorKind::IncompatibleIndex);
        assert_eq!(invalid_index("step must be nonzero").kind(), ErrorKind::IncompatibleIndex);
        assert_eq!(unsupported("lists in views").kind(), ErrorKind::Unsupported);
        assert_eq!(index_count(2, 1).name(), None);
    }
}

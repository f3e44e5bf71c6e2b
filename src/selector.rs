// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use ndarray::{Slice, SliceInfoElem};

use crate::error::{self, NameError};
use crate::Name;

/// The index applied to one axis: a single index, a range with step, a list
/// of indices, or the whole axis.
///
/// Negative indices and range bounds are counted from the back of the axis,
/// as in `ndarray`.
///
/// ## Examples
///
/// `Selector::from(2)` is the index `2`; it removes the axis from the
/// result. The macro equivalent is `ns![2]`.
///
/// `Selector::from(1..3)` keeps elements `1` and `2` of the axis; the macro
/// equivalent is `ns![1..3]`. `Selector::from(..).step_by(2)` keeps every
/// second element; the macro equivalent is `ns![..;2]`.
///
/// `Selector::from(vec![3, 0])` picks elements `3` and `0`, in that order.
/// Lists copy, so they are only available when reading by value or
/// writing, never in views.
///
/// `Selector::Full` is the whole axis, like `..`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector
{
    /// A single index.
    Index(isize),
    /// A range with step size.
    Slice(Slice),
    /// An arbitrary list of indices.
    List(Vec<usize>),
    /// The whole axis.
    Full,
}

impl Selector
{
    /// Returns `true` if `self` is an `Index` value.
    pub fn is_index(&self) -> bool
    {
        matches!(self, Selector::Index(_))
    }

    /// Returns a new `Selector` with the given step size (multiplied with
    /// the previous step size). Indices and lists are returned unchanged.
    ///
    /// `step` must be nonzero.
    /// (This method checks with a debug assertion that `step` is not zero.)
    #[inline]
    pub fn step_by(self, step: isize) -> Self
    {
        debug_assert_ne!(step, 0, "Selector::step_by: step must be nonzero");
        match self {
            Selector::Slice(s) => Selector::Slice(s.step_by(step)),
            Selector::Full => Selector::Slice(Slice::new(0, None, step)),
            other => other,
        }
    }

    /// Check `self` against an axis of length `len`.
    pub(crate) fn check(&self, axis: usize, len: usize) -> Result<(), NameError>
    {
        match *self {
            Selector::Index(i) => match abs_index(len, i) {
                Some(j) if j < len => Ok(()),
                _ => Err(error::index_out_of_bounds(axis, i, len)),
            },
            Selector::Slice(Slice { start, end, step }) => {
                if step == 0 {
                    return Err(error::invalid_index("step must be nonzero"));
                }
                for bound in core::iter::once(start).chain(end) {
                    match abs_index(len, bound) {
                        Some(j) if j <= len => {}
                        _ => return Err(error::index_out_of_bounds(axis, bound, len)),
                    }
                }
                Ok(())
            }
            Selector::List(ref indices) => match indices.iter().find(|&&i| i >= len) {
                Some(&i) => Err(error::index_out_of_bounds(axis, i as isize, len)),
                None => Ok(()),
            },
            Selector::Full => Ok(()),
        }
    }

    /// The strided part of `self`; lists select the whole axis here and are
    /// applied afterwards.
    pub(crate) fn to_slice_info_elem(&self) -> SliceInfoElem
    {
        match *self {
            Selector::Index(i) => SliceInfoElem::Index(i),
            Selector::Slice(s) => SliceInfoElem::from(s),
            Selector::List(_) | Selector::Full => SliceInfoElem::from(Slice::from(..)),
        }
    }
}

fn abs_index(len: usize, index: isize) -> Option<usize>
{
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    }
}

impl fmt::Display for Selector
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match *self {
            Selector::Index(index) => write!(f, "{}", index)?,
            Selector::Slice(Slice { start, end, step }) => {
                if start != 0 {
                    write!(f, "{}", start)?;
                }
                write!(f, "..")?;
                if let Some(i) = end {
                    write!(f, "{}", i)?;
                }
                if step != 1 {
                    write!(f, ";{}", step)?;
                }
            }
            Selector::List(ref indices) => write!(f, "{:?}", indices)?,
            Selector::Full => write!(f, "..")?,
        }
        Ok(())
    }
}

impl From<Slice> for Selector
{
    #[inline]
    fn from(s: Slice) -> Selector
    {
        Selector::Slice(s)
    }
}

impl From<RangeFull> for Selector
{
    #[inline]
    fn from(_: RangeFull) -> Selector
    {
        Selector::Full
    }
}

impl From<Vec<usize>> for Selector
{
    #[inline]
    fn from(indices: Vec<usize>) -> Selector
    {
        Selector::List(indices)
    }
}

impl<'a> From<&'a [usize]> for Selector
{
    #[inline]
    fn from(indices: &'a [usize]) -> Selector
    {
        Selector::List(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Selector
{
    #[inline]
    fn from(indices: [usize; N]) -> Selector
    {
        Selector::List(indices.to_vec())
    }
}

/// Convert an index or bound to `isize`; values beyond `isize::MAX` saturate
/// and are then rejected as out of bounds.
fn saturating_isize<T>(i: T) -> isize
where isize: TryFrom<T>
{
    isize::try_from(i).unwrap_or(isize::MAX)
}

macro_rules! impl_selector_from_index_type {
    ($index:ty) => {
        impl From<$index> for Selector
        {
            #[inline]
            fn from(i: $index) -> Selector
            {
                Selector::Index(saturating_isize(i))
            }
        }

        impl From<Range<$index>> for Selector
        {
            #[inline]
            fn from(r: Range<$index>) -> Selector
            {
                Selector::Slice(Slice::new(saturating_isize(r.start), Some(saturating_isize(r.end)), 1))
            }
        }

        impl From<RangeFrom<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> Selector
            {
                Selector::Slice(Slice::new(saturating_isize(r.start), None, 1))
            }
        }

        impl From<RangeTo<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeTo<$index>) -> Selector
            {
                Selector::Slice(Slice::new(0, Some(saturating_isize(r.end)), 1))
            }
        }

        impl From<RangeInclusive<$index>> for Selector
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> Selector
            {
                let end = saturating_isize(*r.end());
                // an inclusive end of -1 is the last element
                let end = if end == -1 { None } else { Some(end.checked_add(1).unwrap_or(isize::MAX)) };
                Selector::Slice(Slice::new(saturating_isize(*r.start()), end, 1))
            }
        }
    };
}

impl_selector_from_index_type!(isize);
impl_selector_from_index_type!(usize);
impl_selector_from_index_type!(i32);

/// What indexing one axis does to that axis in the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AxisEffect
{
    /// The axis is removed (it was indexed by a single index).
    Drop,
    /// The axis survives, keeping its name.
    Keep,
    /// A new, anonymous axis is inserted without consuming an input axis.
    Insert,
}

/// Index types whose effect on the rank of the result is known.
///
/// Implemented for [`Selector`] and for `ndarray`'s `SliceInfoElem`, so the
/// names produced by [`remaining_names`] always agree with the rank rule of
/// `ndarray`'s own slicing.
pub trait AxisSelector
{
    fn effect(&self) -> AxisEffect;
}

impl AxisSelector for Selector
{
    fn effect(&self) -> AxisEffect
    {
        if self.is_index() {
            AxisEffect::Drop
        } else {
            AxisEffect::Keep
        }
    }
}

impl AxisSelector for SliceInfoElem
{
    fn effect(&self) -> AxisEffect
    {
        match *self {
            SliceInfoElem::Index(_) => AxisEffect::Drop,
            SliceInfoElem::Slice { .. } => AxisEffect::Keep,
            SliceInfoElem::NewAxis => AxisEffect::Insert,
        }
    }
}

impl<'a, T> AxisSelector for &'a T
where T: AxisSelector + ?Sized
{
    fn effect(&self) -> AxisEffect
    {
        (**self).effect()
    }
}

/// Return the names that remain after indexing an array named `names`
/// with `indices`, one index per axis in order.
///
/// An axis indexed by a single index is dropped; an axis indexed by a
/// range, a list or the whole axis keeps its name, in the original order.
/// `NewAxis` contributes a wildcard. Axes beyond the end of `indices` are
/// kept.
///
/// ```
/// use ndarray_named::{remaining_names, Name, Selector};
///
/// let names = [Name::new("x"), Name::new("y"), Name::new("z")];
/// let rest = remaining_names(&names, &[Selector::from(1..), Selector::from(0), Selector::Full]);
/// assert_eq!(rest, [Name::new("x"), Name::new("z")]);
/// ```
pub fn remaining_names<I>(names: &[Name], indices: &[I]) -> Vec<Name>
where I: AxisSelector
{
    let mut input = names.iter();
    let mut out = Vec::with_capacity(names.len());
    for index in indices {
        match index.effect() {
            AxisEffect::Drop => {
                input.next();
            }
            AxisEffect::Keep => out.extend(input.next().copied()),
            AxisEffect::Insert => out.push(Name::WILDCARD),
        }
    }
    out.extend(input.copied());
    out
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::ErrorKind;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn conversions()
    {
        assert_eq!(Selector::from(3usize), Selector::Index(3));
        assert_eq!(Selector::from(-1), Selector::Index(-1));
        assert_eq!(Selector::from(1..3), Selector::Slice(Slice::new(1, Some(3), 1)));
        assert_eq!(Selector::from(..2), Selector::Slice(Slice::new(0, Some(2), 1)));
        assert_eq!(Selector::from(1..=2), Selector::Slice(Slice::new(1, Some(3), 1)));
        assert_eq!(Selector::from(0..=-1), Selector::Slice(Slice::new(0, None, 1)));
        assert_eq!(Selector::from(..), Selector::Full);
        assert_eq!(Selector::from([2, 0]), Selector::List(vec![2, 0]));
        assert_eq!(Selector::from(..).step_by(-1), Selector::Slice(Slice::new(0, None, -1)));
    }

    #[test]
    fn display()
    {
        assert_eq!(Selector::from(1..4).step_by(2).to_string(), "1..4;2");
        assert_eq!(Selector::from(..).to_string(), "..");
        assert_eq!(Selector::from(-2).to_string(), "-2");
        assert_eq!(Selector::from(vec![1, 0]).to_string(), "[1, 0]");
    }

    #[test]
    fn bounds()
    {
        assert!(Selector::from(3).check(0, 4).is_ok());
        assert!(Selector::from(-4).check(0, 4).is_ok());
        assert_eq!(Selector::from(4).check(1, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(Selector::from(-5).check(0, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert!(Selector::from(0..4).check(0, 4).is_ok());
        assert!(Selector::from(4..).check(0, 4).is_ok());
        assert_eq!(Selector::from(0..5).check(0, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(Selector::Slice(Slice { start: 0, end: None, step: 0 }).check(0, 4).unwrap_err().kind(),
                   ErrorKind::IncompatibleIndex);
        assert_eq!(Selector::from([0, 4]).check(0, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert!(Selector::Full.check(0, 0).is_ok());
    }

    #[test]
    fn huge_bounds_are_out_of_bounds()
    {
        assert_eq!(Selector::from(usize::MAX), Selector::Index(isize::MAX));
        assert_eq!(Selector::from(0usize.wrapping_sub(1)).check(0, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(Selector::from(0..=isize::MAX), Selector::Slice(Slice::new(0, Some(isize::MAX), 1)));
        assert_eq!(Selector::from(0..=isize::MAX).check(0, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(Selector::from(0..=usize::MAX).check(0, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(Selector::from(usize::MAX..).check(0, 4).unwrap_err().kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn new_axis_inserts_wildcard()
    {
        let names = [Name::new("a"), Name::new("b")];
        let elems = [SliceInfoElem::from(..), SliceInfoElem::NewAxis, SliceInfoElem::Index(0)];
        assert_eq!(remaining_names(&names, &elems), [Name::new("a"), Name::WILDCARD]);
    }
}

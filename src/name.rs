// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use ndarray::{ArrayBase, Axis, Dimension, RawData};

use crate::error::{self, NameError};
use crate::NamedArrayBase;

/// The name of one axis of an array.
///
/// Names are static string labels, usually written as literals or defined
/// once as constants. The label `"_"` is the [wildcard](Name::WILDCARD): it
/// marks an anonymous axis, which can only be addressed by position.
///
/// ```
/// use ndarray_named::Name;
///
/// const TIME: Name = Name::new("time");
/// assert_eq!(TIME, "time");
/// assert!(!TIME.is_wildcard());
/// assert!(Name::new("_").is_wildcard());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(&'static str);

impl Name
{
    /// The name of an anonymous axis.
    pub const WILDCARD: Name = Name("_");

    /// Create a name from a static label.
    #[inline]
    pub const fn new(label: &'static str) -> Self
    {
        Name(label)
    }

    /// Return the label.
    #[inline]
    pub const fn as_str(self) -> &'static str
    {
        self.0
    }

    /// Return `true` if this is the wildcard name.
    #[inline]
    pub const fn is_wildcard(self) -> bool
    {
        str_eq(self.0, Name::WILDCARD.0)
    }
}

impl From<&'static str> for Name
{
    #[inline]
    fn from(label: &'static str) -> Self
    {
        Name(label)
    }
}

impl PartialEq<str> for Name
{
    fn eq(&self, rhs: &str) -> bool
    {
        self.0 == rhs
    }
}

impl<'a> PartialEq<&'a str> for Name
{
    fn eq(&self, rhs: &&'a str) -> bool
    {
        self.0 == *rhs
    }
}

impl fmt::Debug for Name
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for Name
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.0)
    }
}

const fn str_eq(a: &str, b: &str) -> bool
{
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Return the position of the first axis called `name`, or `None`.
///
/// The wildcard never matches: anonymous axes have no name to look up.
/// If the same label occurs more than once, the first occurrence wins.
///
/// This is a `const fn`, so positions within a statically known name
/// sequence can be computed at compile time (see [`name_set!`](crate::name_set)).
///
/// ```
/// use ndarray_named::{position_of, Name};
///
/// const NAMES: &[Name] = &[Name::new("x"), Name::new("y"), Name::new("x")];
/// const Y: Option<usize> = position_of(NAMES, Name::new("y"));
/// assert_eq!(Y, Some(1));
/// assert_eq!(position_of(NAMES, Name::new("x")), Some(0));
/// assert_eq!(position_of(NAMES, Name::new("z")), None);
/// ```
pub const fn position_of(names: &[Name], name: Name) -> Option<usize>
{
    if name.is_wildcard() {
        return None;
    }
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i].0, name.0) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Return the axis called `name` in `names`.
///
/// **Errors** with `ErrorKind::UnknownName` if no axis has that name.
pub fn axis_of(names: &[Name], name: &str) -> Result<Axis, NameError>
{
    names
        .iter()
        .position(|n| !n.is_wildcard() && n.0 == name)
        .map(Axis)
        .ok_or_else(|| error::unknown_name(name))
}

/// Something that designates one axis of a named array: a name or a
/// position.
///
/// Positions are bounds checked, names are looked up with [`axis_of`].
pub trait AsAxis
{
    /// Resolve `self` to an axis of an array whose dimension names are
    /// `names`.
    fn as_axis(&self, names: &[Name]) -> Result<Axis, NameError>;
}

impl AsAxis for Axis
{
    fn as_axis(&self, names: &[Name]) -> Result<Axis, NameError>
    {
        if self.index() < names.len() {
            Ok(*self)
        } else {
            Err(error::axis_out_of_bounds(self.index(), names.len()))
        }
    }
}

impl AsAxis for usize
{
    fn as_axis(&self, names: &[Name]) -> Result<Axis, NameError>
    {
        Axis(*self).as_axis(names)
    }
}

impl AsAxis for Name
{
    fn as_axis(&self, names: &[Name]) -> Result<Axis, NameError>
    {
        axis_of(names, self.0)
    }
}

impl<'a> AsAxis for &'a str
{
    fn as_axis(&self, names: &[Name]) -> Result<Axis, NameError>
    {
        axis_of(names, self)
    }
}

/// A statically known sequence of dimension names.
///
/// Usually implemented with the [`name_set!`](crate::name_set) macro, which
/// also resolves the position of every name at compile time.
pub trait NameSet
{
    /// The dimension names, in axis order.
    const NAMES: &'static [Name];
}

/// Define a zero-sized type implementing [`NameSet`].
///
/// Every name also becomes an associated `Axis` constant of the type, with
/// its position resolved at compile time, so axis lookups through the
/// constants involve no scan of the name sequence.
///
/// ```
/// use ndarray::Array2;
/// use ndarray_named::{name_set, NamedArray2};
///
/// name_set! {
///     /// Samples by column.
///     pub struct Table { features, observations }
/// }
///
/// assert_eq!(Table::observations.index(), 1);
///
/// let x = NamedArray2::from_name_set::<Table>(Array2::<f64>::zeros((4, 3))).unwrap();
/// assert_eq!(x.len_of(Table::observations).unwrap(), 3);
/// assert_eq!(x.names(), &["features", "observations"]);
/// ```
#[macro_export]
macro_rules! name_set {
    ($(#[$meta:meta])* $vis:vis struct $set:ident { $($name:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $set;

        impl $crate::NameSet for $set {
            const NAMES: &'static [$crate::Name] = &[$($crate::Name::new(stringify!($name))),*];
        }

        #[allow(non_upper_case_globals)]
        impl $set {
            $(
                #[doc = concat!("The `", stringify!($name), "` axis.")]
                pub const $name: $crate::ndarray::Axis = $crate::ndarray::Axis(
                    match $crate::position_of(
                        <$set as $crate::NameSet>::NAMES,
                        $crate::Name::new(stringify!($name)),
                    ) {
                        Some(i) => i,
                        None => panic!("name missing from its own name set"),
                    }
                );
            )*
        }
    };
}

/// Conversion into a dimension name sequence.
///
/// Static slices of names are kept by reference; everything else is
/// collected into an owned sequence.
pub trait IntoNames
{
    fn into_names(self) -> Cow<'static, [Name]>;
}

impl IntoNames for &'static [Name]
{
    fn into_names(self) -> Cow<'static, [Name]>
    {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> IntoNames for &'static [Name; N]
{
    fn into_names(self) -> Cow<'static, [Name]>
    {
        Cow::Borrowed(&self[..])
    }
}

impl<const N: usize> IntoNames for [Name; N]
{
    fn into_names(self) -> Cow<'static, [Name]>
    {
        Cow::Owned(self.to_vec())
    }
}

impl IntoNames for Vec<Name>
{
    fn into_names(self) -> Cow<'static, [Name]>
    {
        Cow::Owned(self)
    }
}

impl<const N: usize> IntoNames for [&'static str; N]
{
    fn into_names(self) -> Cow<'static, [Name]>
    {
        Cow::Owned(self.iter().copied().map(Name).collect())
    }
}

impl IntoNames for Vec<&'static str>
{
    fn into_names(self) -> Cow<'static, [Name]>
    {
        Cow::Owned(self.into_iter().map(Name).collect())
    }
}

impl IntoNames for Cow<'static, [Name]>
{
    fn into_names(self) -> Cow<'static, [Name]>
    {
        self
    }
}

/// Arrays whose axes can be queried by name.
///
/// Named arrays report their names; plain `ndarray` arrays report one
/// wildcard per axis, so both can be handled uniformly.
pub trait DimNames
{
    /// Return the dimension names, one per axis.
    fn dim_names(&self) -> Cow<'_, [Name]>;
}

impl<S, D> DimNames for ArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    fn dim_names(&self) -> Cow<'_, [Name]>
    {
        Cow::Owned(alloc::vec![Name::WILDCARD; self.ndim()])
    }
}

impl<S, D> DimNames for NamedArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    fn dim_names(&self) -> Cow<'_, [Name]>
    {
        Cow::Borrowed(self.names())
    }
}

/// Return the dimension names of `x`.
///
/// ```
/// use ndarray::Array2;
/// use ndarray_named::{names, Name};
///
/// let a = Array2::<u8>::zeros((2, 2));
/// assert_eq!(&*names(&a), &[Name::WILDCARD, Name::WILDCARD]);
/// ```
pub fn names<T>(x: &T) -> Cow<'_, [Name]>
where T: DimNames + ?Sized
{
    x.dim_names()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::ErrorKind;

    const NAMES: &[Name] = &[Name::new("a"), Name::WILDCARD, Name::new("b"), Name::new("a")];

    #[test]
    fn first_match()
    {
        assert_eq!(position_of(NAMES, Name::new("a")), Some(0));
        assert_eq!(position_of(NAMES, Name::new("b")), Some(2));
        assert_eq!(axis_of(NAMES, "a"), Ok(Axis(0)));
        assert_eq!(axis_of(NAMES, "b"), Ok(Axis(2)));
    }

    #[test]
    fn wildcard_is_not_addressable()
    {
        assert_eq!(position_of(NAMES, Name::WILDCARD), None);
        assert_eq!(axis_of(NAMES, "_").unwrap_err().kind(), ErrorKind::UnknownName);
    }

    #[test]
    fn as_axis()
    {
        assert_eq!(Axis(3).as_axis(NAMES), Ok(Axis(3)));
        assert_eq!(4usize.as_axis(NAMES).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!("b".as_axis(NAMES), Ok(Axis(2)));
        assert_eq!(Name::new("c").as_axis(NAMES).unwrap_err().name(), Some("c"));
    }

    #[test]
    fn into_names_borrows_static()
    {
        assert!(matches!(NAMES.into_names(), Cow::Borrowed(_)));
        assert_eq!(&*["a", "b"].into_names(), &[Name::new("a"), Name::new("b")]);
    }
}

// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec;
use alloc::vec::Vec;
use core::iter::FromIterator;

use crate::error::{self, NameError};
use crate::{Name, Selector};

/// Indices given by dimension name.
///
/// Each entry maps one name to the [`Selector`] for that axis. Axes that
/// are not mentioned select their whole extent. The order of the entries
/// does not matter; inserting a name twice replaces the earlier selector.
///
/// See also the [`ns!`](crate::ns) macro.
///
/// ```
/// use ndarray_named::{NamedIndex, Selector};
///
/// let index = NamedIndex::new().with("observations", 1..3).with("features", 2);
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.get("features"), Some(&Selector::Index(2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamedIndex
{
    entries: Vec<(Name, Selector)>,
}

impl NamedIndex
{
    /// Create an empty `NamedIndex`, which selects everything.
    pub fn new() -> Self
    {
        NamedIndex { entries: Vec::new() }
    }

    /// Add the selector for `name` and return `self`.
    pub fn with<N, T>(mut self, name: N, selector: T) -> Self
    where
        N: Into<Name>,
        T: Into<Selector>,
    {
        self.insert(name, selector);
        self
    }

    /// Set the selector for `name`, returning the previous one if any.
    pub fn insert<N, T>(&mut self, name: N, selector: T) -> Option<Selector>
    where
        N: Into<Name>,
        T: Into<Selector>,
    {
        let name = name.into();
        let selector = selector.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, old)) => Some(core::mem::replace(old, selector)),
            None => {
                self.entries.push((name, selector));
                None
            }
        }
    }

    /// Return the selector for `name`, if there is one.
    pub fn get(&self, name: &str) -> Option<&Selector>
    {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, s)| s)
    }

    /// Return the number of named entries.
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    /// Return `true` if no axis is named.
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Selector)> + '_
    {
        self.entries.iter().map(|(n, s)| (*n, s))
    }
}

impl<N, T> FromIterator<(N, T)> for NamedIndex
where
    N: Into<Name>,
    T: Into<Selector>,
{
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = (N, T)>
    {
        let mut index = NamedIndex::new();
        for (name, selector) in iter {
            index.insert(name, selector);
        }
        index
    }
}

/// Turn named indices into one positional selector per axis of an array
/// named `names`.
///
/// The result has `names.len()` entries in axis order. Axes not mentioned
/// in `index` get [`Selector::Full`].
///
/// **Errors** with `ErrorKind::UnknownName` if `index` names an axis that
/// `names` does not contain. All names are checked before anything is
/// assembled.
///
/// ```
/// use ndarray_named::{assemble, Name, NamedIndex, Selector};
///
/// let names = [Name::new("features"), Name::new("observations")];
/// let index = NamedIndex::new().with("observations", 1);
/// assert_eq!(assemble(&names, &index).unwrap(), [Selector::Full, Selector::Index(1)]);
/// ```
pub fn assemble(names: &[Name], index: &NamedIndex) -> Result<Vec<Selector>, NameError>
{
    let positions = index
        .entries
        .iter()
        .map(|(name, _)| {
            crate::position_of(names, *name).ok_or_else(|| error::unknown_name(name.as_str()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut selectors = vec![Selector::Full; names.len()];
    for (&pos, (_, selector)) in positions.iter().zip(&index.entries) {
        selectors[pos] = selector.clone();
    }
    Ok(selectors)
}

/// Index constructor for named arrays.
///
/// `ns![]` takes either a list of *name* `=` *selector* pairs, or a list of
/// positional selectors, one per axis, separated by commas. Selectors are
/// written as in `ndarray`'s `s![]`: an index, a range, or a range followed
/// by `;` and a step size. Anything that converts into a [`Selector`]
/// works, including `Vec<usize>` and `[usize; N]` lists.
///
/// The named form produces [`Indices::Named`](crate::Indices::Named) and
/// may mention any subset of the axes, in any order; the positional form
/// produces [`Indices::Positional`](crate::Indices::Positional).
///
/// ```
/// use ndarray::Array2;
/// use ndarray_named::{ns, Indices, IndexShape, IntoNamed};
///
/// let x = Array2::<f64>::zeros((4, 3))
///     .into_named(["features", "observations"])
///     .unwrap();
///
/// let obs = x.get_by(ns![observations = 1]).unwrap().into_array().unwrap();
/// assert_eq!(obs.names(), &["features"]);
///
/// let every_other = x.view_by(ns![features = ..;2]).unwrap().into_array().unwrap();
/// assert_eq!(every_other.shape(), &[2, 3]);
///
/// assert_eq!(ns![2, 1].shape(), IndexShape::AllScalar);
/// assert_eq!(ns![.., 1].shape(), IndexShape::Mixed);
/// assert!(matches!(ns![features = 0], Indices::Named(_)));
/// ```
#[macro_export]
macro_rules! ns {
    // convert range/index into Selector
    (@convert $r:expr) => {
        <$crate::Selector as ::core::convert::From<_>>::from($r)
    };
    // convert range/index and step into Selector
    (@convert $r:expr, $s:expr) => {
        <$crate::Selector as ::core::convert::From<_>>::from($r).step_by($s as isize)
    };
    () => {
        $crate::Indices::Positional(::core::default::Default::default())
    };
    ($($name:ident = $r:expr $(;$s:expr)?),+ $(,)?) => {
        $crate::Indices::Named(
            $crate::NamedIndex::new()
                $(.with(stringify!($name), $crate::ns!(@convert $r $(, $s)?)))+
        )
    };
    ($($r:expr $(;$s:expr)?),+ $(,)?) => {
        $crate::Indices::from([$($crate::ns!(@convert $r $(, $s)?)),+])
    };
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::ErrorKind;

    const NAMES: &[Name] = &[Name::new("x"), Name::new("y"), Name::new("z")];

    #[test]
    fn fills_unmentioned_axes()
    {
        let index = NamedIndex::new().with("z", 1).with("x", 0..2);
        assert_eq!(assemble(NAMES, &index).unwrap(),
                   [Selector::from(0..2), Selector::Full, Selector::Index(1)]);
        assert_eq!(assemble(NAMES, &NamedIndex::new()).unwrap(), vec![Selector::Full; 3]);
    }

    #[test]
    fn unknown_name_is_reported()
    {
        let index = NamedIndex::new().with("x", 0).with("w", 1);
        let err = assemble(NAMES, &index).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownName);
        assert_eq!(err.name(), Some("w"));
    }

    #[test]
    fn later_entries_replace_earlier()
    {
        let mut index: NamedIndex = vec![("y", 0), ("y", 2)].into_iter().collect();
        assert_eq!(index.len(), 1);
        assert_eq!(index.insert("y", ..), Some(Selector::Index(2)));
        assert_eq!(index.get("y"), Some(&Selector::Full));
    }

    #[test]
    fn duplicate_labels_bind_first_axis()
    {
        let names = [Name::new("x"), Name::new("x")];
        let index = NamedIndex::new().with("x", 1);
        assert_eq!(assemble(&names, &index).unwrap(), [Selector::Index(1), Selector::Full]);
    }
}

// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;

use ndarray::{ArrayViewD, ArrayViewMutD, Axis, Data, DataMut, Dimension, Ix0, RawData, SliceInfoElem};

use crate::error::{self, NameError};
use crate::{assemble, remaining_names, NamedArrayBase, NamedArrayD, NamedArrayViewD, NamedArrayViewMutD};
use crate::{Name, NamedIndex, Selector};

/// Indices for one indexing operation: either one selector per axis in
/// order, or selectors keyed by dimension name.
///
/// Usually built with the [`ns!`](crate::ns) macro.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indices
{
    /// One selector per axis, in axis order.
    Positional(Vec<Selector>),
    /// Selectors by name; unmentioned axes select everything.
    Named(NamedIndex),
}

/// The classification of an indexing request, computed once per call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexShape
{
    /// Positional, a single index for every axis: the result is an element.
    AllScalar,
    /// Positional, at least one axis kept: the result is a named array.
    Mixed,
    /// Named; assembled into positional form before classification.
    Named,
}

impl Indices
{
    /// Classify the request.
    ///
    /// Positional indices with only `Index` selectors are `AllScalar`, even
    /// when empty (the single element of a zero-dimensional array).
    pub fn shape(&self) -> IndexShape
    {
        match self {
            Indices::Named(_) => IndexShape::Named,
            Indices::Positional(selectors) => classify(selectors),
        }
    }

    /// Turn the request into checked positional selectors for an array with
    /// dimension names `names` and shape `shape`.
    ///
    /// Named requests are assembled and then classified as positional
    /// ones, so the resolved shape is never `Named`.
    fn resolve(self, names: &[Name], shape: &[usize]) -> Result<Resolved, NameError>
    {
        let index_shape = self.shape();
        let selectors = match self {
            Indices::Named(index) => assemble(names, &index)?,
            Indices::Positional(selectors) => selectors,
        };
        let index_shape = match index_shape {
            IndexShape::Named => classify(&selectors),
            positional => positional,
        };
        if selectors.len() != shape.len() {
            return Err(error::index_count(shape.len(), selectors.len()));
        }
        for (axis, (selector, &len)) in selectors.iter().zip(shape).enumerate() {
            selector.check(axis, len)?;
        }
        Ok(Resolved { selectors, shape: index_shape })
    }
}

/// Positional selectors are `AllScalar` if every one is a single index.
fn classify(selectors: &[Selector]) -> IndexShape
{
    if selectors.iter().all(Selector::is_index) {
        IndexShape::AllScalar
    } else {
        IndexShape::Mixed
    }
}

impl From<NamedIndex> for Indices
{
    fn from(index: NamedIndex) -> Self
    {
        Indices::Named(index)
    }
}

impl From<Vec<Selector>> for Indices
{
    fn from(selectors: Vec<Selector>) -> Self
    {
        Indices::Positional(selectors)
    }
}

impl<const N: usize> From<[Selector; N]> for Indices
{
    fn from(selectors: [Selector; N]) -> Self
    {
        Indices::Positional(selectors.into())
    }
}

/// The result of indexing: a single element, or a named array holding the
/// selected part.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<E, V>
{
    /// Every axis was indexed by a single index.
    Element(E),
    /// At least one axis was kept.
    Array(V),
}

impl<E, V> Selection<E, V>
{
    /// Return `true` if the selection is a single element.
    pub fn is_element(&self) -> bool
    {
        matches!(self, Selection::Element(_))
    }

    /// Return the element, or `None` for an array selection.
    pub fn into_element(self) -> Option<E>
    {
        match self {
            Selection::Element(e) => Some(e),
            Selection::Array(_) => None,
        }
    }

    /// Return the array, or `None` for an element selection.
    pub fn into_array(self) -> Option<V>
    {
        match self {
            Selection::Element(_) => None,
            Selection::Array(v) => Some(v),
        }
    }
}

/// Checked positional selectors.
struct Resolved
{
    selectors: Vec<Selector>,
    /// `AllScalar` or `Mixed`.
    shape: IndexShape,
}

impl Resolved
{
    fn strided(&self) -> Vec<SliceInfoElem>
    {
        self.selectors.iter().map(Selector::to_slice_info_elem).collect()
    }

    /// The list selectors with the axis they apply to after strided
    /// slicing.
    fn lists(&self) -> Vec<(Axis, &[usize])>
    {
        let mut lists = Vec::new();
        let mut out_axis = 0;
        for selector in &self.selectors {
            match selector {
                Selector::Index(_) => continue,
                Selector::List(indices) => lists.push((Axis(out_axis), &indices[..])),
                Selector::Slice(_) | Selector::Full => {}
            }
            out_axis += 1;
        }
        lists
    }

    fn names(&self, names: &[Name]) -> Vec<Name>
    {
        remaining_names(names, &self.selectors)
    }
}

fn element<A>(view: ArrayViewD<'_, A>) -> Result<&A, NameError>
{
    let ndim = view.ndim();
    view.into_dimensionality::<Ix0>()
        .map(|v| v.into_scalar())
        .map_err(|_| error::index_count(0, ndim))
}

fn element_mut<A>(view: ArrayViewMutD<'_, A>) -> Result<&mut A, NameError>
{
    let ndim = view.ndim();
    view.into_dimensionality::<Ix0>()
        .map(|v| v.into_scalar())
        .map_err(|_| error::index_count(0, ndim))
}

/// Fill the elements picked by `lists` (each a list of indices along one
/// axis) with `value`.
fn fill_lists<A>(mut view: ArrayViewMutD<'_, A>, lists: &[(Axis, &[usize])], value: &A)
where A: Clone
{
    match lists.split_first() {
        None => view.fill(value.clone()),
        Some((&(axis, indices), rest)) => {
            for &i in indices {
                let mut lane = view.view_mut();
                lane.collapse_axis(axis, i);
                fill_lists(lane, rest, value);
            }
        }
    }
}

/// # Indexing by name or position
///
/// The methods in this section accept [`Indices`], usually written with
/// the [`ns!`](crate::ns) macro. Named indices are first assembled into one
/// selector per axis; then every selector is checked against the shape of
/// the array, so no method here panics on bad indices and no write happens
/// unless the whole request is valid.
///
/// When every axis is indexed by a single index the result is an element;
/// otherwise it is a named array whose names are those of the kept axes.
/// Array results have dynamic dimensionality; for statically shaped
/// results use [`.slice()`](NamedArrayBase::slice).
impl<A, S, D> NamedArrayBase<S, D>
where
    S: RawData<Elem = A>,
    D: Dimension,
{
    fn resolve(&self, indices: Indices) -> Result<Resolved, NameError>
    {
        indices.resolve(&self.names, self.data.shape())
    }

    /// Read by value: return a copy of the selected element or elements.
    ///
    /// List selectors pick arbitrary elements along their axis, in the
    /// given order.
    ///
    /// ```
    /// use ndarray::arr2;
    /// use ndarray_named::{ns, IntoNamed, Selection};
    ///
    /// let x = arr2(&[[1, 2, 3], [4, 5, 6]]).into_named(["row", "col"]).unwrap();
    /// assert_eq!(x.get_by(ns![1, 2]).unwrap(), Selection::Element(6));
    ///
    /// let cols = x.get_by(ns![col = [2, 0]]).unwrap().into_array().unwrap();
    /// assert_eq!(cols.names(), &["row", "col"]);
    /// assert_eq!(cols.as_array(), &arr2(&[[3, 1], [6, 4]]).into_dyn());
    /// ```
    pub fn get_by<I>(&self, indices: I) -> Result<Selection<A, NamedArrayD<A>>, NameError>
    where
        I: Into<Indices>,
        A: Clone,
        S: Data,
    {
        let resolved = self.resolve(indices.into())?;
        let view = self.data.view().into_dyn().slice_move(resolved.strided().as_slice());
        if resolved.shape == IndexShape::AllScalar {
            return element(view).map(|e| Selection::Element(e.clone()));
        }
        let mut lists = resolved.lists().into_iter();
        let mut data = match lists.next() {
            Some((axis, indices)) => view.select(axis, indices),
            None => view.to_owned(),
        };
        for (axis, indices) in lists {
            data = data.select(axis, indices);
        }
        Ok(Selection::Array(NamedArrayBase::from_parts(data, resolved.names(&self.names))))
    }

    /// Read as a view: return a reference to the selected element, or a
    /// named view of the selected elements that aliases `self`.
    ///
    /// **Errors** with `ErrorKind::Unsupported` for list selectors, which
    /// cannot be expressed as a strided view.
    pub fn view_by<I>(&self, indices: I) -> Result<Selection<&A, NamedArrayViewD<'_, A>>, NameError>
    where
        I: Into<Indices>,
        S: Data,
    {
        let resolved = self.resolve(indices.into())?;
        if !resolved.lists().is_empty() {
            return Err(error::unsupported("index lists cannot be viewed, use get_by"));
        }
        let view = self.data.view().into_dyn().slice_move(resolved.strided().as_slice());
        if resolved.shape == IndexShape::AllScalar {
            element(view).map(Selection::Element)
        } else {
            Ok(Selection::Array(NamedArrayBase::from_parts(view, resolved.names(&self.names))))
        }
    }

    /// Read as a mutable view: return a mutable reference to the selected
    /// element, or a named mutable view of the selected elements.
    ///
    /// Writes through the result change `self`.
    ///
    /// ```
    /// use ndarray::Array2;
    /// use ndarray_named::{ns, IntoNamed};
    ///
    /// let mut x = Array2::<f64>::zeros((4, 3)).into_named(["features", "observations"]).unwrap();
    /// {
    ///     let mut column = x.view_mut_by(ns![observations = 2]).unwrap().into_array().unwrap();
    ///     column.iter_mut().for_each(|v| *v = 1.);
    /// }
    /// assert_eq!(x.as_array().column(2).sum(), 4.);
    /// ```
    ///
    /// **Errors** with `ErrorKind::Unsupported` for list selectors.
    pub fn view_mut_by<I>(&mut self, indices: I)
        -> Result<Selection<&mut A, NamedArrayViewMutD<'_, A>>, NameError>
    where
        I: Into<Indices>,
        S: DataMut,
    {
        let resolved = self.resolve(indices.into())?;
        if !resolved.lists().is_empty() {
            return Err(error::unsupported("index lists cannot be viewed, use set_by"));
        }
        let names = resolved.names(&self.names);
        let view = self.data.view_mut().into_dyn().slice_move(resolved.strided().as_slice());
        if resolved.shape == IndexShape::AllScalar {
            element_mut(view).map(Selection::Element)
        } else {
            Ok(Selection::Array(NamedArrayBase::from_parts(view, names)))
        }
    }

    /// Write: set every selected element to `value`.
    ///
    /// The indices are fully validated before anything is written.
    ///
    /// ```
    /// use ndarray::Array2;
    /// use ndarray_named::{ns, IntoNamed, Selection};
    ///
    /// let mut x = Array2::<f64>::zeros((4, 3)).into_named(["features", "observations"]).unwrap();
    /// x.set_by(9., ns![features = 1, observations = 1]).unwrap();
    /// assert_eq!(x.get_by(ns![1, 1]).unwrap(), Selection::Element(9.));
    /// assert!(x.set_by(1., ns![features = 0, time = 0]).is_err());
    /// assert_eq!(x.as_array().sum(), 9.);
    /// ```
    pub fn set_by<I>(&mut self, value: A, indices: I) -> Result<(), NameError>
    where
        I: Into<Indices>,
        A: Clone,
        S: DataMut,
    {
        let resolved = self.resolve(indices.into())?;
        let view = self.data.view_mut().into_dyn().slice_move(resolved.strided().as_slice());
        if resolved.shape == IndexShape::AllScalar {
            *element_mut(view)? = value;
        } else {
            fill_lists(view, &resolved.lists(), &value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::ErrorKind;
    use crate::IntoNamed;
    use alloc::vec;
    use ndarray::{arr2, Array2};

    #[test]
    fn classification()
    {
        assert_eq!(crate::ns![].shape(), IndexShape::AllScalar);
        assert_eq!(crate::ns![0, 1].shape(), IndexShape::AllScalar);
        assert_eq!(crate::ns![0, ..].shape(), IndexShape::Mixed);
        assert_eq!(crate::ns![0, vec![1]].shape(), IndexShape::Mixed);
        assert_eq!(crate::ns![x = 0].shape(), IndexShape::Named);
    }

    #[test]
    fn resolved_named_indices_are_classified()
    {
        let names = [Name::new("a"), Name::new("b")];
        let all = crate::ns![b = 1, a = 0].resolve(&names, &[2, 3]).unwrap();
        assert_eq!(all.shape, IndexShape::AllScalar);
        let partial = crate::ns![a = 0].resolve(&names, &[2, 3]).unwrap();
        assert_eq!(partial.shape, IndexShape::Mixed);
        let zero_d = crate::ns![].resolve(&[], &[]).unwrap();
        assert_eq!(zero_d.shape, IndexShape::AllScalar);
    }

    #[test]
    fn lists_follow_dropped_axes()
    {
        let resolved = Indices::from([Selector::from(0), Selector::from([1, 0]), Selector::Full, Selector::from([2])])
            .resolve(&[Name::new("a"), Name::new("b"), Name::new("c"), Name::new("d")], &[2, 2, 2, 3])
            .unwrap();
        assert_eq!(resolved.shape, IndexShape::Mixed);
        let lists = resolved.lists();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0], (Axis(0), &[1, 0][..]));
        assert_eq!(lists[1], (Axis(2), &[2][..]));
    }

    #[test]
    fn wrong_index_count()
    {
        let x = Array2::<i32>::zeros((2, 2)).into_named(["a", "b"]).unwrap();
        assert_eq!(x.get_by(crate::ns![0]).unwrap_err().kind(), ErrorKind::IncompatibleIndex);
    }

    #[test]
    fn set_with_lists()
    {
        let mut x = Array2::<i32>::zeros((3, 3)).into_named(["a", "b"]).unwrap();
        x.set_by(1, crate::ns![a = [0, 2], b = [1, 2]]).unwrap();
        assert_eq!(x.as_array(), &arr2(&[[0, 1, 1], [0, 0, 0], [0, 1, 1]]));
    }

    #[test]
    fn failed_write_leaves_array_untouched()
    {
        let mut x = Array2::<i32>::zeros((3, 3)).into_named(["a", "b"]).unwrap();
        let err = x.set_by(1, crate::ns![a = [0, 3], b = 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(x.as_array().sum(), 0);
    }
}

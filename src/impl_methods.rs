// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::ops::{Add, Div, Range};

use ndarray::iter::{Iter, IterMut};
use ndarray::{Array, ArrayBase, Axis, Data, DataMut, Dimension, IxDyn, RawData, RemoveAxis, SliceArg};
use num_traits::{FromPrimitive, Zero};

use crate::error::{self, NameError};
use crate::{remaining_names, AsAxis, IntoNames, Name, NameSet};
use crate::{NamedArray, NamedArrayBase, NamedArrayView, NamedArrayViewMut};

/// # Construction and introspection
impl<A, S, D> NamedArrayBase<S, D>
where
    S: RawData<Elem = A>,
    D: Dimension,
{
    /// Attach `names` to `data`, one name per axis.
    ///
    /// No element is copied.
    ///
    /// **Errors** with `ErrorKind::ShapeMismatch` if the number of names is
    /// not the number of axes of `data`.
    ///
    /// ```
    /// use ndarray::Array3;
    /// use ndarray_named::{ErrorKind, NamedArrayBase};
    ///
    /// let a = Array3::<u8>::zeros((2, 3, 4));
    /// let e = NamedArrayBase::new(a, ["x", "y"]).unwrap_err();
    /// assert_eq!(e.kind(), ErrorKind::ShapeMismatch);
    /// assert_eq!(e.shape_mismatch(), Some((3, 2)));
    /// ```
    pub fn new<N>(data: ArrayBase<S, D>, names: N) -> Result<Self, NameError>
    where N: IntoNames
    {
        let names = names.into_names();
        if names.len() != data.ndim() {
            return Err(error::shape_mismatch(data.ndim(), names.len()));
        }
        Ok(NamedArrayBase { data, names })
    }

    /// Attach the names of the name set `N` to `data`.
    ///
    /// The names are borrowed from `N::NAMES`, not copied.
    ///
    /// **Errors** with `ErrorKind::ShapeMismatch` if `N` does not have one
    /// name per axis of `data`.
    pub fn from_name_set<N>(data: ArrayBase<S, D>) -> Result<Self, NameError>
    where N: NameSet
    {
        Self::new(data, N::NAMES)
    }

    /// Build from parts that are known to agree.
    pub(crate) fn from_parts<N>(data: ArrayBase<S, D>, names: N) -> Self
    where N: IntoNames
    {
        let names = names.into_names();
        debug_assert_eq!(data.ndim(), names.len());
        NamedArrayBase { data, names }
    }

    /// Return the dimension names, one per axis.
    pub fn names(&self) -> &[Name]
    {
        &self.names
    }

    /// Return a reference to the wrapped array.
    pub fn as_array(&self) -> &ArrayBase<S, D>
    {
        &self.data
    }

    /// Drop the names and return the wrapped array.
    pub fn into_inner(self) -> ArrayBase<S, D>
    {
        self.data
    }

    /// Return the wrapped array and the names.
    pub fn into_parts(self) -> (ArrayBase<S, D>, Cow<'static, [Name]>)
    {
        (self.data, self.names)
    }

    /// Return the shape of the array as a slice.
    pub fn shape<'a>(&'a self) -> &'a [usize]
    where A: 'a
    {
        self.data.shape()
    }

    /// Return the shape of the array as it's stored in the array.
    pub fn raw_dim(&self) -> D
    {
        self.data.raw_dim()
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize
    {
        self.data.ndim()
    }

    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    /// Resolve a name or position to an axis of this array.
    pub fn axis<X>(&self, axis: X) -> Result<Axis, NameError>
    where X: AsAxis
    {
        axis.as_axis(&self.names)
    }

    /// Return the length of the axis `axis`, given by name or position.
    ///
    /// ```
    /// use ndarray::{Array2, Axis};
    /// use ndarray_named::IntoNamed;
    ///
    /// let x = Array2::<f32>::zeros((4, 3)).into_named(["features", "observations"]).unwrap();
    /// assert_eq!(x.len_of("observations").unwrap(), 3);
    /// assert_eq!(x.len_of(Axis(0)).unwrap(), 4);
    /// assert!(x.len_of("time").is_err());
    /// ```
    pub fn len_of<X>(&self, axis: X) -> Result<usize, NameError>
    where X: AsAxis
    {
        let axis = self.axis(axis)?;
        Ok(self.data.len_of(axis))
    }

    /// Return the range of valid indices along `axis`.
    pub fn axis_range<X>(&self, axis: X) -> Result<Range<usize>, NameError>
    where X: AsAxis
    {
        self.len_of(axis).map(|len| 0..len)
    }

    /// Replace the dimension names.
    ///
    /// **Errors** with `ErrorKind::ShapeMismatch` if the number of names is
    /// not the number of axes.
    pub fn rename<N>(self, names: N) -> Result<Self, NameError>
    where N: IntoNames
    {
        Self::new(self.data, names)
    }

    /// Convert into a named array with dynamic dimensionality.
    pub fn into_dyn(self) -> NamedArrayBase<S, IxDyn>
    {
        NamedArrayBase {
            data: self.data.into_dyn(),
            names: self.names,
        }
    }
}

/// # Views, copies and iteration
impl<A, S, D> NamedArrayBase<S, D>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    /// Return a read-only named view of the array.
    pub fn view(&self) -> NamedArrayView<'_, A, D>
    {
        NamedArrayBase::from_parts(self.data.view(), self.names.clone())
    }

    /// Return a named array with a copy of the elements.
    pub fn to_owned(&self) -> NamedArray<A, D>
    where A: Clone
    {
        NamedArrayBase::from_parts(self.data.to_owned(), self.names.clone())
    }

    /// Return an iterator over the elements, in logical order.
    pub fn iter(&self) -> Iter<'_, A, D>
    {
        self.data.iter()
    }

    /// Return a reference to the element at `index`, or `None` if the
    /// index is out of bounds.
    ///
    /// This is `ndarray`'s positional element access; see
    /// [`.get_by()`](Self::get_by) for indexing by name.
    pub fn get<I>(&self, index: I) -> Option<&A>
    where I: ndarray::NdIndex<D>
    {
        self.data.get(index)
    }

    /// Allocate a new array of the same shape and names, with every element
    /// set to `B::default()`.
    ///
    /// ```
    /// use ndarray::Array2;
    /// use ndarray_named::IntoNamed;
    ///
    /// let x = Array2::<f64>::ones((2, 3)).into_named(["a", "b"]).unwrap();
    /// let y = x.similar::<u8>();
    /// assert_eq!(y.names(), x.names());
    /// assert_eq!(y.shape(), &[2, 3]);
    /// assert_eq!(y.as_array().sum(), 0);
    /// ```
    pub fn similar<B>(&self) -> NamedArray<B, D>
    where B: Clone + Default
    {
        self.similar_elem(B::default())
    }

    /// Allocate a new array of the same shape and names, with every element
    /// set to `elem`.
    pub fn similar_elem<B>(&self, elem: B) -> NamedArray<B, D>
    where B: Clone
    {
        NamedArrayBase::from_parts(Array::from_elem(self.data.raw_dim(), elem), self.names.clone())
    }
}

impl<A, S, D> NamedArrayBase<S, D>
where
    S: DataMut<Elem = A>,
    D: Dimension,
{
    /// Return a read-write named view of the array.
    pub fn view_mut(&mut self) -> NamedArrayViewMut<'_, A, D>
    {
        let names = self.names.clone();
        NamedArrayBase::from_parts(self.data.view_mut(), names)
    }

    /// Return an iterator of mutable references to the elements, in
    /// logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, A, D>
    {
        self.data.iter_mut()
    }

    /// Return a mutable reference to the element at `index`, or `None` if
    /// the index is out of bounds.
    pub fn get_mut<I>(&mut self, index: I) -> Option<&mut A>
    where I: ndarray::NdIndex<D>
    {
        self.data.get_mut(index)
    }
}

/// # Slicing with `ndarray` slice arguments
///
/// These methods take positional slice arguments, usually from `ndarray`'s
/// `s![]` macro, and keep the static dimensionality `ndarray` computes for
/// them. Axes indexed by a single index lose their names; axes inserted
/// with `NewAxis` get the wildcard name.
///
/// **Panics** where the corresponding `ndarray` method panics: if an index
/// is out of bounds, a step size is zero, or `info` does not match the
/// number of axes.
impl<A, S, D> NamedArrayBase<S, D>
where
    S: RawData<Elem = A>,
    D: Dimension,
{
    /// Return a sliced named view of the array.
    ///
    /// ```
    /// use ndarray::{s, Array3, NewAxis};
    /// use ndarray_named::{IntoNamed, Name};
    ///
    /// let x = Array3::<u8>::zeros((2, 3, 4)).into_named(["a", "b", "c"]).unwrap();
    /// let v = x.slice(s![1, .., ..;2]);
    /// assert_eq!(v.shape(), &[3, 2]);
    /// assert_eq!(v.names(), &["b", "c"]);
    ///
    /// let w = x.slice(s![0, 0, NewAxis, ..]);
    /// assert_eq!(w.names(), &[Name::WILDCARD, Name::new("c")]);
    /// ```
    #[track_caller]
    pub fn slice<I>(&self, info: I) -> NamedArrayView<'_, A, I::OutDim>
    where
        I: SliceArg<D>,
        S: Data,
    {
        let names = remaining_names(&self.names, info.as_ref());
        NamedArrayBase::from_parts(self.data.slice(info), names)
    }

    /// Return a sliced read-write named view of the array.
    #[track_caller]
    pub fn slice_mut<I>(&mut self, info: I) -> NamedArrayViewMut<'_, A, I::OutDim>
    where
        I: SliceArg<D>,
        S: DataMut,
    {
        let names = remaining_names(&self.names, info.as_ref());
        NamedArrayBase::from_parts(self.data.slice_mut(info), names)
    }

    /// Slice the array, consuming it.
    #[track_caller]
    pub fn slice_move<I>(self, info: I) -> NamedArrayBase<S, I::OutDim>
    where I: SliceArg<D>
    {
        let names = remaining_names(&self.names, info.as_ref());
        NamedArrayBase::from_parts(self.data.slice_move(info), names)
    }
}

/// # Changing the axes
impl<A, S, D> NamedArrayBase<S, D>
where
    S: RawData<Elem = A>,
    D: Dimension,
{
    /// Return a named view of the subarray at `index` along `axis`; the
    /// axis and its name are removed.
    ///
    /// **Errors** if `axis` does not resolve or `index` is out of bounds.
    ///
    /// ```
    /// use ndarray::arr2;
    /// use ndarray_named::IntoNamed;
    ///
    /// let x = arr2(&[[1, 2, 3], [4, 5, 6]]).into_named(["row", "col"]).unwrap();
    /// let col = x.index_axis("col", 1).unwrap();
    /// assert_eq!(col.names(), &["row"]);
    /// assert_eq!(col.as_array().to_vec(), vec![2, 5]);
    /// ```
    pub fn index_axis<X>(&self, axis: X, index: usize) -> Result<NamedArrayView<'_, A, D::Smaller>, NameError>
    where
        X: AsAxis,
        S: Data,
        D: RemoveAxis,
    {
        let axis = self.checked_axis_index(axis, index)?;
        Ok(NamedArrayBase::from_parts(self.data.index_axis(axis, index), self.names_without(axis)))
    }

    /// Collapse `axis` at `index`, consuming the array; the axis and its
    /// name are removed.
    pub fn index_axis_move<X>(self, axis: X, index: usize) -> Result<NamedArrayBase<S, D::Smaller>, NameError>
    where
        X: AsAxis,
        D: RemoveAxis,
    {
        let axis = self.checked_axis_index(axis, index)?;
        let names = self.names_without(axis);
        Ok(NamedArrayBase::from_parts(self.data.index_axis_move(axis, index), names))
    }

    /// Insert a new axis of length 1 at `axis`, called `name`.
    ///
    /// **Errors** with `ErrorKind::OutOfBounds` if `axis > self.ndim()`.
    pub fn insert_axis<N>(self, axis: Axis, name: N) -> Result<NamedArrayBase<S, D::Larger>, NameError>
    where N: Into<Name>
    {
        if axis.index() > self.ndim() {
            return Err(error::axis_out_of_bounds(axis.index(), self.ndim() + 1));
        }
        let mut names = self.names.into_owned();
        names.insert(axis.index(), name.into());
        Ok(NamedArrayBase::from_parts(self.data.insert_axis(axis), names))
    }

    /// Permute the axes; the names move with their axes.
    ///
    /// `order[i]` designates the axis that becomes axis `i`, by name or
    /// position.
    ///
    /// **Errors** if an entry does not resolve, or with
    /// `ErrorKind::IncompatibleIndex` if `order` is not a permutation of
    /// the axes.
    ///
    /// ```
    /// use ndarray::Array3;
    /// use ndarray_named::IntoNamed;
    ///
    /// let x = Array3::<u8>::zeros((2, 3, 4)).into_named(["a", "b", "c"]).unwrap();
    /// let y = x.permuted_axes(&["c", "a", "b"]).unwrap();
    /// assert_eq!(y.shape(), &[4, 2, 3]);
    /// assert_eq!(y.names(), &["c", "a", "b"]);
    /// ```
    pub fn permuted_axes<X>(self, order: &[X]) -> Result<Self, NameError>
    where X: AsAxis
    {
        let ndim = self.ndim();
        if order.len() != ndim {
            return Err(error::index_count(ndim, order.len()));
        }
        let mut perm = self.data.raw_dim();
        let mut seen = alloc::vec![false; ndim];
        for (i, axis) in order.iter().enumerate() {
            let axis = axis.as_axis(&self.names)?.index();
            if seen[axis] {
                return Err(error::invalid_index("axes must be a permutation"));
            }
            seen[axis] = true;
            perm[i] = axis;
        }
        let names: Vec<Name> = perm.slice().iter().map(|&i| self.names[i]).collect();
        Ok(NamedArrayBase::from_parts(self.data.permuted_axes(perm), names))
    }

    /// Transpose the array by reversing its axes and their names.
    pub fn reversed_axes(self) -> Self
    {
        let mut names = self.names.into_owned();
        names.reverse();
        NamedArrayBase::from_parts(self.data.reversed_axes(), names)
    }

    fn checked_axis_index<X>(&self, axis: X, index: usize) -> Result<Axis, NameError>
    where X: AsAxis
    {
        let axis = self.axis(axis)?;
        let len = self.data.len_of(axis);
        if index >= len {
            return Err(error::index_out_of_bounds(axis.index(), index as isize, len));
        }
        Ok(axis)
    }

    fn names_without(&self, axis: Axis) -> Vec<Name>
    {
        let mut names = self.names.to_vec();
        names.remove(axis.index());
        names
    }
}

/// # Reductions along a named axis
///
/// The reduced axis and its name are removed from the result.
impl<A, S, D> NamedArrayBase<S, D>
where
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    /// Return the sum along `axis`.
    ///
    /// ```
    /// use ndarray::arr2;
    /// use ndarray_named::IntoNamed;
    ///
    /// let x = arr2(&[[1., 2.], [3., 4.]]).into_named(["row", "col"]).unwrap();
    /// let s = x.sum_axis("row").unwrap();
    /// assert_eq!(s.names(), &["col"]);
    /// assert_eq!(s.as_array().to_vec(), vec![4., 6.]);
    /// ```
    pub fn sum_axis<X>(&self, axis: X) -> Result<NamedArray<A, D::Smaller>, NameError>
    where
        X: AsAxis,
        A: Clone + Zero + Add<Output = A>,
    {
        let axis = self.axis(axis)?;
        Ok(NamedArrayBase::from_parts(self.data.sum_axis(axis), self.names_without(axis)))
    }

    /// Return the mean along `axis`, or `Ok(None)` if the axis has length
    /// zero.
    pub fn mean_axis<X>(&self, axis: X) -> Result<Option<NamedArray<A, D::Smaller>>, NameError>
    where
        X: AsAxis,
        A: Clone + Zero + FromPrimitive + Add<Output = A> + Div<Output = A>,
    {
        let axis = self.axis(axis)?;
        Ok(self
            .data
            .mean_axis(axis)
            .map(|mean| NamedArrayBase::from_parts(mean, self.names_without(axis))))
    }

    /// Fold along `axis`, starting every lane from `init`.
    pub fn fold_axis<X, B, F>(&self, axis: X, init: B, fold: F) -> Result<NamedArray<B, D::Smaller>, NameError>
    where
        X: AsAxis,
        B: Clone,
        F: FnMut(&B, &A) -> B,
    {
        let axis = self.axis(axis)?;
        Ok(NamedArrayBase::from_parts(self.data.fold_axis(axis, init, fold), self.names_without(axis)))
    }
}

/// Extension trait for attaching names to `ndarray` arrays.
pub trait IntoNamed<S, D>
where S: RawData
{
    /// Attach `names` to the array, one name per axis.
    ///
    /// **Errors** with `ErrorKind::ShapeMismatch` if the number of names is
    /// not the number of axes.
    fn into_named<N>(self, names: N) -> Result<NamedArrayBase<S, D>, NameError>
    where N: IntoNames;
}

impl<S, D> IntoNamed<S, D> for ArrayBase<S, D>
where
    S: RawData,
    D: Dimension,
{
    fn into_named<N>(self, names: N) -> Result<NamedArrayBase<S, D>, NameError>
    where N: IntoNames
    {
        NamedArrayBase::new(self, names)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::ErrorKind;
    use crate::IntoNamed;
    use alloc::vec;
    use ndarray::{arr2, Array2, Array3};

    #[test]
    fn views_keep_names()
    {
        let mut x = Array2::<i32>::zeros((2, 3)).into_named(["a", "b"]).unwrap();
        assert_eq!(x.view().names(), &["a", "b"]);
        x.view_mut().iter_mut().for_each(|v| *v = 1);
        assert_eq!(x.iter().sum::<i32>(), 6);
        assert_eq!(x.to_owned(), x);
    }

    #[test]
    fn index_axis_checks_index()
    {
        let x = Array2::<i32>::zeros((2, 3)).into_named(["a", "b"]).unwrap();
        assert_eq!(x.index_axis("b", 3).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(x.index_axis("c", 0).unwrap_err().kind(), ErrorKind::UnknownName);
        let y = x.index_axis_move(Axis(0), 1).unwrap();
        assert_eq!(y.names(), &["b"]);
    }

    #[test]
    fn insert_axis()
    {
        let x = Array2::<i32>::zeros((2, 3)).into_named(["a", "b"]).unwrap();
        let y = x.insert_axis(Axis(2), "c").unwrap();
        assert_eq!(y.shape(), &[2, 3, 1]);
        assert_eq!(y.names(), &["a", "b", "c"]);
        assert_eq!(y.insert_axis(Axis(5), "d").unwrap_err().kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn permutation_errors()
    {
        let x = Array3::<u8>::zeros((2, 3, 4)).into_named(["a", "b", "c"]).unwrap();
        assert_eq!(x.clone().permuted_axes(&["a", "b"]).unwrap_err().kind(), ErrorKind::IncompatibleIndex);
        assert_eq!(x.clone().permuted_axes(&["a", "a", "b"]).unwrap_err().kind(), ErrorKind::IncompatibleIndex);
        assert_eq!(x.clone().permuted_axes(&[2usize, 0, 1]).unwrap().names(), &["c", "a", "b"]);
        assert_eq!(x.reversed_axes().names(), &["c", "b", "a"]);
    }

    #[test]
    fn reductions_drop_the_axis()
    {
        let x = arr2(&[[1., 2., 3.], [4., 5., 6.]]).into_named(["row", "col"]).unwrap();
        let m = x.mean_axis("col").unwrap().unwrap();
        assert_eq!(m.names(), &["row"]);
        assert_eq!(m.as_array().to_vec(), vec![2., 5.]);
        let n = x.fold_axis(Axis(0), 0, |&acc, _| acc + 1).unwrap();
        assert_eq!(n.names(), &["col"]);
        assert_eq!(n.as_array().to_vec(), vec![2, 2, 2]);
        let empty = Array2::<f64>::zeros((0, 2)).into_named(["row", "col"]).unwrap();
        assert!(empty.mean_axis("row").unwrap().is_none());
    }

    #[test]
    fn rename_checks_count()
    {
        let x = Array2::<u8>::zeros((1, 1)).into_named(["a", "b"]).unwrap();
        let x = x.rename(["c", "d"]).unwrap();
        assert_eq!(x.names(), &["c", "d"]);
        assert_eq!(x.rename(["c"]).unwrap_err().kind(), ErrorKind::ShapeMismatch);
    }
}

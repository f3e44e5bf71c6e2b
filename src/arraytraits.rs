// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use core::fmt;
use core::ops::{Index, IndexMut};

use ndarray::{ArrayBase, Data, DataMut, Dimension, NdIndex, RawData};

use crate::NamedArrayBase;

/// Access the element at **index**.
///
/// This is positional indexing, as on the wrapped array.
///
/// **Panics** if index is out of bounds.
impl<S, D, I> Index<I> for NamedArrayBase<S, D>
where
    D: Dimension,
    I: NdIndex<D>,
    S: Data,
{
    type Output = S::Elem;

    #[track_caller]
    fn index(&self, index: I) -> &S::Elem
    {
        &self.data[index]
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<S, D, I> IndexMut<I> for NamedArrayBase<S, D>
where
    D: Dimension,
    I: NdIndex<D>,
    S: DataMut,
{
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut S::Elem
    {
        &mut self.data[index]
    }
}

/// Return `true` if the names, the shapes and all elements of `self` and
/// `other` are equal. Return `false` otherwise.
impl<A, B, S, S2, D> PartialEq<NamedArrayBase<S2, D>> for NamedArrayBase<S, D>
where
    A: PartialEq<B>,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
{
    fn eq(&self, other: &NamedArrayBase<S2, D>) -> bool
    {
        self.names == other.names
            && self.shape() == other.shape()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<S, D> Eq for NamedArrayBase<S, D>
where
    D: Dimension,
    S: Data,
    S::Elem: Eq,
{
}

impl<S, D> Clone for NamedArrayBase<S, D>
where
    S: RawData,
    ArrayBase<S, D>: Clone,
{
    fn clone(&self) -> Self
    {
        NamedArrayBase {
            data: self.data.clone(),
            names: self.names.clone(),
        }
    }
}

impl<A, S, D> fmt::Debug for NamedArrayBase<S, D>
where
    A: fmt::Debug,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("NamedArrayBase")
            .field("names", &self.names)
            .field("data", &self.data)
            .finish()
    }
}

/// Format the names, then the array as `ndarray` does.
///
/// ```
/// use ndarray::arr2;
/// use ndarray_named::IntoNamed;
///
/// let x = arr2(&[[1, 2], [3, 4]]).into_named(["row", "col"]).unwrap();
/// assert_eq!(x.to_string(), "(row, col)\n[[1, 2],\n [3, 4]]");
/// ```
impl<A, S, D> fmt::Display for NamedArrayBase<S, D>
where
    A: fmt::Display,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str("(")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", name)?;
        }
        f.write_str(")\n")?;
        fmt::Display::fmt(&self.data, f)
    }
}

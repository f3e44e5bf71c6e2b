// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//! Type aliases for common named array types

use ndarray::{Ix1, Ix2, Ix3, IxDyn, OwnedArcRepr, OwnedRepr, ViewRepr};

use crate::NamedArrayBase;

/// A named array that owns its data.
pub type NamedArray<A, D> = NamedArrayBase<OwnedRepr<A>, D>;
/// A named array with shared, copy-on-write ownership of its data.
pub type NamedArcArray<A, D> = NamedArrayBase<OwnedArcRepr<A>, D>;
/// A read-only named view of array data.
pub type NamedArrayView<'a, A, D> = NamedArrayBase<ViewRepr<&'a A>, D>;
/// A read-write named view of array data.
pub type NamedArrayViewMut<'a, A, D> = NamedArrayBase<ViewRepr<&'a mut A>, D>;

/// one-dimensional named array
pub type NamedArray1<A> = NamedArray<A, Ix1>;
/// two-dimensional named array
pub type NamedArray2<A> = NamedArray<A, Ix2>;
/// three-dimensional named array
pub type NamedArray3<A> = NamedArray<A, Ix3>;
/// dynamic-dimensional named array
pub type NamedArrayD<A> = NamedArray<A, IxDyn>;

/// one-dimensional named array view
pub type NamedArrayView1<'a, A> = NamedArrayView<'a, A, Ix1>;
/// two-dimensional named array view
pub type NamedArrayView2<'a, A> = NamedArrayView<'a, A, Ix2>;
/// dynamic-dimensional named array view
pub type NamedArrayViewD<'a, A> = NamedArrayView<'a, A, IxDyn>;

/// one-dimensional read-write named array view
pub type NamedArrayViewMut1<'a, A> = NamedArrayViewMut<'a, A, Ix1>;
/// two-dimensional read-write named array view
pub type NamedArrayViewMut2<'a, A> = NamedArrayViewMut<'a, A, Ix2>;
/// dynamic-dimensional read-write named array view
pub type NamedArrayViewMutD<'a, A> = NamedArrayViewMut<'a, A, IxDyn>;

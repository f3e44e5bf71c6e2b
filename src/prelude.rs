// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndarray-named prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! macros that you can import easily as a group.
//!
//! ```
//! use ndarray_named::prelude::*;
//! # fn main() { }
//! ```

#[doc(no_inline)]
pub use crate::{NamedArcArray, NamedArray, NamedArrayBase, NamedArrayView, NamedArrayViewMut};

#[doc(no_inline)]
pub use crate::{NamedArray1, NamedArray2, NamedArray3, NamedArrayD};

#[doc(no_inline)]
pub use crate::{NamedArrayView1, NamedArrayView2, NamedArrayViewD};

#[doc(no_inline)]
pub use crate::{NamedArrayViewMut1, NamedArrayViewMut2, NamedArrayViewMutD};

#[doc(no_inline)]
pub use crate::{Indices, Name, NamedIndex, Selection, Selector};

#[doc(no_inline)]
pub use crate::{AsAxis, DimNames, IntoNamed, IntoNames, NameSet};

#[doc(no_inline)]
pub use crate::NameError;

pub use crate::{name_set, ns};

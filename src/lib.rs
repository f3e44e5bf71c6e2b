// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![doc(html_root_url = "https://docs.rs/ndarray-named/0.1/")]
#![no_std]

//! The `ndarray-named` crate attaches dimension names to the arrays of the
//! [`ndarray`] crate, so that axes can be indexed, sliced and queried by
//! name instead of by position.
//!
//! - [`NamedArrayBase`]: an `ndarray::ArrayBase` together with one
//!   [`Name`] per axis. It owns or borrows its data exactly as the wrapped
//!   array does; views of a named array are named views.
//! - Named indexing: [`.get_by()`], [`.view_by()`], [`.view_mut_by()`] and
//!   [`.set_by()`] accept indices by name (with [`ns!`]`[name = index, ...]`)
//!   or by position (with `ns![index, ...]`). Axes that are not named
//!   select their whole extent.
//! - Every result of an indexing or structural operation carries the
//!   names of the axes that survive it.
//! - Dimension names known at compile time can be declared with
//!   [`name_set!`], which resolves each name to its axis statically.
//!
//! Storage, arithmetic and formatting are left to `ndarray`; the wrapped
//! array is available through [`.as_array()`] and [`.into_inner()`].
//!
//! [`.get_by()`]: NamedArrayBase::get_by
//! [`.view_by()`]: NamedArrayBase::view_by
//! [`.view_mut_by()`]: NamedArrayBase::view_mut_by
//! [`.set_by()`]: NamedArrayBase::set_by
//! [`.as_array()`]: NamedArrayBase::as_array
//! [`.into_inner()`]: NamedArrayBase::into_inner
//!
//! ## Example
//!
//! ```
//! use ndarray::Array2;
//! use ndarray_named::{ns, IntoNamed, Selection};
//!
//! // 4 features by 3 observations
//! let mut x = Array2::from_shape_fn((4, 3), |(f, o)| (10 * f + o) as f64)
//!     .into_named(["features", "observations"])
//!     .unwrap();
//!
//! let obs = x.get_by(ns![observations = 1]).unwrap().into_array().unwrap();
//! assert_eq!(obs.shape(), &[4]);
//! assert_eq!(obs.names(), &["features"]);
//!
//! let part = x.get_by(ns![observations = 1..3, features = 2]).unwrap().into_array().unwrap();
//! assert_eq!(part.names(), &["observations"]);
//! assert_eq!(part.as_array().as_slice().unwrap(), &[21., 22.]);
//!
//! assert_eq!(x.get_by(ns![2, 1]).unwrap(), Selection::Element(21.));
//!
//! x.set_by(9., ns![features = 1, observations = 1]).unwrap();
//! assert_eq!(x[[1, 1]], 9.);
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `std`: enabled by default. Without it the crate is `no_std` (it still
//!   needs `alloc`), and `NameError` does not implement `std::error::Error`.
//! - `approx`: implements the traits of the `approx` crate for named arrays.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use ndarray;

use alloc::borrow::Cow;

use ndarray::{ArrayBase, RawData};

pub use crate::aliases::*;
pub use crate::assemble::{assemble, NamedIndex};
pub use crate::dispatch::{IndexShape, Indices, Selection};
pub use crate::error::{ErrorKind, NameError};
pub use crate::impl_methods::IntoNamed;
pub use crate::name::{axis_of, names, position_of, AsAxis, DimNames, IntoNames, Name, NameSet};
pub use crate::selector::{remaining_names, AxisEffect, AxisSelector, Selector};

mod aliases;
mod array_approx;
mod arraytraits;
mod assemble;
mod dispatch;
mod error;
mod impl_methods;
mod name;
pub mod prelude;
mod selector;

/// An n-dimensional array whose axes have names.
///
/// `NamedArrayBase` pairs an `ndarray` [`ArrayBase`] with one [`Name`] per
/// axis. The data representation `S` and the dimensionality `D` are those
/// of the wrapped array, so the type can own its data ([`NamedArray`]),
/// borrow it ([`NamedArrayView`], [`NamedArrayViewMut`]) or share it
/// ([`NamedArcArray`]) just like `ndarray` arrays do.
///
/// The number of names always equals the number of axes. The names are
/// fixed at construction; operations that change the axes (indexing,
/// slicing, reductions, permutations) return a new named array whose
/// names are recomputed from the old ones.
///
/// ## Construction
///
/// Use [`NamedArrayBase::new`], the [`IntoNamed`] extension method
/// `.into_named()`, or [`NamedArrayBase::from_name_set`] for names
/// declared with [`name_set!`].
///
/// ## Axis arguments
///
/// Methods that take an axis accept anything implementing [`AsAxis`]: a
/// name (`"time"` or a [`Name`]), an `ndarray::Axis` or a `usize`. Names
/// are resolved to the first axis with that name; positions are bounds
/// checked. Both fail with a [`NameError`] instead of panicking.
///
/// ## Indexing
///
/// See [*Indexing by name or position*](#indexing-by-name-or-position).
pub struct NamedArrayBase<S, D>
where S: RawData
{
    data: ArrayBase<S, D>,
    names: Cow<'static, [Name]>,
}

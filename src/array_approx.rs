// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Approximate equality of named arrays.
//!
//! Two named arrays are approximately equal if their names and shapes are
//! equal and their elements are pairwise approximately equal.

#[cfg(feature = "approx")]
mod approx_methods
{
    use ndarray::{Data, Dimension};

    use crate::NamedArrayBase;

    impl<A, S, D> NamedArrayBase<S, D>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two named arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<S2>(&self, other: &NamedArrayBase<S2, D>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq<S2>(
            &self,
            other: &NamedArrayBase<S2, D>,
            epsilon: A::Epsilon,
            max_relative: A::Epsilon,
        ) -> bool
        where
            A: ::approx::RelativeEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
mod approx_traits
{
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};
    use ndarray::{Data, Dimension};

    use crate::NamedArrayBase;

    fn same_layout<S, S2, D>(a: &NamedArrayBase<S, D>, b: &NamedArrayBase<S2, D>) -> bool
    where
        S: Data,
        S2: Data,
        D: Dimension,
    {
        a.names() == b.names() && a.shape() == b.shape()
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B, S, S2, D> AbsDiffEq<NamedArrayBase<S2, D>> for NamedArrayBase<S, D>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        D: Dimension,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon
        {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &NamedArrayBase<S2, D>, epsilon: A::Epsilon) -> bool
        {
            same_layout(self, other)
                && self
                    .iter()
                    .zip(other.iter())
                    .all(|(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B, S, S2, D> RelativeEq<NamedArrayBase<S2, D>> for NamedArrayBase<S, D>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        D: Dimension,
    {
        fn default_max_relative() -> A::Epsilon
        {
            A::default_max_relative()
        }

        fn relative_eq(&self, other: &NamedArrayBase<S2, D>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        {
            same_layout(self, other)
                && self
                    .iter()
                    .zip(other.iter())
                    .all(|(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B, S, S2, D> UlpsEq<NamedArrayBase<S2, D>> for NamedArrayBase<S, D>
    where
        A: UlpsEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        D: Dimension,
    {
        fn default_max_ulps() -> u32
        {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &NamedArrayBase<S2, D>, epsilon: A::Epsilon, max_ulps: u32) -> bool
        {
            same_layout(self, other)
                && self
                    .iter()
                    .zip(other.iter())
                    .all(|(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

    #[cfg(test)]
    mod tests
    {
        use alloc::vec;

        use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_ne};
        use ndarray::{array, Array2};

        use crate::{IntoNamed, NamedArray2};

        fn named(a: Array2<f32>) -> NamedArray2<f32>
        {
            a.into_named(["row", "col"]).unwrap()
        }

        #[test]
        fn abs_diff_eq()
        {
            let a = named(array![[0., 2.], [-0.000010001, 100000000.]]);
            let mut b = named(array![[0., 1.], [-0.000010002, 100000001.]]);
            assert_abs_diff_ne!(a, b);
            b.set_by(2., crate::ns![row = 0, col = 1]).unwrap();
            assert_abs_diff_eq!(a, b);

            // Make sure we can compare different shapes without failure.
            let c = named(array![[1., 2.]]);
            assert_abs_diff_ne!(a, c);
        }

        #[test]
        fn names_must_match()
        {
            let a = named(array![[1., 2.]]);
            let b = a.clone().rename(["col", "row"]).unwrap();
            assert_relative_eq!(a, a.clone());
            assert_ulps_ne!(a, b);
        }
    }
}

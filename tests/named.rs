#![allow(clippy::float_cmp)]

use ndarray::prelude::*;
use ndarray_named::prelude::*;
use ndarray_named::{names, ErrorKind};

use quickcheck::{quickcheck, TestResult};

const POOL: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn shape_from(dims: &[u8]) -> Vec<usize>
{
    dims.iter().take(4).map(|&d| d as usize % 4).collect()
}

fn sample_2x() -> NamedArray2<f64>
{
    // 4 features by 3 observations
    Array2::from_shape_fn((4, 3), |(f, o)| (10 * f + o) as f64)
        .into_named(["features", "observations"])
        .unwrap()
}

quickcheck! {
    fn wrapping_keeps_names(dims: Vec<u8>) -> bool {
        let shape = shape_from(&dims);
        let a = ArrayD::<u8>::zeros(IxDyn(&shape));
        let labels = POOL[..shape.len()].to_vec();
        let x = a.into_named(labels.clone()).unwrap();
        x.names() == &labels[..] && names(&x).len() == shape.len() && x.shape() == &shape[..]
    }

    fn wrong_name_count_fails(dims: Vec<u8>, extra: bool) -> TestResult {
        let shape = shape_from(&dims);
        if shape.is_empty() && !extra {
            return TestResult::discard();
        }
        let count = if extra { shape.len() + 1 } else { shape.len() - 1 };
        let a = ArrayD::<u8>::zeros(IxDyn(&shape));
        let err = a.into_named(POOL[..count].to_vec()).unwrap_err();
        TestResult::from_bool(err.kind() == ErrorKind::ShapeMismatch
                              && err.shape_mismatch() == Some((shape.len(), count)))
    }
}

#[test]
fn plain_arrays_have_wildcard_names()
{
    let a = Array3::<f32>::zeros((1, 2, 3));
    assert_eq!(names(&a).as_ref(), &[Name::WILDCARD; 3]);
    let x = a.into_named(["x", "_", "z"]).unwrap();
    assert_eq!(names(&x).as_ref(), &["x", "_", "z"]);
    assert!(x.axis("_").is_err());
    assert_eq!(x.axis(1usize).unwrap(), Axis(1));
}

#[test]
fn scenario_features_observations()
{
    let mut x = sample_2x();

    let obs = x.get_by(ns![observations = 1]).unwrap().into_array().unwrap();
    assert_eq!(obs.shape(), &[4]);
    assert_eq!(obs.names(), &["features"]);
    assert_eq!(obs.as_array(), &arr1(&[1., 11., 21., 31.]).into_dyn());

    let part = x.get_by(ns![features = 2, observations = 1..3]).unwrap().into_array().unwrap();
    assert_eq!(part.shape(), &[2]);
    assert_eq!(part.names(), &["observations"]);
    assert_eq!(part.iter().cloned().collect::<Vec<_>>(), vec![21., 22.]);

    assert_eq!(x.get_by(ns![2, 1]).unwrap(), Selection::Element(21.));

    x.set_by(9., ns![features = 1, observations = 1]).unwrap();
    assert_eq!(x.get_by(ns![1, 1]).unwrap().into_element(), Some(9.));
}

#[test]
fn order_of_names_does_not_matter()
{
    let x = sample_2x();
    let a = x.get_by(ns![features = 1..3, observations = 0]).unwrap();
    let b = x.get_by(ns![observations = 0, features = 1..3]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_name()
{
    let x = sample_2x();
    let err = x.get_by(ns![time = 0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownName);
    assert_eq!(err.name(), Some("time"));
    assert!(err.to_string().contains("time"));
}

#[test]
fn similar_keeps_names_not_storage()
{
    let x = sample_2x();
    let mut y = x.similar::<f64>();
    assert_eq!(y.names(), x.names());
    assert_eq!(y.shape(), x.shape());
    y.set_by(1., ns![features = ..]).unwrap();
    assert_eq!(y.as_array().sum(), 12.);
    assert_eq!(x.get_by(ns![0, 0]).unwrap().into_element(), Some(0.));

    let z = x.similar_elem(true);
    assert!(z.iter().all(|&b| b));
}

name_set! {
    /// Axes of a table of measurements.
    struct Table { features, observations }
}

#[test]
fn name_sets_resolve_statically()
{
    assert_eq!(Table::features, Axis(0));
    assert_eq!(Table::observations, Axis(1));
    let x = NamedArray2::from_name_set::<Table>(Array2::<u8>::zeros((4, 3))).unwrap();
    assert_eq!(x.len_of(Table::observations).unwrap(), 3);
    assert_eq!(x.names(), Table::NAMES);
    assert!(NamedArray1::from_name_set::<Table>(Array1::<u8>::zeros(3)).is_err());
}

#[test]
fn zero_dimensional()
{
    let mut x = arr0(5).into_named(Vec::<&'static str>::new()).unwrap();
    assert_eq!(x.get_by(ns![]).unwrap(), Selection::Element(5));
    x.set_by(6, ns![]).unwrap();
    assert_eq!(x[()], 6);
}

#[test]
fn into_inner_and_parts()
{
    let x = sample_2x();
    let (data, n) = x.clone().into_parts();
    assert_eq!(&n[..], x.names());
    assert_eq!(data, x.into_inner());
}

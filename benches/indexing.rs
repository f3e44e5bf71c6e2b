#![feature(test)]

extern crate test;
use test::{black_box, Bencher};

use ndarray::prelude::*;
use ndarray_named::prelude::*;

name_set! {
    struct Table { features, observations }
}

fn table() -> NamedArray2<f64>
{
    NamedArray2::from_name_set::<Table>(Array::zeros((64, 64))).unwrap()
}

#[bench]
fn len_of_by_string(bench: &mut Bencher)
{
    let a = table();
    bench.iter(|| a.len_of(black_box("observations")).unwrap());
}

#[bench]
fn len_of_by_name_set(bench: &mut Bencher)
{
    let a = table();
    bench.iter(|| a.len_of(black_box(Table::observations)).unwrap());
}

#[bench]
fn get_by_name_element(bench: &mut Bencher)
{
    let a = table();
    bench.iter(|| a.get_by(ns![observations = 7, features = 3]).unwrap());
}

#[bench]
fn get_by_position_element(bench: &mut Bencher)
{
    let a = table();
    bench.iter(|| a.get_by(ns![3, 7]).unwrap());
}

#[bench]
fn view_by_name_column(bench: &mut Bencher)
{
    let a = table();
    bench.iter(|| {
        let col = a.view_by(ns![observations = 7]).unwrap().into_array().unwrap();
        col.iter().fold(0., |acc, &x| acc + x)
    });
}

#[bench]
fn set_by_name_block(bench: &mut Bencher)
{
    let mut a = table();
    bench.iter(|| a.set_by(1., ns![features = 8..56, observations = ..;2]).unwrap());
}

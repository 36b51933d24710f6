#[macro_use]
extern crate bencher;

use std::{cell::Cell, convert::Infallible, rc::Rc};

use bencher::Bencher;
use minirx::prelude::*;

fn subject_broadcast(bench: &mut Bencher) {
  let mut subject = Subject::<usize, Infallible>::new();
  let sum = Rc::new(Cell::new(0));
  for _ in 0..8 {
    let sum = sum.clone();
    subject.subscribe(move |v| sum.set(sum.get() + v));
  }
  bench.iter(|| {
    for v in 0..100 {
      subject.next(v);
    }
    sum.get()
  });
}

fn map_filter_chain(bench: &mut Bencher) {
  bench.iter(|| {
    let sum = Rc::new(Cell::new(0));
    let c_sum = sum.clone();
    Observable::<usize, Infallible>::from_iter(0..1000)
      .map(|v| v * 3)
      .filter(|v| v % 2 == 0)
      .subscribe(move |v| c_sum.set(c_sum.get() + v));
    sum.get()
  });
}

fn concat_of_many(bench: &mut Bencher) {
  let sources: Vec<_> = (0..64).map(Observable::<usize, Infallible>::of).collect();
  bench.iter(|| {
    let count = Rc::new(Cell::new(0));
    let c_count = count.clone();
    Observable::concat(sources.clone()).subscribe(move |_| c_count.set(c_count.get() + 1));
    count.get()
  });
}

benchmark_group!(benches, subject_broadcast, map_filter_chain, concat_of_many);
benchmark_main!(benches);

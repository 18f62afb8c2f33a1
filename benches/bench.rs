use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use astro_units::dynamic::DynQuantity;
use astro_units::literal::*;
use astro_units::{Length, Time, Vector3, dims};

// Establish a baseline with the same operations on bare f64s

fn baseline_f64(c: &mut Criterion) {
  let mut g = c.benchmark_group("baseline_f64");
  g.throughput(Throughput::Elements(1));
  g.bench_function("add", |b| b.iter(|| black_box(3.14) + black_box(69.420)));
  g.bench_function("mul", |b| b.iter(|| black_box(3.14) * black_box(69.420)));
  g.bench_function("div", |b| b.iter(|| black_box(3.14) / black_box(69.420)));
  g.bench_function("sqrt", |b| b.iter(|| black_box(69.420_f64).sqrt()));
  g.finish();
}

// The same operations on quantities: should be indistinguishable from the baseline

fn quantity(c: &mut Criterion) {
  let mut g = c.benchmark_group("quantity");
  g.throughput(Throughput::Elements(1));
  g.bench_function("add", |b| b.iter(|| black_box(m(3.14)) + black_box(km(69.420))));
  g.bench_function("mul", |b| b.iter(|| black_box(m(3.14)) * black_box(s(69.420))));
  g.bench_function("div", |b| b.iter(|| black_box(m(3.14)) / black_box(s(69.420))));
  g.bench_function("sqrt", |b| b.iter(|| black_box(m2(69.420)).sqrt()));
  g.finish();
}

// Runtime-tagged quantities pay for the dimension check on every operation

fn dynamic(c: &mut Criterion) {
  let x = DynQuantity::from(m(3.14));
  let y = DynQuantity::from(km(69.420));
  let t = DynQuantity::from(s(69.420));
  let mut g = c.benchmark_group("dynamic");
  g.throughput(Throughput::Elements(1));
  g.bench_function("add", |b| b.iter(|| black_box(x).try_add(black_box(y))));
  g.bench_function("mul", |b| b.iter(|| black_box(x).checked_mul(black_box(t))));
  g.bench_function("div", |b| b.iter(|| black_box(x).checked_div(black_box(t))));
  g.finish();
}

// Sums over slices, to check the loop vectorises equally well

const LENS: [usize; 3] = [16, 256, 4096];

fn sum_slice(c: &mut Criterion) {
  let mut g = c.benchmark_group("sum_slice");
  for len in LENS {
    let raw: Vec<f64> = (0..len).map(|i| i as f64).collect();
    let quantities: Vec<Length> = raw.iter().map(|&x| Length::new(x)).collect();
    g.throughput(Throughput::Elements(len as u64));
    g.bench_with_input(BenchmarkId::new("f64", len), &raw, |b, raw| {
      b.iter(|| black_box(raw).iter().sum::<f64>());
    });
    g.bench_with_input(BenchmarkId::new("quantity", len), &quantities, |b, quantities| {
      b.iter(|| black_box(quantities).iter().sum::<Length>());
    });
  }
  g.finish();
}

fn vector3(c: &mut Criterion) {
  let a = Vector3::<dims::Length>::new(kpc(8.5), kpc(0.1), pc(20.0));
  let v = Vector3::<dims::Length>::new(m(1.0), m(2.0), m(3.0));
  let dt: Time = yr(1.0);
  let mut g = c.benchmark_group("vector3");
  g.throughput(Throughput::Elements(1));
  g.bench_function("r", |b| b.iter(|| black_box(a).r()));
  g.bench_function("theta_phi", |b| b.iter(|| (black_box(a).theta(), black_box(a).phi())));
  g.bench_function("cross", |b| b.iter(|| black_box(a).cross(black_box(v))));
  g.bench_function("scale_by_quantity", |b| b.iter(|| black_box(v) * black_box(dt)));
  g.finish();
}

criterion_group!(baseline,
  baseline_f64,
);

criterion_group!(arithmetic,
  quantity,
  dynamic,
  sum_slice,
);

criterion_group!(geometry,
  vector3,
);

criterion_main!(baseline, arithmetic, geometry);

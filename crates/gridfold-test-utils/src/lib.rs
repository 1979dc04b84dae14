//! Synthetic datasets for Gridfold tests.
//!
//! Every generator is seeded (ChaCha8), so tests built on them are
//! reproducible across runs and platforms.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridfold_core::{Dataset, Table, Value};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A 1-D series: coordinate `t` = 1..=n, payload `v` = 1.0 everywhere
/// except a single spike.
///
/// The classic windowed-mean fixture: windows near the spike report a
/// much larger mean than windows away from it.
pub fn spike_series(n: usize, spike_at: usize, spike_value: f64) -> Dataset {
    let mut t = Table::with_columns(["t", "v"]);
    for i in 1..=n {
        let v = if i == spike_at { spike_value } else { 1.0 };
        t.push_values(vec![Value::Float(i as f64), Value::Float(v)])
            .expect("fixed layout");
    }
    Dataset::new(t, ["t"]).expect("t exists")
}

/// A 2-D point cloud uniform over `[0, extent]^2`, with a payload column
/// `w` uniform over `[0, 1)`.
pub fn uniform_cloud(seed: u64, n: usize, extent: f64) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut t = Table::with_columns(["x", "y", "w"]);
    for _ in 0..n {
        t.push_values(vec![
            Value::Float(rng.gen_range(0.0..extent)),
            Value::Float(rng.gen_range(0.0..extent)),
            Value::Float(rng.gen::<f64>()),
        ])
        .expect("fixed layout");
    }
    Dataset::new(t, ["x", "y"]).expect("x and y exist")
}

/// A 2-D annular point cloud: radii uniform in `[r_inner, r_outer]`,
/// angles uniform, centered at the origin, payload `w` uniform.
///
/// The hole makes this the canonical fixture for alpha-shape cropping:
/// a convex-hull boundary would cover the hole, an alpha shape with a
/// tight enough alpha does not.
pub fn ring_cloud(seed: u64, n: usize, r_inner: f64, r_outer: f64) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut t = Table::with_columns(["x", "y", "w"]);
    for _ in 0..n {
        let r = rng.gen_range(r_inner..=r_outer);
        let theta = rng.gen_range(0.0..std::f64::consts::TAU);
        t.push_values(vec![
            Value::Float(r * theta.cos()),
            Value::Float(r * theta.sin()),
            Value::Float(rng.gen::<f64>()),
        ])
        .expect("fixed layout");
    }
    Dataset::new(t, ["x", "y"]).expect("x and y exist")
}

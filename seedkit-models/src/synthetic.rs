//! Synthetic datasets standing in for an external data provider
use rand;
use rand_xorshift;

use self::rand::distributions::{Distribution, Normal};
use self::rand::SeedableRng;
use self::rand_xorshift::XorShiftRng;

#[derive(Clone, Debug)]
/// A generated classification set: inputs, one-hot targets, and class indexes
pub struct ClassificationData {
    /// One row per example
    pub inputs: Vec<Vec<f32>>,
    /// One-hot encoding of `labels`
    pub targets: Vec<Vec<f32>>,
    /// Class indexes
    pub labels: Vec<usize>,
}

/// Gaussian blobs, one cluster per class centered on a scaled axis.  Requires
/// `classes <= dim` so the centers stay orthogonal
pub fn gaussian_blobs(
    classes: usize,
    per_class: usize,
    dim: usize,
    spread: f64,
    seed: u64,
) -> ClassificationData {
    assert!(classes > 0 && classes <= dim);
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let n = Normal::new(0.0, spread);

    let mut inputs = Vec::with_capacity(classes * per_class);
    let mut targets = Vec::with_capacity(classes * per_class);
    let mut labels = Vec::with_capacity(classes * per_class);
    for class in 0..classes {
        for _ in 0..per_class {
            let mut x = vec![0f32; dim];
            x[class] = 2.0;
            for v in x.iter_mut() {
                *v += n.sample(&mut rng) as f32;
            }
            let mut t = vec![0f32; classes];
            t[class] = 1.0;

            inputs.push(x);
            targets.push(t);
            labels.push(class);
        }
    }
    ClassificationData {
        inputs: inputs,
        targets: targets,
        labels: labels,
    }
}

/// Noisy samples of `y = w * x + b` over `[-2, 2)`
pub fn noisy_line(w: f32, b: f32, points: usize, noise: f64, seed: u64) -> (Vec<f32>, Vec<f32>) {
    assert!(points > 0);
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let n = Normal::new(0.0, noise);

    let mut xs = Vec::with_capacity(points);
    let mut ys = Vec::with_capacity(points);
    for i in 0..points {
        let x = i as f32 / points as f32 * 4.0 - 2.0;
        xs.push(x);
        ys.push(w * x + b + n.sample(&mut rng) as f32);
    }
    (xs, ys)
}

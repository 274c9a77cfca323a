//! Helper functions for elementwise slice arithmetic
use crate::datatypes::Element;

/// Adds `v2` into `v1` in place
pub fn inplace_sum<E: Element>(v1: &mut [E], v2: &[E]) -> () {
    assert_eq!(v1.len(), v2.len());
    for i in 0..v1.len() {
        v1[i] += v2[i];
    }
}

/// Subtracts `v2` from `v1` in place
pub fn inplace_sub<E: Element>(v1: &mut [E], v2: &[E]) -> () {
    assert_eq!(v1.len(), v2.len());
    for i in 0..v1.len() {
        v1[i] -= v2[i];
    }
}

/// Adds `alpha * x` into `out` in place
pub fn axpy<E: Element>(alpha: E, x: &[E], out: &mut [E]) -> () {
    assert_eq!(x.len(), out.len());
    for i in 0..x.len() {
        out[i] += alpha * x[i];
    }
}

/// Scales `v1` by `s` in place
pub fn scale<E: Element>(v1: &mut [E], s: E) -> () {
    for e in v1.iter_mut() {
        *e = *e * s;
    }
}

/// Dot product
pub fn dot<E: Element>(v1: &[E], v2: &[E]) -> E {
    assert_eq!(v1.len(), v2.len());
    let mut sum = E::zero();
    for i in 0..v1.len() {
        sum += v1[i] * v2[i];
    }
    sum
}

#[cfg(test)]
mod test_intrinsics {
    use super::*;

    #[test]
    fn test_inplace() {
        let mut v = vec![1f32, 2., 3.];
        inplace_sum(&mut v, &[1., 1., 1.]);
        assert_eq!(v, vec![2f32, 3., 4.]);
        inplace_sub(&mut v, &[1., 1., 1.]);
        assert_eq!(v, vec![1f32, 2., 3.]);
    }

    #[test]
    fn test_axpy_scale_dot() {
        let mut out = vec![1f64, 1., 1.];
        axpy(2f64, &[1., 2., 3.], &mut out);
        assert_eq!(out, vec![3f64, 5., 7.]);

        scale(&mut out, 2f64);
        assert_eq!(out, vec![6f64, 10., 14.]);

        assert_eq!(dot(&[1f32, 2., 3.], &[4., 5., 6.]), 32f32);
    }
}

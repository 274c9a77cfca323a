use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

#[cfg(test)]
/// Method to compare two element slices up to an epsilon. This is for testing
pub fn cmp_eps_vec<E: Element>(l: &[E], r: &[E], eps: f64) -> bool {
    assert_eq!(l.len(), r.len());
    for i in 0..l.len() {
        if (l[i].to_f64() - r[i].to_f64()).abs() > eps {
            return false;
        }
    }
    true
}

/// Trait for the floating point types a tensor can hold
pub trait Element:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + 'static
{
    /// Additive identity
    fn zero() -> Self;

    /// Converts from an f64, narrowing if needed
    fn from_f64(v: f64) -> Self;

    /// Widens to an f64
    fn to_f64(self) -> f64;
}

impl Element for f32 {
    #[inline]
    fn zero() -> Self {
        0f32
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Element for f64 {
    #[inline]
    fn zero() -> Self {
        0f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Defines a dense tensor: a shape and a flat value buffer.  A rank-0 shape
/// holds a single scalar value
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct Tensor<E> {
    /// Dimensions, outermost first
    shape: Vec<usize>,
    /// Values in row-major order
    values: Vec<E>,
}

impl<E: Element> Tensor<E> {
    /// Creates an all-zero tensor of the given shape
    pub fn zeros(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Tensor {
            shape: shape.to_vec(),
            values: vec![E::zero(); len],
        }
    }

    /// Creates a tensor from existing values
    pub fn from_values(shape: &[usize], values: Vec<E>) -> Self {
        let len: usize = shape.iter().product();
        assert_eq!(len, values.len());
        Tensor {
            shape: shape.to_vec(),
            values: values,
        }
    }

    /// The shape of the tensor
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Read access to the flat values
    #[inline]
    pub fn values(&self) -> &[E] {
        &self.values
    }

    /// Write access to the flat values
    #[inline]
    pub fn values_mut(&mut self) -> &mut [E] {
        &mut self.values
    }

    /// Reads a rank-0 or single-element tensor as a scalar
    pub fn scalar(&self) -> E {
        assert_eq!(self.values.len(), 1);
        self.values[0]
    }
}

#[cfg(test)]
mod test_datatypes {
    use super::*;

    #[test]
    fn test_zeros_shapes() {
        let t: Tensor<f32> = Tensor::zeros(&[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.len(), 6);
        assert!(t.values().iter().all(|v| *v == 0f32));

        // A rank-0 tensor is a scalar
        let s: Tensor<f64> = Tensor::zeros(&[]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.scalar(), 0f64);
    }

    #[test]
    fn test_from_values() {
        let t = Tensor::from_values(&[2, 2], vec![1f32, 2., 3., 4.]);
        assert_eq!(t.values(), &[1f32, 2., 3., 4.]);
        assert!(cmp_eps_vec(t.values(), &[1f32, 2., 3., 4.], 1e-7));
    }
}

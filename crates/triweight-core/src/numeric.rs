//! Generic numeric trait for sample positions
//!
//! Samples may arrive as floats or integers (e.g. integer timestamps). Kernel
//! evaluation always happens in the associated floating-point type.

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;

/// Base trait for numeric types that can be smoothed
pub trait Numeric: Pod + Copy + PartialOrd + Debug + Send + Sync {
    /// Type used for kernel evaluation
    type Float: Float + Debug + Send + Sync + 'static;

    /// Convert to floating point for kernel evaluation
    fn to_float(self) -> Self::Float;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

impl Numeric for f64 {
    type Float = f64;

    #[inline]
    fn to_float(self) -> f64 {
        self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Numeric for i32 {
    type Float = f64;

    #[inline]
    fn to_float(self) -> f64 {
        self as f64
    }

    fn is_finite(&self) -> bool {
        true // Integers are always finite
    }
}

impl Numeric for u32 {
    type Float = f64;

    #[inline]
    fn to_float(self) -> f64 {
        self as f64
    }

    fn is_finite(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion() {
        assert_eq!(7i32.to_float(), 7.0f64);
        assert_eq!(3u32.to_float(), 3.0f64);
        assert!(i32::MIN.is_finite());
    }

    #[test]
    fn test_float_finiteness() {
        assert!(1.5f64.is_finite());
        assert!(!Numeric::is_finite(&f64::NAN));
        assert!(!Numeric::is_finite(&f32::INFINITY));
    }
}

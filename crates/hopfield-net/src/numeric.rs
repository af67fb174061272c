//! Numeric bound for weights, biases and energies.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Scalar type usable as a connection weight or node bias.
///
/// Blanket-implemented for every type with the required arithmetic, which
/// covers `i32`, `i64`, `f32` and `f64`. `Default::default()` is taken as
/// zero. Energy sums never divide, so integer weights give exact energies.
///
/// # Panics
///
/// Energies are accumulated with the type's own `+=`. For integer types a
/// sum that leaves the type's range panics in debug builds and wraps in
/// release builds. An energy can reach `n(n-1)/2 · max|w| + n · max|b|`,
/// so prefer `i64` over `i32` for large networks or large weights.
pub trait Weight:
    Copy
    + Default
    + PartialEq
    + Debug
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    /// Whether this value equals zero.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl<T> Weight for T where
    T: Copy
        + Default
        + PartialEq
        + Debug
        + Add<Output = T>
        + AddAssign
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
{
}

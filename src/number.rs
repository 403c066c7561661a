use num_traits::{AsPrimitive, CheckedNeg, CheckedRem, PrimInt, Signed};
use std::{fmt, hash::Hash};

/// Everything a fraction needs from its underlying integer type. This is
/// implemented for every signed primitive integer, from i8 to i128.
pub trait FractionNumber:
    PrimInt
    + Signed
    + CheckedNeg
    + CheckedRem
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Hash
    + fmt::Debug
    + fmt::Display
{
}
impl<T> FractionNumber for T
where
    T: PrimInt
        + Signed
        + CheckedNeg
        + CheckedRem
        + AsPrimitive<f32>
        + AsPrimitive<f64>
        + Hash
        + fmt::Debug
        + fmt::Display
{
}

/// Find the greatest common divisor of two numbers using the Euclidean
/// algorithm. The sign of the result follows the remainder operator, so it may
/// be negative. gcd(0, 0) is 0.
pub fn gcd<T: FractionNumber>(mut x: T, mut y: T) -> T {
    // gcd(12, 18) = gcd(18, 12) = gcd(12, 6) = gcd(6, 0) = 6
    while !y.is_zero() {
        let rem = x % y;
        x = y;
        y = rem;
    }
    x
}
/// Same as `gcd`, but returns None on overflow (only possible when dividing
/// the minimum value by -1)
pub fn checked_gcd<T: FractionNumber>(mut x: T, mut y: T) -> Option<T> {
    while !y.is_zero() {
        let rem = x.checked_rem(&y)?;
        x = y;
        y = rem;
    }
    Some(x)
}

/// Find the least common multiple of two numbers. lcm(0, 0) is 0.
pub fn lcm<T: FractionNumber>(x: T, y: T) -> T {
    let divisor = gcd(x, y);
    if divisor.is_zero() {
        return T::zero();
    }
    // Divide before multiplying so the intermediate value stays small
    x / divisor * y
}
/// Same as `lcm`, but returns None on overflow
pub fn checked_lcm<T: FractionNumber>(x: T, y: T) -> Option<T> {
    let divisor = checked_gcd(x, y)?;
    if divisor.is_zero() {
        return Some(T::zero());
    }
    x.checked_div(&divisor)?.checked_mul(&y)
}

/// Divide both parts by their greatest common divisor. The denominator keeps
/// whatever sign it had, so callers still need to move the sign to the
/// numerator. With a zero denominator only the sign of the numerator is kept:
/// `(5, 0)` becomes `(1, 0)` and `(0, 0)` stays `(0, 0)`.
pub fn reduce<T: FractionNumber>(numerator: T, denominator: T) -> (T, T) {
    if denominator.is_zero() {
        return (numerator.signum(), T::zero());
    }
    let mut divisor = gcd(numerator, denominator);
    if divisor.is_negative() {
        divisor = -divisor;
    }
    (numerator / divisor, denominator / divisor)
}
/// Same as `reduce`, but returns None on overflow
pub fn checked_reduce<T: FractionNumber>(numerator: T, denominator: T) -> Option<(T, T)> {
    if denominator.is_zero() {
        return Some((numerator.signum(), T::zero()));
    }
    let mut divisor = checked_gcd(numerator, denominator)?;
    if divisor.is_negative() {
        divisor = divisor.checked_neg()?;
    }
    Some((numerator.checked_div(&divisor)?, denominator.checked_div(&divisor)?))
}

use crate::{Fraction, FractionNumber};
use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

impl<T: FractionNumber> Fraction<T> {
    /// Addition where NaN or an infinity is involved. Returns None if both
    /// sides are finite and the regular path should be taken. Signs are
    /// compared against zero, so two infinities (or an infinity and a finite
    /// value) with different signs result in NaN.
    fn add_non_finite(self, other: Self) -> Option<Self> {
        if self.is_nan() || other.is_nan() {
            return Some(Self::nan());
        }
        if self.is_finite() && other.is_finite() {
            return None;
        }
        Some(match (self.numerator.is_negative(), other.numerator.is_negative()) {
            (false, false) => Self::infinity(),
            (true, true) => Self::neg_infinity(),
            _ => Self::nan(),
        })
    }
    fn add_fraction(self, other: Self) -> Self {
        self.add_non_finite(other).unwrap_or_else(|| {
            let (left, right, denominator) = self.common_denominator(other);
            Self::new(left + right, denominator)
        })
    }
    /// Multiplies crosswise first (a/d * c/b) so each half gets reduced
    /// before the numbers grow. Special values need no extra handling: the
    /// zero denominators carry through to the right infinity or NaN.
    fn mul_fraction(self, other: Self) -> Self {
        let left = Self::new(self.numerator, other.denominator);
        let right = Self::new(other.numerator, self.denominator);
        Self::new(left.numerator * right.numerator, left.denominator * right.denominator)
    }
    fn sub_fraction(self, other: Self) -> Self {
        self.add_fraction(-other)
    }
    fn div_fraction(self, other: Self) -> Self {
        self.mul_fraction(other.recip())
    }

    /// Calculates addition, but returns None on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        if let Some(result) = self.add_non_finite(other) {
            return Some(result);
        }
        let (left, right, denominator) = self.checked_common_denominator(other)?;
        Self::checked_new(left.checked_add(&right)?, denominator)
    }
    /// Calculates subtraction, but returns None on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.checked_add(other.checked_neg()?)
    }
    /// Calculates multiplication, but returns None on overflow
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let left = Self::checked_new(self.numerator, other.denominator)?;
        let right = Self::checked_new(other.numerator, self.denominator)?;
        Self::checked_new(
            left.numerator.checked_mul(&right.numerator)?,
            left.denominator.checked_mul(&right.denominator)?,
        )
    }
    /// Calculates division, but returns None on overflow. Dividing by zero
    /// is not an error, it results in infinity or NaN.
    pub fn checked_div(self, other: Self) -> Option<Self> {
        self.checked_mul(other.checked_recip()?)
    }
    /// Calculates negation, but returns None on overflow
    pub fn checked_neg(self) -> Option<Self> {
        Self::checked_new(self.numerator.checked_neg()?, self.denominator)
    }
}

impl<T: FractionNumber> Neg for Fraction<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.numerator, self.denominator)
    }
}

macro_rules! impl_op {
    ($($trait:ident $fn:ident = $call:ident),* --- $($trait_assign:ident $fn_assign:ident = ($op_assign:tt)),*) => {
        $(impl<T: FractionNumber, R: Into<Fraction<T>>> $trait<R> for Fraction<T> {
            type Output = Self;
            fn $fn(self, other: R) -> Self {
                self.$call(other.into())
            }
        })*
        $(impl<T: FractionNumber, R: Into<Fraction<T>>> $trait_assign<R> for Fraction<T> {
            fn $fn_assign(&mut self, other: R) {
                *self = *self $op_assign other;
            }
        })*
    }
}
impl_op! {
    Add add = add_fraction,
    Sub sub = sub_fraction,
    Mul mul = mul_fraction,
    Div div = div_fraction
    ---
    AddAssign add_assign = (+),
    SubAssign sub_assign = (-),
    MulAssign mul_assign = (*),
    DivAssign div_assign = (/)
}

impl<T: FractionNumber> Sum for Fraction<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |total, value| total + value)
    }
}
impl<'a, T: FractionNumber> Sum<&'a Fraction<T>> for Fraction<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
impl<T: FractionNumber> Product for Fraction<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::from_integer(T::one()), |total, value| total * value)
    }
}
impl<'a, T: FractionNumber> Product<&'a Fraction<T>> for Fraction<T> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

use crate::number::{self, FractionNumber};
use std::{cmp::Ordering, fmt};

/// A number stored in fraction form instead of actually calculating the
/// result. This ensures (10/3) * 3 is actually 10 and not 9.99998.
///
/// Every instance is kept in lowest terms with a non-negative denominator, so
/// the sign always lives in the numerator. A denominator of 0 marks the
/// special values: n/0 is positive or negative infinity depending on the sign
/// of n, and 0/0 is NaN.
///
/// Equality is structural: NaN is equal to NaN, even though `partial_cmp`
/// refuses to order it against anything. Use `total_cmp` when sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction<T> {
    pub(crate) numerator: T,
    pub(crate) denominator: T,
}

/// A fraction of two 32-bit integers
pub type Fraction32 = Fraction<i32>;
/// A fraction of two 64-bit integers
pub type Fraction64 = Fraction<i64>;

impl<T: FractionNumber> Default for Fraction<T> {
    fn default() -> Self {
        Self::from_integer(T::zero())
    }
}
impl<T: FractionNumber> Fraction<T> {
    /// Construct a new fraction, reduced to lowest terms. A denominator of 0
    /// is allowed and results in infinity or NaN.
    pub fn new(numerator: T, denominator: T) -> Self {
        let (numerator, denominator) = number::reduce(numerator, denominator);
        Self::sign_to_numerator(numerator, denominator)
    }
    /// Same as `new`, but returns None on overflow
    pub fn checked_new(numerator: T, denominator: T) -> Option<Self> {
        let (mut numerator, mut denominator) = number::checked_reduce(numerator, denominator)?;
        if denominator.is_negative() {
            numerator = numerator.checked_neg()?;
            denominator = denominator.checked_neg()?;
        }
        Some(Self { numerator, denominator })
    }
    /// Construct a whole number fraction, value/1
    pub fn from_integer(value: T) -> Self {
        Self::new(value, T::one())
    }
    /// Makes sure the denominator is a positive number by moving the sign to
    /// the numerator or cancelling the signs out. -1/-2 becomes 1/2, 1/-2
    /// becomes -1/2.
    fn sign_to_numerator(mut numerator: T, mut denominator: T) -> Self {
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self { numerator, denominator }
    }

    /// Positive infinity, 1/0
    pub fn infinity() -> Self {
        Self::new(T::one(), T::zero())
    }
    /// Negative infinity, -1/0
    pub fn neg_infinity() -> Self {
        Self::new(-T::one(), T::zero())
    }
    /// Not a number, 0/0
    pub fn nan() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Return the numerator
    pub fn numerator(self) -> T {
        self.numerator
    }
    /// Return the (always non-negative) denominator
    pub fn denominator(self) -> T {
        self.denominator
    }

    /// Returns true if this is neither infinite nor NaN
    pub fn is_finite(self) -> bool {
        !self.denominator.is_zero()
    }
    /// Returns true if this is positive or negative infinity
    pub fn is_infinite(self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }
    /// Returns true if this is NaN
    pub fn is_nan(self) -> bool {
        self.denominator.is_zero() && self.numerator.is_zero()
    }
    /// Returns true if this is a finite whole number
    pub fn is_integer(self) -> bool {
        self.denominator.is_one()
    }

    /// Same thing as in mathematics taking the power of -1.
    /// 0 becomes infinity, infinity becomes 0 and NaN stays NaN.
    pub fn recip(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }
    /// Same as `recip`, but returns None on overflow
    pub fn checked_recip(self) -> Option<Self> {
        Self::checked_new(self.denominator, self.numerator)
    }
    /// Return this value with a positive sign, no matter if it's negative or
    /// already positive. -inf becomes +inf.
    pub fn abs(self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }
    /// Raise this fraction to an integer power by repeated squaring. Negative
    /// exponents use the reciprocal. Anything to the power of 0 is 1, even NaN.
    pub fn pow(self, exponent: i32) -> Self {
        let mut base = self;
        let mut remaining = exponent.unsigned_abs();
        let mut result = Self::from_integer(T::one());
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result * base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base * base;
            }
        }
        if exponent < 0 {
            result.recip()
        } else {
            result
        }
    }

    /// Scale both numerators so they share the lowest possible denominator.
    /// Returns the two new numerators and the shared denominator. Only
    /// meaningful for finite fractions.
    pub(crate) fn common_denominator(self, other: Self) -> (T, T, T) {
        let denominator = number::lcm(self.denominator, other.denominator);
        let left = self.numerator * (denominator / self.denominator);
        let right = other.numerator * (denominator / other.denominator);
        (left, right, denominator)
    }
    /// Same as `common_denominator`, but returns None on overflow
    pub(crate) fn checked_common_denominator(self, other: Self) -> Option<(T, T, T)> {
        let denominator = number::checked_lcm(self.denominator, other.denominator)?;
        let left = self.numerator.checked_mul(&denominator.checked_div(&self.denominator)?)?;
        let right = other.numerator.checked_mul(&denominator.checked_div(&other.denominator)?)?;
        Some((left, right, denominator))
    }

    /// Order infinities around the finite values. Returns None when both are
    /// finite and a real comparison is needed.
    fn cmp_non_finite(self, other: Self) -> Option<Ordering> {
        match (self.is_finite(), other.is_finite()) {
            (true, true) => None,
            (false, false) => Some(self.numerator.cmp(&other.numerator)),
            (false, true) => Some(if self.numerator.is_positive() {
                Ordering::Greater
            } else {
                Ordering::Less
            }),
            (true, false) => Some(if other.numerator.is_positive() {
                Ordering::Less
            } else {
                Ordering::Greater
            }),
        }
    }
    /// A total ordering, usable for sorting: -inf < finite values < +inf <
    /// NaN. NaN is equal to itself, which agrees with `==`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.cmp_non_finite(*other).unwrap_or_else(|| {
                let (me, other, _) = self.common_denominator(*other);
                me.cmp(&other)
            }),
        }
    }
}
impl<T: FractionNumber> PartialOrd for Fraction<T> {
    /// Like floating point numbers, NaN can't be ordered against anything,
    /// not even itself.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.total_cmp(other))
    }
    // `<=` and `>=` are built from `==`, so NaN <= NaN holds even though the
    // two are unordered.
    fn le(&self, other: &Self) -> bool {
        self < other || self == other
    }
    fn ge(&self, other: &Self) -> bool {
        self > other || self == other
    }
}
impl<T: FractionNumber> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.is_infinite() {
            return write!(f, "{}Inf", if self.numerator.is_negative() { "-" } else { "+" });
        }
        if !self.numerator.is_negative() && f.sign_plus() {
            write!(f, "+")?;
        }
        if let Some(precision) = f.precision() {
            return write!(f, "{:.*}", precision, self.to_f64());
        }
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

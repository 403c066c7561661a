use crate::{Fraction, FractionNumber};
use num_traits::{AsPrimitive, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Inv, One, Pow, ToPrimitive, Zero};

impl<T: FractionNumber> Fraction<T> {
    /// Calculates the decimal result of this fraction. Infinities and NaN
    /// turn into their floating point equivalents.
    pub fn to_f64(self) -> f64 {
        let numerator = AsPrimitive::<f64>::as_(self.numerator);
        let denominator = AsPrimitive::<f64>::as_(self.denominator);
        numerator / denominator
    }
    /// Same as `to_f64` but with single precision
    pub fn to_f32(self) -> f32 {
        let numerator = AsPrimitive::<f32>::as_(self.numerator);
        let denominator = AsPrimitive::<f32>::as_(self.denominator);
        numerator / denominator
    }
    /// The whole part, rounded towards zero. None for infinity and NaN.
    fn trunc_integer(self) -> Option<T> {
        if self.is_finite() {
            Some(self.numerator / self.denominator)
        } else {
            None
        }
    }
}

impl<T: FractionNumber> From<T> for Fraction<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}
impl<T: FractionNumber> From<(T, T)> for Fraction<T> {
    fn from((numerator, denominator): (T, T)) -> Self {
        Self::new(numerator, denominator)
    }
}
impl<T: FractionNumber> From<Fraction<T>> for f64 {
    fn from(fraction: Fraction<T>) -> Self {
        fraction.to_f64()
    }
}
impl<T: FractionNumber> From<Fraction<T>> for f32 {
    fn from(fraction: Fraction<T>) -> Self {
        fraction.to_f32()
    }
}

impl<T: FractionNumber> Zero for Fraction<T> {
    fn zero() -> Self {
        Self::from_integer(T::zero())
    }
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
impl<T: FractionNumber> One for Fraction<T> {
    fn one() -> Self {
        Self::from_integer(T::one())
    }
}
impl<T: FractionNumber> Inv for Fraction<T> {
    type Output = Self;

    fn inv(self) -> Self::Output {
        self.recip()
    }
}
impl<T: FractionNumber> Pow<i32> for Fraction<T> {
    type Output = Self;

    fn pow(self, exponent: i32) -> Self::Output {
        Fraction::pow(self, exponent)
    }
}

impl<T: FractionNumber> ToPrimitive for Fraction<T> {
    fn to_i64(&self) -> Option<i64> {
        self.trunc_integer()?.to_i64()
    }
    fn to_i128(&self) -> Option<i128> {
        self.trunc_integer()?.to_i128()
    }
    fn to_u64(&self) -> Option<u64> {
        self.trunc_integer()?.to_u64()
    }
    fn to_u128(&self) -> Option<u128> {
        self.trunc_integer()?.to_u128()
    }
    fn to_f32(&self) -> Option<f32> {
        Some(Fraction::to_f32(*self))
    }
    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(*self))
    }
}

macro_rules! impl_checked {
    ($($trait:ident $fn:ident),*) => {
        $(impl<T: FractionNumber> $trait for Fraction<T> {
            fn $fn(&self, other: &Self) -> Option<Self> {
                Fraction::$fn(*self, *other)
            }
        })*
    }
}
impl_checked! {
    CheckedAdd checked_add,
    CheckedSub checked_sub,
    CheckedMul checked_mul,
    CheckedDiv checked_div
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Fraction<T>
    where T: FractionNumber + serde::Serialize
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        serde::Serialize::serialize(&(&self.numerator, &self.denominator), serializer)
    }
}
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Fraction<T>
    where T: FractionNumber + serde::Deserialize<'de>
{
    /// Goes through the normal constructor, so the result is always reduced.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de>
    {
        let (numerator, denominator): (T, T) = serde::Deserialize::deserialize(deserializer)?;
        Fraction::checked_new(numerator, denominator)
            .ok_or_else(|| serde::de::Error::custom("fraction does not fit its integer type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_float() {
        assert_eq!(Fraction::new(1, 2).to_f64(), 0.5);
        assert_eq!(Fraction::new(-3, 4).to_f32(), -0.75);
        assert_eq!(f64::from(Fraction::new(1, 4)), 0.25);
        assert_eq!(f32::from(Fraction::new(5, 2)), 2.5);
        let third: f64 = Fraction::new(1, 3).into();
        assert!((third - 1.0 / 3.0).abs() < std::f64::EPSILON);
    }

    #[test]
    fn special_to_float() {
        assert_eq!(Fraction::<i32>::infinity().to_f64(), std::f64::INFINITY);
        assert_eq!(Fraction::<i32>::neg_infinity().to_f64(), std::f64::NEG_INFINITY);
        assert!(Fraction::<i32>::nan().to_f64().is_nan());
        assert_eq!(Fraction::<i64>::infinity().to_f32(), std::f32::INFINITY);
        assert!(Fraction::<i64>::nan().to_f32().is_nan());
    }

    #[test]
    fn from() {
        assert_eq!(Fraction::from(5), Fraction::new(5, 1));
        assert_eq!(Fraction::<i32>::from((6, -8)), Fraction::new(-3, 4));
        assert_eq!(Fraction::<i32>::from((0, 0)), Fraction::nan());
        let five: Fraction<i64> = 5.into();
        assert!(five.is_integer());
    }

    #[test]
    fn to_primitive() {
        assert_eq!(ToPrimitive::to_i64(&Fraction::new(7, 2)), Some(3));
        assert_eq!(ToPrimitive::to_i64(&Fraction::new(-7, 2)), Some(-3));
        assert_eq!(ToPrimitive::to_u64(&Fraction::new(-7, 2)), None);
        assert_eq!(ToPrimitive::to_u8(&Fraction::new(600, 1)), None);
        assert_eq!(ToPrimitive::to_i128(&Fraction::<i128>::new(std::i128::MAX, 1)), Some(std::i128::MAX));
        assert_eq!(ToPrimitive::to_i64(&Fraction::<i32>::infinity()), None);
        assert_eq!(ToPrimitive::to_i64(&Fraction::<i32>::nan()), None);
        assert_eq!(ToPrimitive::to_f64(&Fraction::new(1, 8)), Some(0.125));
    }

    #[test]
    fn zero_one() {
        assert!(Fraction::<i32>::zero().is_zero());
        assert!(Fraction::new(0, -4).is_zero());
        assert!(!Fraction::<i32>::nan().is_zero());
        assert!(Fraction::<i32>::one().is_one());
        assert!(Fraction::new(3, 3).is_one());
        assert_eq!(Fraction::<i32>::default(), Fraction::zero());
    }

    #[test]
    fn inv_pow() {
        assert_eq!(Fraction::new(2, 7).inv(), Fraction::new(7, 2));
        assert_eq!(Pow::pow(Fraction::new(2, 3), 2), Fraction::new(4, 9));
        assert_eq!(Pow::pow(Fraction::new(2, 3), -2), Fraction::new(9, 4));
    }

    #[test]
    fn checked_traits() {
        fn total<N: CheckedAdd + Zero + Copy>(values: &[N]) -> Option<N> {
            values.iter().try_fold(N::zero(), |sum, value| sum.checked_add(value))
        }
        assert_eq!(total(&[Fraction::new(1, 2), Fraction::new(1, 3)]), Some(Fraction::new(5, 6)));
        assert_eq!(total(&[Fraction::from(std::i32::MAX), Fraction::from(1)]), None);
        assert_eq!(CheckedMul::checked_mul(&Fraction::new(2, 3), &Fraction::new(3, 2)), Some(Fraction::one()));
        assert_eq!(CheckedDiv::checked_div(&Fraction::new(2, 3), &Fraction::zero()), Some(Fraction::infinity()));
        assert_eq!(CheckedSub::checked_sub(&Fraction::from(std::i32::MIN), &Fraction::one()), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        assert_eq!(serde_json::to_string(&Fraction::new(2, -4)).unwrap(), "[-1,2]");
        assert_eq!(serde_json::to_string(&Fraction::<i32>::nan()).unwrap(), "[0,0]");
        let half: Fraction<i32> = serde_json::from_str("[3,6]").unwrap();
        assert_eq!(half, Fraction::new(1, 2));
        let inf: Fraction<i32> = serde_json::from_str("[7,0]").unwrap();
        assert_eq!(inf, Fraction::infinity());
        assert!(serde_json::from_str::<Fraction<i32>>("[1,-2147483648]").is_err());
        assert!(serde_json::from_str::<Fraction<i32>>("[1]").is_err());
    }
}

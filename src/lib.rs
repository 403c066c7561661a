//! Exact fractions over any signed primitive integer. Division by zero is
//! not an error: it produces infinity or NaN, encoded with a denominator of 0.
//!
//! ```rust
//! use fractional::Fraction;
//!
//! let quarter = Fraction::new(1, 4);
//! assert_eq!(quarter + Fraction::new(1, 2), Fraction::new(3, 4));
//! assert_eq!(quarter * 10, Fraction::new(5, 2));
//! assert_eq!(quarter / 0, Fraction::infinity());
//! assert_eq!(Fraction::new(2, 6).to_string(), "1/3");
//! ```

mod convert;
mod fraction;
mod number;
mod ops;
mod stride;

pub use self::fraction::*;
pub use self::number::*;
pub use self::stride::*;

use crate::{Fraction, FractionNumber};
use std::iter::FusedIterator;

impl<T: FractionNumber> Fraction<T> {
    /// The value that has to be added to `self` to reach `other`
    pub fn distance_to(self, other: Self) -> Self {
        other - self
    }
    /// Walk from `start` towards `end` in steps of `step`, not including
    /// `end` itself. A negative step walks downwards.
    ///
    /// The iterator is empty if the step is zero, or if any of the three
    /// values is infinite or NaN.
    ///
    /// ```rust
    /// use fractional::Fraction;
    ///
    /// let steps: Vec<_> = Fraction::stride(Fraction::new(0, 1), Fraction::new(1, 1), Fraction::new(1, 4)).collect();
    /// assert_eq!(steps, [Fraction::new(0, 1), Fraction::new(1, 4), Fraction::new(1, 2), Fraction::new(3, 4)]);
    /// ```
    pub fn stride(start: Self, end: Self, step: Self) -> Stride<T> {
        let done = step.numerator.is_zero() || !(start.is_finite() && end.is_finite() && step.is_finite());
        Stride { next: start, end, step, done }
    }
}

/// Iterator created by `Fraction::stride`
#[derive(Clone, Debug)]
pub struct Stride<T> {
    next: Fraction<T>,
    end: Fraction<T>,
    step: Fraction<T>,
    done: bool,
}
impl<T: FractionNumber> Iterator for Stride<T> {
    type Item = Fraction<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.next;
        let in_range = if self.step.numerator.is_positive() {
            current < self.end
        } else {
            current > self.end
        };
        if !in_range {
            self.done = true;
            return None;
        }
        self.next = current + self.step;
        Some(current)
    }
}
impl<T: FractionNumber> FusedIterator for Stride<T> {}

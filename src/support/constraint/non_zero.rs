use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero (not equal to zero).
///
/// The slope of an exponential conductivity curve uses this constraint,
/// since its average divides by the slope.
///
/// # Examples
///
/// ```
/// use twine_insulation::support::constraint::{Constrained, NonZero};
///
/// let x = Constrained::<_, NonZero>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// let b = NonZero::new(-2.0e-3).unwrap();
/// assert_eq!(b.into_inner(), -2.0e-3);
///
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        let one = Constrained::<_, NonZero>::new(1).unwrap();
        assert_eq!(one.into_inner(), 1);
        assert!(NonZero::new(-1).is_ok());
        assert!(NonZero::new(0).is_err());
    }

    #[test]
    fn floats() {
        assert!(NonZero::new(-3.5).is_ok());
        assert!(NonZero::new(1e-300).is_ok());
        assert_eq!(NonZero::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(NonZero::new(-0.0), Err(ConstraintError::Zero));
        assert_eq!(NonZero::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}

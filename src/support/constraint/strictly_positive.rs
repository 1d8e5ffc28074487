use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive.
///
/// Every duct dimension and fitting angle must be strictly positive: a zero
/// diameter has no area and a zero divergence angle divides by `sin(0)`.
///
/// # Examples
///
/// ```
/// use duct_resistance::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Length, length::millimeter};
///
/// assert!(StrictlyPositive::new(Length::new::<millimeter>(150.0)).is_ok());
/// assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, VolumeRate},
        length::millimeter,
        volume_rate::cubic_meter_per_hour,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn lengths() {
        let diameter = StrictlyPositive::new(Length::new::<millimeter>(250.0)).unwrap();
        assert_eq!(diameter.as_ref().get::<millimeter>(), 250.0);

        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(-1.0)).is_err());
    }

    #[test]
    fn volume_rates() {
        let flow = VolumeRate::new::<cubic_meter_per_hour>(1000.0);
        assert!(StrictlyPositive::new(flow).is_ok());

        let flow = VolumeRate::new::<cubic_meter_per_hour>(0.0);
        assert!(StrictlyPositive::new(flow).is_err());
    }
}

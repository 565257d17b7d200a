//! Discount percentage type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error returned when a discount percentage is outside `[0, 100]`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("discount must be between 0 and 100, got {0}")]
pub struct DiscountError(pub Decimal);

/// A discount percentage in the range `[0, 100]`.
///
/// Construction validates the range; a value outside it is rejected rather
/// than clamped, so a ledger total can never go negative or exceed its
/// subtotal.
///
/// ## Examples
///
/// ```
/// use atelier_core::DiscountPercent;
/// use rust_decimal::Decimal;
///
/// let ten = DiscountPercent::new(Decimal::from(10)).unwrap();
/// assert_eq!(ten.multiplier(), Decimal::new(9, 1)); // 0.9
///
/// assert!(DiscountPercent::new(Decimal::from(101)).is_err());
/// assert!(DiscountPercent::new(Decimal::from(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DiscountPercent(Decimal);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a discount percentage, validating the `[0, 100]` range.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError`] if `percent` is negative or above 100.
    pub fn new(percent: Decimal) -> Result<Self, DiscountError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(DiscountError(percent));
        }
        Ok(Self(percent))
    }

    /// Get the underlying percentage value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// The factor a subtotal is multiplied by: `1 - percent / 100`.
    #[must_use]
    pub fn multiplier(&self) -> Decimal {
        Decimal::ONE - self.0 / Decimal::ONE_HUNDRED
    }

    /// Whether this is a zero discount.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<Decimal> for DiscountPercent {
    type Error = DiscountError;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<DiscountPercent> for Decimal {
    fn from(discount: DiscountPercent) -> Self {
        discount.0
    }
}

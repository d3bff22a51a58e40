use error_stack::Report;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::AsRefln;

use crate::KernelError;

/// Deserialization goes through [`MoviePrice::new`], so stored prices are never negative.
#[derive(Debug, Clone, Copy, Eq, PartialEq, AsRefln, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct MoviePrice(Decimal);

impl MoviePrice {
    pub fn new(price: impl Into<Decimal>) -> error_stack::Result<Self, KernelError> {
        let price = price.into();
        if price.is_sign_negative() && !price.is_zero() {
            return Err(Report::new(KernelError::ForbiddenOperation)
                .attach_printable(format!("Price per day can't be negative: {price}")));
        }
        Ok(Self(price))
    }
}

impl TryFrom<Decimal> for MoviePrice {
    type Error = Report<KernelError>;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MoviePrice> for Decimal {
    fn from(value: MoviePrice) -> Self {
        value.0
    }
}

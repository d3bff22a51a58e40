use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct LateFee(Decimal);

impl LateFee {
    pub fn new(fee: impl Into<Decimal>) -> Self {
        Self(fee.into())
    }
}

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Contracted rental duration in whole days.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RentalDays(i64);

impl RentalDays {
    pub fn new(days: impl Into<i64>) -> Self {
        Self(days.into())
    }
}

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Copies owned by the store.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct MovieStock(u32);

impl MovieStock {
    pub fn new(stock: impl Into<u32>) -> Self {
        Self(stock.into())
    }
}

/// Copies currently checked out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RentedCopies(u32);

impl RentedCopies {
    pub fn new(rented: impl Into<u32>) -> Self {
        Self(rented.into())
    }
}

mod id;
mod name;
mod price;
mod stock;

pub use self::{id::*, name::*, price::*, stock::*};
use crate::entity::Entity;
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Movie {
    id: Option<MovieId>,
    name: MovieName,
    stock: MovieStock,
    rented: RentedCopies,
    price_per_day: MoviePrice,
}

impl Movie {
    pub fn new(
        id: Option<MovieId>,
        name: MovieName,
        stock: MovieStock,
        rented: RentedCopies,
        price_per_day: MoviePrice,
    ) -> error_stack::Result<Self, KernelError> {
        if rented.as_ref() > stock.as_ref() {
            return Err(Report::new(KernelError::ForbiddenOperation).attach_printable(format!(
                "{} has {} copies rented but only {} in stock",
                name.as_ref(),
                rented.as_ref(),
                stock.as_ref()
            )));
        }
        Ok(Self {
            id,
            name,
            stock,
            rented,
            price_per_day,
        })
    }

    /// Copies that can be rented right now.
    pub fn available(&self) -> u32 {
        self.stock.as_ref().saturating_sub(*self.rented.as_ref())
    }

    pub fn is_available(&self) -> bool {
        self.available() > 0
    }

    pub fn add_to_inventory(&mut self, copies: u32) {
        self.stock = MovieStock::new(self.stock.as_ref().saturating_add(copies));
    }

    /// Removing more copies than owned leaves the stock at zero.
    pub fn remove_from_inventory(&mut self, copies: u32) {
        self.stock = MovieStock::new(self.stock.as_ref().saturating_sub(copies));
    }

    pub fn rent_movie(&mut self) -> error_stack::Result<(), KernelError> {
        if self.rented.as_ref() >= self.stock.as_ref() {
            return Err(Report::new(KernelError::OutOfStock)
                .attach_printable(format!("{} is out of stock", self.name.as_ref())));
        }
        self.rented = RentedCopies::new(self.rented.as_ref() + 1);
        Ok(())
    }

    pub fn return_movie(&mut self) -> error_stack::Result<(), KernelError> {
        if *self.rented.as_ref() == 0 {
            return Err(Report::new(KernelError::Operation).attach_printable(format!(
                "All copies of {} are already returned",
                self.name.as_ref()
            )));
        }
        self.rented = RentedCopies::new(self.rented.as_ref() - 1);
        Ok(())
    }

    pub fn get_rent_price(&self, days: i64) -> error_stack::Result<Decimal, KernelError> {
        if days <= 0 {
            return Err(Report::new(KernelError::ForbiddenOperation)
                .attach_printable(format!("Rent days must be greater than zero, got {days}")));
        }
        self.price_per_day
            .as_ref()
            .checked_mul(Decimal::from(days))
            .ok_or_else(|| {
                Report::new(KernelError::ForbiddenOperation).attach_printable(format!(
                    "Rent price of {} for {days} days is out of range",
                    self.name.as_ref()
                ))
            })
    }

    /// Copies are still out with customers.
    pub fn is_rented(&self) -> bool {
        *self.rented.as_ref() > 0
    }
}

impl Entity for Movie {
    type Id = MovieId;

    fn entity_id(&self) -> Option<Self::Id> {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }
}

mod id;
mod name;

pub use self::{id::*, name::*};
use crate::entity::{Entity, Rental};
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Customer {
    id: Option<CustomerId>,
    name: CustomerName,
    lastname: CustomerLastName,
    rental_history: Vec<Rental>,
    active_rental: Option<Rental>,
}

impl Customer {
    pub fn new(id: Option<CustomerId>, name: CustomerName, lastname: CustomerLastName) -> Self {
        Self {
            id,
            name,
            lastname,
            rental_history: Vec::new(),
            active_rental: None,
        }
    }

    pub fn set_active_rental(&mut self, rental: Rental) -> error_stack::Result<(), KernelError> {
        if self.active_rental.is_some() {
            return Err(Report::new(KernelError::ForbiddenOperation)
                .attach_printable("Customer can't have a second active rental"));
        }
        self.active_rental = Some(rental);
        Ok(())
    }

    /// Clears the active rental and hands it back. History is left untouched.
    pub fn finish_active_rental(&mut self) -> error_stack::Result<Rental, KernelError> {
        self.active_rental.take().ok_or_else(|| {
            Report::new(KernelError::Operation).attach_printable("Customer has no active rental")
        })
    }

    pub fn record_rental(&mut self, rental: Rental) {
        self.rental_history.push(rental);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn entity_id(&self) -> Option<Self::Id> {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }
}

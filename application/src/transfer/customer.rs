use error_stack::Report;

use kernel::prelude::entity::{Customer, DestructCustomer};
use kernel::KernelError;

use crate::transfer::RentalDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CustomerDto {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub active_rental: Option<RentalDto>,
    pub rental_history: Vec<RentalDto>,
}

impl TryFrom<Customer> for CustomerDto {
    type Error = Report<KernelError>;
    fn try_from(value: Customer) -> Result<Self, Self::Error> {
        let DestructCustomer {
            id,
            name,
            lastname,
            rental_history,
            active_rental,
        } = value.into_destruct();
        let id = id.ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable("Customer has not been stored yet")
        })?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            lastname: lastname.into(),
            active_rental: active_rental.map(RentalDto::try_from).transpose()?,
            rental_history: rental_history
                .into_iter()
                .map(RentalDto::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

pub struct GetCustomerDto {
    pub id: i64,
}

pub struct CreateCustomerDto {
    pub id: Option<i64>,
    pub name: String,
    pub lastname: String,
}

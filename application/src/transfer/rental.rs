use error_stack::Report;
use rust_decimal::Decimal;
use time::OffsetDateTime;

use kernel::prelude::entity::{DestructRental, Entity, Rental};
use kernel::KernelError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentalDto {
    pub movie_ids: Vec<i64>,
    pub customer_id: i64,
    pub rent_date: OffsetDateTime,
    pub days: i64,
    pub return_date: Option<OffsetDateTime>,
    pub amount: Decimal,
    pub late_fee: Decimal,
    pub total_amount: Decimal,
}

impl TryFrom<Rental> for RentalDto {
    type Error = Report<KernelError>;
    fn try_from(value: Rental) -> Result<Self, Self::Error> {
        let amount = value.amount()?;
        let total_amount = value.total_amount()?;
        let DestructRental {
            movies,
            customer,
            rent_date,
            days,
            return_date,
            late_fee,
        } = value.into_destruct();
        let movie_ids = movies
            .iter()
            .map(|movie| {
                movie.entity_id().map(i64::from).ok_or_else(|| {
                    Report::new(KernelError::NotFound)
                        .attach_printable("Rented movie has not been stored yet")
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            movie_ids,
            customer_id: customer.into(),
            rent_date: rent_date.into(),
            days: days.into(),
            return_date: return_date.map(OffsetDateTime::from),
            amount,
            late_fee: late_fee.into(),
            total_amount,
        })
    }
}

pub struct CreateRentalDto {
    pub customer_id: i64,
    pub movie_ids: Vec<i64>,
    pub days: i64,
    pub rent_date: OffsetDateTime,
}

pub struct ReturnRentalDto {
    pub customer_id: i64,
    pub return_date: OffsetDateTime,
}

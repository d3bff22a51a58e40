mod days;
mod late_fee;
mod rented_at;
mod returned_at;

pub use self::{days::*, late_fee::*, rented_at::*, returned_at::*};
use crate::entity::{CustomerId, Movie};
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::References;

/// The movies are snapshots taken when the rental starts. Catalog entries stay in their repository.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Rental {
    movies: Vec<Movie>,
    customer: CustomerId,
    rent_date: RentedAt,
    days: RentalDays,
    return_date: Option<ReturnedAt>,
    late_fee: LateFee,
}

impl Rental {
    pub fn new(
        movies: Vec<Movie>,
        customer: CustomerId,
        rent_date: RentedAt,
        days: RentalDays,
    ) -> error_stack::Result<Self, KernelError> {
        if movies.is_empty() {
            return Err(Report::new(KernelError::ForbiddenOperation)
                .attach_printable("A rental needs at least one movie"));
        }
        if *days.as_ref() <= 0 {
            return Err(Report::new(KernelError::ForbiddenOperation).attach_printable(format!(
                "Rent days must be greater than zero, got {}",
                days.as_ref()
            )));
        }
        let rental = Self {
            movies,
            customer,
            rent_date,
            days,
            return_date: None,
            late_fee: LateFee::default(),
        };
        rental.amount()?;
        Ok(rental)
    }

    pub fn returned(&self) -> bool {
        self.return_date.is_some()
    }

    pub fn amount(&self) -> error_stack::Result<Decimal, KernelError> {
        self.price_for(*self.days.as_ref())
    }

    pub fn total_amount(&self) -> error_stack::Result<Decimal, KernelError> {
        self.total_with(*self.late_fee.as_ref())
    }

    /// Closes the rental. Returning later than the contracted days charges every whole
    /// extra day at each movie's daily price. Less than a full day late is free.
    pub fn return_movies(&mut self, return_date: ReturnedAt) -> error_stack::Result<(), KernelError> {
        if self.returned() {
            return Err(Report::new(KernelError::Operation)
                .attach_printable("Rental has already been returned"));
        }
        let rented_at = *self.rent_date.as_ref();
        let returned_at = *return_date.as_ref();
        if returned_at < rented_at {
            return Err(Report::new(KernelError::Operation).attach_printable(format!(
                "Return date {returned_at} is earlier than rent date {rented_at}"
            )));
        }

        let elapsed_days = (returned_at - rented_at).whole_days();
        let late_fee = match elapsed_days.saturating_sub(*self.days.as_ref()) {
            extra_days if extra_days > 0 => self.price_for(extra_days)?,
            _ => Decimal::ZERO,
        };

        self.total_with(late_fee)?;

        self.late_fee = LateFee::new(late_fee);
        self.return_date = Some(return_date);
        Ok(())
    }

    fn total_with(&self, late_fee: Decimal) -> error_stack::Result<Decimal, KernelError> {
        let amount = self.amount()?;
        amount.checked_add(late_fee).ok_or_else(|| {
            Report::new(KernelError::ForbiddenOperation)
                .attach_printable(format!("Total of {amount} plus {late_fee} late fee is out of range"))
        })
    }

    fn price_for(&self, days: i64) -> error_stack::Result<Decimal, KernelError> {
        self.movies.iter().try_fold(Decimal::ZERO, |total, movie| {
            total
                .checked_add(movie.get_rent_price(days)?)
                .ok_or_else(|| {
                    Report::new(KernelError::ForbiddenOperation)
                        .attach_printable(format!("Rent price for {days} days is out of range"))
                })
        })
    }
}

use error_stack::Report;
use rust_decimal::Decimal;

use kernel::prelude::entity::{DestructMovie, Movie};
use kernel::KernelError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MovieDto {
    pub id: i64,
    pub name: String,
    pub stock: u32,
    pub rented: u32,
    pub available: u32,
    pub price_per_day: Decimal,
}

impl TryFrom<Movie> for MovieDto {
    type Error = Report<KernelError>;
    fn try_from(value: Movie) -> Result<Self, Self::Error> {
        let available = value.available();
        let DestructMovie {
            id,
            name,
            stock,
            rented,
            price_per_day,
        } = value.into_destruct();
        let id = id.ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable("Movie has not been stored yet")
        })?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            stock: stock.into(),
            rented: rented.into(),
            available,
            price_per_day: price_per_day.into(),
        })
    }
}

pub struct GetMovieDto {
    pub id: i64,
}

/// Leave `id` empty to let the repository pick one.
pub struct CreateMovieDto {
    pub id: Option<i64>,
    pub name: String,
    pub stock: u32,
    pub price_per_day: Decimal,
}

pub struct DeleteMovieDto {
    pub id: i64,
}

pub struct UpdateInventoryDto {
    pub id: i64,
    pub copies: u32,
}

use rust_decimal_macros::dec;
use time::macros::datetime;

use crate::entity::{
    Customer, CustomerId, CustomerLastName, CustomerName, Entity, Movie, MovieId, MovieName,
    MoviePrice, MovieStock, Rental, RentalDays, RentedAt, RentedCopies,
};

pub fn movie(i: i64) -> Movie {
    Movie::new(
        Some(MovieId::new(i)),
        MovieName::new(format!("test movie {i}")),
        MovieStock::new(5u32),
        RentedCopies::default(),
        MoviePrice::new(dec!(2.99)).unwrap(),
    )
    .unwrap()
}

pub fn movies(number: i64) -> Vec<Movie> {
    (1..=number).map(movie).collect()
}

pub fn customer(i: i64) -> Customer {
    Customer::new(
        Some(CustomerId::new(i)),
        CustomerName::new(format!("test{i}")),
        CustomerLastName::new(format!("customer{i}")),
    )
}

pub fn rental(customer: &Customer, days: i64) -> Rental {
    Rental::new(
        vec![movie(1)],
        customer.entity_id().unwrap(),
        RentedAt::new(datetime!(2024-03-01 10:00 UTC)),
        RentalDays::new(days),
    )
    .unwrap()
}

pub use self::{customer::*, movie::*, rental::*};

mod customer;
mod movie;
mod rental;

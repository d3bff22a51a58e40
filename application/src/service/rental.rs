use error_stack::Report;
use tracing::{info, warn};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::repository::{
    DependOnCustomerRepository, DependOnMovieRepository, Repository,
};
use kernel::prelude::entity::{
    CustomerId, Entity, MovieId, Rental, RentalDays, RentedAt, ReturnedAt,
};
use kernel::KernelError;

use crate::service::customer::find_customer;
use crate::service::movie::find_movie;
use crate::transfer::{CreateRentalDto, RentalDto, ReturnRentalDto};

/// Checks out one copy of every requested movie and makes the rental the customer's active one.
/// Nothing is stored unless every step succeeds.
#[async_trait::async_trait]
pub trait RentMoviesService:
    'static + Sync + Send + DependOnMovieRepository + DependOnCustomerRepository
{
    async fn rent_movies(&self, dto: CreateRentalDto) -> error_stack::Result<RentalDto, KernelError> {
        let customer_id = CustomerId::new(dto.customer_id);
        let rental = async move {
            let mut connection = self.database_connection().transact().await?;
            let mut customer = find_customer(self, &mut connection, &customer_id).await?;

            let mut movies = Vec::with_capacity(dto.movie_ids.len());
            for movie_id in dto.movie_ids {
                let mut movie = find_movie(self, &mut connection, &MovieId::new(movie_id)).await?;
                movie.rent_movie()?;
                self.movie_repository()
                    .add(&mut connection, movie.clone())
                    .await?;
                movies.push(movie);
            }

            let rental = Rental::new(
                movies,
                customer_id,
                RentedAt::new(dto.rent_date),
                RentalDays::new(dto.days),
            )?;
            customer.set_active_rental(rental.clone())?;
            self.customer_repository()
                .add(&mut connection, customer)
                .await?;
            connection.commit().await?;
            Ok::<_, Report<KernelError>>(rental)
        }
        .await
        .inspect_err(|report| {
            warn!("Rental for customer {} rejected: {report:?}", customer_id.as_ref())
        })?;

        info!(
            "Customer {} rented {} movies for {} days",
            customer_id.as_ref(),
            rental.movies().len(),
            rental.days().as_ref()
        );
        RentalDto::try_from(rental)
    }
}

impl<T> RentMoviesService for T where T: DependOnMovieRepository + DependOnCustomerRepository {}

/// Closes the customer's active rental, prices any late days, puts the copies back on the
/// shelf and files the rental into the customer's history.
#[async_trait::async_trait]
pub trait ReturnRentalService:
    'static + Sync + Send + DependOnMovieRepository + DependOnCustomerRepository
{
    async fn return_rental(&self, dto: ReturnRentalDto) -> error_stack::Result<RentalDto, KernelError> {
        let customer_id = CustomerId::new(dto.customer_id);
        let rental = async move {
            let mut connection = self.database_connection().transact().await?;
            let mut customer = find_customer(self, &mut connection, &customer_id).await?;

            let mut rental = customer.finish_active_rental()?;
            rental.return_movies(ReturnedAt::new(dto.return_date))?;

            for rented in rental.movies() {
                let id = rented.entity_id().ok_or_else(|| {
                    Report::new(KernelError::NotFound)
                        .attach_printable("Rented movie has not been stored yet")
                })?;
                let mut movie = find_movie(self, &mut connection, &id).await?;
                movie.return_movie()?;
                self.movie_repository().add(&mut connection, movie).await?;
            }

            customer.record_rental(rental.clone());
            self.customer_repository()
                .add(&mut connection, customer)
                .await?;
            connection.commit().await?;
            Ok::<_, Report<KernelError>>(rental)
        }
        .await
        .inspect_err(|report| {
            warn!("Return for customer {} rejected: {report:?}", customer_id.as_ref())
        })?;

        info!(
            "Customer {} returned {} movies, late fee {}",
            customer_id.as_ref(),
            rental.movies().len(),
            rental.late_fee().as_ref()
        );
        RentalDto::try_from(rental)
    }
}

impl<T> ReturnRentalService for T where T: DependOnMovieRepository + DependOnCustomerRepository {}

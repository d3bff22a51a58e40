use std::collections::HashMap;

use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Customer, Entity, Movie};
use crate::KernelError;

/// Filter passed to [`Repository::all`].
pub type Condition<T> = dyn Fn(&T) -> bool + Sync + Send;

#[async_trait::async_trait]
pub trait Repository<T: Entity>: 'static + Sync + Send {
    type Transaction: Transaction;

    async fn all(
        &self,
        con: &mut Self::Transaction,
        condition: Option<&Condition<T>>,
    ) -> error_stack::Result<HashMap<T::Id, T>, KernelError>;

    async fn get(
        &self,
        con: &mut Self::Transaction,
        id: &T::Id,
    ) -> error_stack::Result<Option<T>, KernelError>;

    /// Inserts or overwrites `entity`, assigning a fresh id first when it has none.
    async fn add(
        &self,
        con: &mut Self::Transaction,
        entity: T,
    ) -> error_stack::Result<T::Id, KernelError>;

    /// Fails with [`KernelError::NotFound`] when nothing is stored under the entity's id.
    async fn remove(
        &self,
        con: &mut Self::Transaction,
        entity: &T,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnMovieRepository: 'static + Sync + Send + DependOnDatabaseConnection {
    type MovieRepository: Repository<
        Movie,
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn movie_repository(&self) -> &Self::MovieRepository;
}

pub trait DependOnCustomerRepository: 'static + Sync + Send + DependOnDatabaseConnection {
    type CustomerRepository: Repository<
        Customer,
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn customer_repository(&self) -> &Self::CustomerRepository;
}

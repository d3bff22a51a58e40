use std::ops::Deref;
use std::sync::Arc;

use driver::database::{
    InMemoryCustomerRepository, InMemoryDatabase, InMemoryMovieRepository, MemoryStore, Table,
};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::repository::{DependOnCustomerRepository, DependOnMovieRepository};
use kernel::prelude::entity::{Customer, Movie};
use vodca::References;

/// Wires the in-memory database into every service of the `application` crate.
#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::default())
    }

    /// Starts with `movies` on the shelf; ids missing from the seed are assigned in order.
    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        Self::with_store(MemoryStore::new(
            movies.into_iter().collect(),
            Table::default(),
        ))
    }

    pub fn with_catalog(
        movies: impl IntoIterator<Item = Movie>,
        customers: impl IntoIterator<Item = Customer>,
    ) -> Self {
        Self::with_store(MemoryStore::new(
            movies.into_iter().collect(),
            customers.into_iter().collect(),
        ))
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self(Arc::new(Handler::init(store)))
    }
}

impl Default for AppModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
    movies: InMemoryMovieRepository,
    customers: InMemoryCustomerRepository,
}

impl Handler {
    pub fn init(store: MemoryStore) -> Self {
        Self {
            database: InMemoryDatabase::new(store),
            movies: InMemoryMovieRepository::default(),
            customers: InMemoryCustomerRepository::default(),
        }
    }
}

impl DependOnDatabaseConnection for AppModule {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self.0.database()
    }
}

impl DependOnMovieRepository for AppModule {
    type MovieRepository = InMemoryMovieRepository;
    fn movie_repository(&self) -> &Self::MovieRepository {
        self.0.movies()
    }
}

impl DependOnCustomerRepository for AppModule {
    type CustomerRepository = InMemoryCustomerRepository;
    fn customer_repository(&self) -> &Self::CustomerRepository {
        self.0.customers()
    }
}

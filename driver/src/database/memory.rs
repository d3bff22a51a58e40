use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::{OwnedRwLockWriteGuard, RwLock};
use tracing::debug;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::repository::{Condition, Repository};
use kernel::prelude::entity::{Customer, Entity, Movie};
use kernel::KernelError;

pub use self::table::*;

mod customer;
mod movie;
mod table;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    movies: Table<Movie>,
    customers: Table<Customer>,
}

impl MemoryStore {
    pub fn new(movies: Table<Movie>, customers: Table<Customer>) -> Self {
        Self { movies, customers }
    }

    pub fn movies(&self) -> &Table<Movie> {
        &self.movies
    }

    pub fn customers(&self) -> &Table<Customer> {
        &self.customers
    }
}

/// Entities that have a table inside [`MemoryStore`].
pub trait StoredInMemory: Entity {
    fn table(store: &MemoryStore) -> &Table<Self>;
    fn table_mut(store: &mut MemoryStore) -> &mut Table<Self>;
}

/// Process-local store. Writers are serialized by the lock; each transaction works on a copy
/// that replaces the shared state on commit.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryDatabase {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Committed state. Awaiting this while holding a transaction on the same database deadlocks.
    pub async fn snapshot(&self) -> MemoryStore {
        self.store.read().await.clone()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = self.store.clone().write_owned().await;
        let working = guard.clone();
        Ok(InMemoryTransaction { guard, working })
    }
}

pub struct InMemoryTransaction {
    guard: OwnedRwLockWriteGuard<MemoryStore>,
    working: MemoryStore,
}

impl InMemoryTransaction {
    fn store(&self) -> &MemoryStore {
        &self.working
    }

    fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.working
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self { mut guard, working } = self;
        *guard = working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        debug!("Discarding uncommitted changes");
        Ok(())
    }
}

pub struct InMemoryRepository<T>(PhantomData<T>);

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

pub type InMemoryMovieRepository = InMemoryRepository<Movie>;
pub type InMemoryCustomerRepository = InMemoryRepository<Customer>;

#[async_trait::async_trait]
impl<T: StoredInMemory> Repository<T> for InMemoryRepository<T> {
    type Transaction = InMemoryTransaction;

    async fn all(
        &self,
        con: &mut InMemoryTransaction,
        condition: Option<&Condition<T>>,
    ) -> error_stack::Result<HashMap<T::Id, T>, KernelError> {
        Ok(T::table(con.store()).all(condition))
    }

    async fn get(
        &self,
        con: &mut InMemoryTransaction,
        id: &T::Id,
    ) -> error_stack::Result<Option<T>, KernelError> {
        Ok(T::table(con.store()).get(id).cloned())
    }

    async fn add(
        &self,
        con: &mut InMemoryTransaction,
        entity: T,
    ) -> error_stack::Result<T::Id, KernelError> {
        Ok(T::table_mut(con.store_mut()).add(entity))
    }

    async fn remove(
        &self,
        con: &mut InMemoryTransaction,
        entity: &T,
    ) -> error_stack::Result<(), KernelError> {
        T::table_mut(con.store_mut()).remove(entity).map(|_| ())
    }
}

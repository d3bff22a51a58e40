use kernel::prelude::entity::Customer;

use crate::database::memory::{MemoryStore, StoredInMemory, Table};

impl StoredInMemory for Customer {
    fn table(store: &MemoryStore) -> &Table<Self> {
        &store.customers
    }

    fn table_mut(store: &mut MemoryStore) -> &mut Table<Self> {
        &mut store.customers
    }
}

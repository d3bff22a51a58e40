use kernel::prelude::entity::Movie;

use crate::database::memory::{MemoryStore, StoredInMemory, Table};

impl StoredInMemory for Movie {
    fn table(store: &MemoryStore) -> &Table<Self> {
        &store.movies
    }

    fn table_mut(store: &mut MemoryStore) -> &mut Table<Self> {
        &mut store.movies
    }
}

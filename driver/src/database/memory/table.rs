use std::collections::HashMap;

use error_stack::Report;
use tracing::debug;

use kernel::interface::repository::Condition;
use kernel::prelude::entity::{Entity, Identifier};
use kernel::KernelError;

/// Id-keyed rows of a single entity type.
#[derive(Debug, Clone)]
pub struct Table<T: Entity> {
    rows: HashMap<T::Id, T>,
}

impl<T: Entity> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<T: Entity> Table<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn all(&self, condition: Option<&Condition<T>>) -> HashMap<T::Id, T> {
        self.rows
            .iter()
            .filter(|&(_, entity)| condition.map_or(true, |condition| condition(entity)))
            .map(|(id, entity)| (*id, entity.clone()))
            .collect()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn add(&mut self, mut entity: T) -> T::Id {
        let id = match entity.entity_id() {
            Some(id) => id,
            None => {
                let id = self.generate_id();
                debug!("Assigned id {id:?}");
                entity.assign_id(id);
                id
            }
        };
        self.rows.insert(id, entity);
        id
    }

    pub fn remove(&mut self, entity: &T) -> error_stack::Result<T, KernelError> {
        let id = entity.entity_id().ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable("Entity has no id to remove")
        })?;
        let removed = self.rows.remove(&id).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("No entity with id {id:?}"))
        })?;
        debug!("Removed id {id:?}");
        Ok(removed)
    }

    // Starts at len + 1 and walks upward past ids taken by explicit inserts.
    fn generate_id(&self) -> T::Id {
        let mut raw = self.rows.len() as i64 + 1;
        while self.rows.contains_key(&T::Id::from_raw(raw)) {
            raw += 1;
        }
        T::Id::from_raw(raw)
    }
}

impl<T: Entity> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::default();
        iter.into_iter().for_each(|entity| {
            table.add(entity);
        });
        table
    }
}

use std::fmt::Debug;
use std::hash::Hash;

/// Integer key of a stored entity.
pub trait Identifier: 'static + Debug + Copy + Eq + Hash + Sync + Send + AsRef<i64> {
    fn from_raw(raw: i64) -> Self;
}

/// Anything a repository can store. The id stays empty until the repository assigns one.
pub trait Entity: 'static + Debug + Clone + Sync + Send {
    type Id: Identifier;
    fn entity_id(&self) -> Option<Self::Id>;
    fn assign_id(&mut self, id: Self::Id);
}

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::Identifier;

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct MovieId(i64);

impl MovieId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

impl Identifier for MovieId {
    fn from_raw(raw: i64) -> Self {
        Self::new(raw)
    }
}

pub use crate::error::*;

mod database;
mod entity;
mod error;
mod repository;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod database {
        pub use crate::database::*;
    }
    pub mod repository {
        pub use crate::repository::*;
    }
}

pub use self::handler::*;

mod handler;
pub mod logging;

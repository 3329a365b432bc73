pub mod db;
pub mod history;
pub mod models;
pub mod posts;
pub mod schema;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

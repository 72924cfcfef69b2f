mod categories;
pub mod db;
mod items;
pub mod models;
mod schema;

pub use db::{Database, DatabaseError};

pub mod catalog;
pub mod connection;
pub mod table;

pub use connection::Database;

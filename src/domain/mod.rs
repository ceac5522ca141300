pub mod aggregate;
pub mod filter;
pub mod listing;
pub mod map;
pub mod review;

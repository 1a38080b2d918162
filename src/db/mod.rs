pub mod connection;
pub mod listings;

pub use connection::{initialize_store, Database};
pub use listings::load_listing_table;

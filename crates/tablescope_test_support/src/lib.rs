pub mod fixtures;

pub use fixtures::{column, sample_catalog, table, table_in};

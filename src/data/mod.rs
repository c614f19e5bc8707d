//! Data module - CSV loading and the in-memory launch table

mod loader;
mod table;

pub use loader::{load_csv, LoaderError};
pub use table::{LaunchRecord, LaunchTable, PayloadRange, SiteSelection};

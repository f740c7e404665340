// Service exports
pub mod catalog;

pub use catalog::{DishCatalog, CatalogError, LoadOptions};

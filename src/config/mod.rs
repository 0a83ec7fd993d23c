mod settings;

pub use settings::{CatalogConfig, Settings};

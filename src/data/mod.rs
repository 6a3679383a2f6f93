//! Data module - CSV loading

mod loader;

pub use loader::DataLoader;

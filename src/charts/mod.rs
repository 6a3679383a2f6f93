//! Charts module - Chart rendering

mod renderer;

pub use renderer::{ChartRenderer, MAX_MEMORY};

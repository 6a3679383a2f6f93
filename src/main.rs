//! gc_plot - GC vs Non-GC memory usage analysis & chart generator
//!
//! Reads memory-usage samples for a garbage-collected run and a
//! non-garbage-collected run from `gc_data.csv`, prints summary statistics
//! for both series, and saves a comparison chart to `gc_plot.png`.

mod charts;
mod data;
mod stats;

use anyhow::Result;
use std::path::Path;

use charts::ChartRenderer;
use data::DataLoader;
use stats::StatsCalculator;

const DATA_PATH: &str = "gc_data.csv";
const PLOT_PATH: &str = "gc_plot.png";

fn main() -> Result<()> {
    let mut loader = DataLoader::new();
    loader.load_csv(DATA_PATH)?;

    let gc = loader.column_values("gc")?;
    let non_gc = loader.column_values("non_gc")?;

    let gc_stats = StatsCalculator::compute(&gc);
    let non_gc_stats = StatsCalculator::compute(&non_gc);

    println!("{}", gc_stats.summary_line("GC"));
    println!("{}", non_gc_stats.summary_line("Non-GC"));

    ChartRenderer::render(&gc, &non_gc, Path::new(PLOT_PATH))?;

    Ok(())
}

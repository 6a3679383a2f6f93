//! Static Chart Renderer
//! Draws the GC vs Non-GC comparison chart to a PNG with plotters.
//!
//! Layout:
//! 1. GC series: red line + circular markers
//! 2. Non-GC series: blue line + circular markers
//! 3. Green horizontal line at the memory budget
//! 4. Axis labels ("Instruction" / "Memory usage") and a legend

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// Fixed memory-budget threshold drawn as a horizontal reference line.
pub const MAX_MEMORY: f64 = 10.0;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const MARKER_RADIUS: i32 = 3;

pub struct ChartRenderer;

impl ChartRenderer {
    /// Render both series plus the threshold line and save to `path`.
    ///
    /// Any existing file at `path` is overwritten.
    pub fn render(gc: &[f64], non_gc: &[f64], path: &Path) -> Result<()> {
        let gc_points = Self::index_points(gc);
        let non_gc_points = Self::index_points(non_gc);

        // X spans the longer series; Y leaves headroom above the taller of
        // the data and the budget line so the threshold stays visible.
        let x_max = gc.len().max(non_gc.len()).saturating_sub(1).max(1) as f64;
        let data_max = gc
            .iter()
            .chain(non_gc.iter())
            .copied()
            .fold(MAX_MEMORY, f64::max);
        let y_max = data_max * 1.15;

        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Instruction")
            .y_desc("Memory usage")
            .draw()?;

        chart
            .draw_series(LineSeries::new(gc_points.iter().copied(), &RED))?
            .label("GC")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &RED));
        chart.draw_series(
            gc_points
                .iter()
                .map(|&p| Circle::new(p, MARKER_RADIUS, RED.filled())),
        )?;

        chart
            .draw_series(LineSeries::new(non_gc_points.iter().copied(), &BLUE))?
            .label("Non-GC")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &BLUE));
        chart.draw_series(
            non_gc_points
                .iter()
                .map(|&p| Circle::new(p, MARKER_RADIUS, BLUE.filled())),
        )?;

        chart
            .draw_series(LineSeries::new(
                [(0.0, MAX_MEMORY), (x_max, MAX_MEMORY)],
                &GREEN,
            ))?
            .label("Max memory")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &GREEN));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// Pair each sample with its row index as the x coordinate.
    fn index_points(values: &[f64]) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }
}

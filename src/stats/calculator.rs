//! Statistics Calculator Module
//! Handles descriptive statistics for a memory-usage series.

/// Summary statistics for a single series.
#[derive(Debug, Clone)]
pub struct SeriesStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub max: f64,
}

impl Default for SeriesStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std_dev: f64::NAN,
            max: f64::NAN,
        }
    }
}

impl SeriesStats {
    /// Render the fixed one-line stdout format for this series.
    ///
    /// Mean and std_dev always carry a decimal point (f64 Debug), max prints
    /// as-is; integer samples give an integer max.
    pub fn summary_line(&self, label: &str) -> String {
        format!(
            "{}: mean = {:?}, std_dev = {:?}, max = {}",
            label, self.mean, self.std_dev, self.max
        )
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// Standard deviation uses the population formula (divide by N).
    pub fn compute(values: &[f64]) -> SeriesStats {
        let n = values.len();
        if n == 0 {
            return SeriesStats::default();
        }

        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        let std_dev = variance.sqrt();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        SeriesStats {
            count: n,
            mean,
            std_dev,
            max,
        }
    }
}

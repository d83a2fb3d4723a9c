use std::path::PathBuf;

use crate::color::{ColorError, Palette};

/// Default input files, read in this order.
pub const DEFAULT_INPUTS: [&str; 2] = ["meting1.csv", "meting2.csv"];

/// Constants of one analysis run.
///
/// [`AnalysisConfig::new`] is the only configuration the binary uses; the
/// struct exists so the report and figure builders take their numbers from
/// one place.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Diameter boundary in mm. Values equal to it count as "above".
    pub threshold: f64,
    /// Number of equal-width histogram bins.
    pub histogram_bins: usize,
    pub palette: Palette,
    /// Scatter marker radius in points.
    pub marker_radius: f32,
    pub marker_alpha: f32,
    pub histogram_alpha: f32,
    /// Width of threshold and mean reference lines.
    pub line_width: f32,
    /// Opacity of the mean lines in the scatter chart.
    pub mean_line_alpha: f32,
}

impl AnalysisConfig {
    pub fn new() -> Result<Self, ColorError> {
        Ok(Self {
            threshold: 0.6,
            histogram_bins: 20,
            palette: Palette::from_hex_codes()?,
            marker_radius: 4.0,
            marker_alpha: 0.7,
            histogram_alpha: 0.7,
            line_width: 2.0,
            mean_line_alpha: 0.8,
        })
    }
}

/// Resolve the two input paths: explicit arguments win, otherwise the
/// fixed file names in the working directory.
pub fn input_paths(first: Option<PathBuf>, second: Option<PathBuf>) -> [PathBuf; 2] {
    [
        first.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUTS[0])),
        second.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUTS[1])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_fixed_analysis_constants() {
        let cfg = AnalysisConfig::new().unwrap();
        assert_eq!(cfg.threshold, 0.6);
        assert_eq!(cfg.histogram_bins, 20);
    }

    #[test]
    fn input_paths_fall_back_to_fixed_names() {
        let [a, b] = input_paths(None, None);
        assert_eq!(a, PathBuf::from("meting1.csv"));
        assert_eq!(b, PathBuf::from("meting2.csv"));

        let [a, b] = input_paths(Some("x.csv".into()), None);
        assert_eq!(a, PathBuf::from("x.csv"));
        assert_eq!(b, PathBuf::from("meting2.csv"));
    }
}

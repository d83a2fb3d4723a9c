use crate::chart::surface::ChartSurface;
use crate::report::AnalysisReport;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Everything the viewer shows, computed once before the window opens.
pub struct ViewerState {
    pub scatter: ChartSurface,
    pub histogram: ChartSurface,

    /// Whether the histogram viewport is open.
    pub show_histogram: bool,

    /// One-line summary shown in the top bar.
    pub status: String,
}

impl ViewerState {
    pub fn new(report: &AnalysisReport<'_>, scatter: ChartSurface, histogram: ChartSurface) -> Self {
        Self {
            scatter,
            histogram,
            show_histogram: true,
            status: status_line(report),
        }
    }

    pub fn toggle_histogram(&mut self) {
        self.show_histogram = !self.show_histogram;
    }
}

fn status_line(report: &AnalysisReport<'_>) -> String {
    format!(
        "{} measurements loaded, {} below / {} at or above {} mm",
        report.table.len(),
        report.partition.below.len(),
        report.partition.above.len(),
        report.threshold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::data::model::MeasurementTable;

    #[test]
    fn status_and_histogram_toggle() {
        let table = MeasurementTable::from_pairs([("a", 0.4), ("b", 0.6), ("c", 0.65)]);
        let report = AnalysisReport::build(&table, &AnalysisConfig::new().unwrap());
        let mut state = ViewerState::new(&report, ChartSurface::new(), ChartSurface::new());

        assert_eq!(
            state.status,
            "3 measurements loaded, 1 below / 2 at or above 0.6 mm"
        );
        assert!(state.show_histogram);
        state.toggle_histogram();
        assert!(!state.show_histogram);
    }
}

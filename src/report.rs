use std::fmt;

use crate::config::AnalysisConfig;
use crate::data::filter::Partition;
use crate::data::model::MeasurementTable;
use crate::data::stats::Summary;

// ---------------------------------------------------------------------------
// Analysis report
// ---------------------------------------------------------------------------

/// Everything computed from the combined table in one run.
///
/// `Display` renders the console report. Its wording and decimal places are
/// relied upon by scripts scraping the output, so keep them stable.
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub table: &'a MeasurementTable,
    pub partition: Partition,
    pub below: Option<Summary>,
    pub above: Option<Summary>,
    pub overall: Option<Summary>,
}

impl<'a> AnalysisReport<'a> {
    pub fn build(table: &'a MeasurementTable, config: &AnalysisConfig) -> Self {
        let partition = Partition::split(table, config.threshold);
        let below = Summary::compute(&partition.below_values(table));
        let above = Summary::compute(&partition.above_values(table));
        let overall = Summary::compute(&table.values());
        log::debug!(
            "{} below / {} at or above {} mm",
            partition.below.len(),
            partition.above.len(),
            config.threshold
        );
        Self {
            table,
            partition,
            below,
            above,
            overall,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.partition.threshold
    }
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.threshold();

        writeln!(f, "Combined data:")?;
        writeln!(f, "{}", self.table)?;
        writeln!(f)?;
        writeln!(f, "Total measurements: {}", self.table.len())?;

        // ---- Below threshold ----
        writeln!(f)?;
        writeln!(f, "--- MEASUREMENTS BELOW {t}mm ---")?;
        writeln!(f, "Count: {}", self.partition.below.len())?;
        match &self.below {
            Some(summary) => {
                writeln!(f, "Values:")?;
                for m in self.partition.below_rows(self.table) {
                    writeln!(f, "  {}: {:.3} mm", m.name, m.value)?;
                }
                writeln!(
                    f,
                    "Average of measurements below {t}mm: {:.4} mm",
                    summary.mean
                )?;
            }
            None => writeln!(f, "No measurements below {t}mm")?,
        }

        // ---- At or above threshold ----
        writeln!(f)?;
        writeln!(f, "--- MEASUREMENTS AT OR ABOVE {t}mm ---")?;
        writeln!(f, "Count: {}", self.partition.above.len())?;
        match &self.above {
            Some(summary) => {
                writeln!(
                    f,
                    "Average of measurements at or above {t}mm: {:.4} mm",
                    summary.mean
                )?;
                writeln!(f)?;
                writeln!(f, "Range of values above {t}mm:")?;
                writeln!(f, "  Minimum: {:.3} mm", summary.min)?;
                writeln!(f, "  Maximum: {:.3} mm", summary.max)?;
            }
            None => writeln!(f, "No measurements at or above {t}mm")?,
        }

        // ---- Overall ----
        writeln!(f)?;
        writeln!(f, "--- OVERALL STATISTICS ---")?;
        match &self.overall {
            Some(summary) => {
                writeln!(f, "Overall average: {:.4} mm", summary.mean)?;
                write!(
                    f,
                    "Overall range: {:.3} mm to {:.3} mm",
                    summary.min, summary.max
                )
            }
            None => write!(f, "No measurements"),
        }
    }
}

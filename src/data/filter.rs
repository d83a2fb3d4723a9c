use super::model::{Measurement, MeasurementTable};

// ---------------------------------------------------------------------------
// Threshold partition
// ---------------------------------------------------------------------------

/// Row indices of a table split at a diameter threshold.
///
/// Every row lands in exactly one side: `below` holds `value < threshold`,
/// `above` holds everything else (the threshold itself included).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub threshold: f64,
    pub below: Vec<usize>,
    pub above: Vec<usize>,
}

impl Partition {
    pub fn split(table: &MeasurementTable, threshold: f64) -> Self {
        let (below, above): (Vec<usize>, Vec<usize>) =
            (0..table.len()).partition(|&i| table.rows[i].value < threshold);
        Partition {
            threshold,
            below,
            above,
        }
    }

    /// Rows below the threshold, in table order.
    pub fn below_rows<'a>(&'a self, table: &'a MeasurementTable) -> impl Iterator<Item = &'a Measurement> {
        self.below.iter().map(move |&i| &table.rows[i])
    }

    /// Rows at or above the threshold, in table order.
    pub fn above_rows<'a>(&'a self, table: &'a MeasurementTable) -> impl Iterator<Item = &'a Measurement> {
        self.above.iter().map(move |&i| &table.rows[i])
    }

    pub fn below_values(&self, table: &MeasurementTable) -> Vec<f64> {
        self.below_rows(table).map(|m| m.value).collect()
    }

    pub fn above_values(&self, table: &MeasurementTable) -> Vec<f64> {
        self.above_rows(table).map(|m| m.value).collect()
    }

    pub fn is_below(&self, value: f64) -> bool {
        value < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MeasurementTable {
        MeasurementTable::from_pairs([("a", 0.4), ("b", 0.6), ("c", 0.65), ("d", 0.55)])
    }

    #[test]
    fn threshold_value_counts_as_above() {
        let table = sample();
        let p = Partition::split(&table, 0.6);
        assert_eq!(p.below, vec![0, 3]);
        assert_eq!(p.above, vec![1, 2]);
        assert!(!p.is_below(0.6));
    }

    #[test]
    fn split_is_exhaustive_and_disjoint() {
        let table = MeasurementTable::from_pairs(
            (0..50).map(|i| ("x", 0.3 + i as f64 * 0.01)),
        );
        let p = Partition::split(&table, 0.6);
        assert_eq!(p.below.len() + p.above.len(), table.len());
        assert!(p.below.iter().all(|i| !p.above.contains(i)));
        assert!(p.below_values(&table).iter().all(|&v| v < 0.6));
        assert!(p.above_values(&table).iter().all(|&v| v >= 0.6));
    }

    #[test]
    fn all_above_leaves_below_empty() {
        let table = MeasurementTable::from_pairs([("a", 0.6), ("b", 0.9)]);
        let p = Partition::split(&table, 0.6);
        assert!(p.below.is_empty());
        assert_eq!(p.above_rows(&table).count(), 2);
    }
}

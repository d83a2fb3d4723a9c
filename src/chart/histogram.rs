/// Equal-width histogram of a set of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning their min..max.
    ///
    /// Bins are half-open `[left, right)` except the last, which also holds
    /// the maximum. A zero-width range is widened to `value ± 0.5`; an empty
    /// input bins over `0..1`.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if values.is_empty() {
            (lo, hi) = (0.0, 1.0);
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            let mut idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            // rounding in the division can miss by one bin next to an edge
            if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            } else if idx > 0 && v < edges[idx] {
                idx -= 1;
            }
            counts[idx] += 1;
        }

        log::debug!("histogram: {} values over {lo}..{hi} in {bins} bins", values.len());
        Histogram { edges, counts }
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// `(left_edge, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.edges.iter().copied().zip(self.counts.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_is_counted_once() {
        let values = [0.4, 0.6, 0.65, 0.55, 0.41, 0.62];
        let h = Histogram::compute(&values, 20);
        assert_eq!(h.counts.len(), 20);
        assert_eq!(h.edges.len(), 21);
        assert_eq!(h.counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn max_lands_in_last_bin_min_in_first() {
        let h = Histogram::compute(&[0.0, 1.0, 0.5], 4);
        assert_eq!(h.edges, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(h.counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn single_value_range_is_widened() {
        let h = Histogram::compute(&[1.0, 1.0], 2);
        assert_eq!(h.edges, vec![0.5, 1.0, 1.5]);
        assert_eq!(h.counts, vec![0, 2]);
    }

    #[test]
    fn bins_pair_left_edges_with_counts() {
        let h = Histogram::compute(&[1.0, 2.0], 2);
        let bins: Vec<(f64, usize)> = h.bins().collect();
        assert_eq!(bins, vec![(1.0, 1), (1.5, 1)]);
        assert_eq!(h.bin_width(), 0.5);
    }
}

/// Descriptive statistics of one group of measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// `None` for an empty slice, so callers never divide by zero.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Summary {
            count,
            mean,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn empty_has_no_summary() {
        assert_eq!(Summary::compute(&[]), None);
    }

    #[test]
    fn mean_min_max() {
        let s = Summary::compute(&[0.4, 0.6, 0.65, 0.55]).unwrap();
        assert_eq!(s.count, 4);
        assert!(close(s.mean, 0.55));
        assert_eq!(s.min, 0.4);
        assert_eq!(s.max, 0.65);
    }

    #[test]
    fn overall_mean_is_weighted_mean_of_groups() {
        let below = [0.41, 0.52, 0.58];
        let above = [0.6, 0.61, 0.7, 0.75, 0.9];
        let all: Vec<f64> = below.iter().chain(above.iter()).copied().collect();

        let b = Summary::compute(&below).unwrap();
        let a = Summary::compute(&above).unwrap();
        let o = Summary::compute(&all).unwrap();
        let weighted = (b.mean * b.count as f64 + a.mean * a.count as f64) / o.count as f64;
        assert!(close(o.mean, weighted));
    }
}

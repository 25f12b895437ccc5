pub const NANOS_PER_SEC: f64 = 1e9;

/// Mean and unbiased sample standard deviation, both in nanoseconds.
///
/// Kept in the original nanosecond units; conversion to seconds happens only
/// at the display boundary to avoid losing precision in the reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean_ns: f64,
    pub std_dev_ns: f64,
}

impl SummaryStats {
    pub fn mean_secs(&self) -> f64 {
        self.mean_ns / NANOS_PER_SEC
    }

    pub fn std_dev_secs(&self) -> f64 {
        self.std_dev_ns / NANOS_PER_SEC
    }
}

/// Reduce a sample sequence to its mean and Bessel-corrected standard
/// deviation (divisor n − 1).
///
/// Returns `None` for fewer than 2 samples, where the unbiased estimator is
/// undefined.
pub fn summarize(samples: &[u128]) -> Option<SummaryStats> {
    if samples.len() < 2 {
        return None;
    }

    let n = samples.len() as f64;
    let mean_ns = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&s| (s as f64 - mean_ns).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    Some(SummaryStats {
        mean_ns,
        std_dev_ns: variance.sqrt(),
    })
}

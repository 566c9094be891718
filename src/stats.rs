// ---------------------------------------------------------------------------
// Descriptive statistics over a numeric column
// ---------------------------------------------------------------------------

/// Population summary of a value set: divisor is N, not N-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Compute mean and population variance / standard deviation.
/// Returns `None` for an empty slice.
pub fn population_summary(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(Summary {
        count: values.len(),
        mean,
        variance,
        std_dev: variance.sqrt(),
    })
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One equal-width histogram bin over `[start, end)`; the last bin is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    // All values identical: a single bin holding everything.
    if range.abs() < f64::EPSILON {
        return vec![HistBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Box-plot summary
// ---------------------------------------------------------------------------

/// Five-number summary with Tukey 1.5*IQR whiskers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
}

/// Compute a box summary. Returns `None` for an empty slice.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;

    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    // Whiskers reach the outermost values inside the fences.
    let whisker_low = sorted
        .iter()
        .copied()
        .find(|v| *v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= high_fence)
        .unwrap_or(q3);

    Some(BoxSummary {
        whisker_low,
        q1,
        median,
        q3,
        whisker_high,
    })
}

/// Linearly interpolated quantile of an already sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

//! Statistical helper functions for calpart.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Arithmetic mean of integer counts. Returns 0.0 if empty.
pub fn mean_counts(data: &[i64]) -> f64 {
    let as_f64: Vec<f64> = data.iter().map(|&x| x as f64).collect();
    mean(&as_f64)
}

/// Smallest and largest element. Returns `None` if empty.
pub fn min_max<T: Ord + Copy>(data: &[T]) -> Option<(T, T)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

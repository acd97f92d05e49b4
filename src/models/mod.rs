pub mod grader;
pub mod payoff;

/// Small numeric helpers shared by the models
pub mod utils {
    /// The `i`-th of `n` evenly spaced points over `[start, end]`.
    ///
    /// The last point is exactly `end` so both endpoints survive rounding.
    pub fn linspace_point(start: f64, end: f64, n: usize, i: usize) -> f64 {
        if n <= 1 || i == 0 {
            return start;
        }
        if i >= n - 1 {
            return end;
        }
        start + (end - start) * (i as f64) / ((n - 1) as f64)
    }

    /// Arithmetic mean; `None` for an empty slice.
    pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

//! Centered moving-average smoothing.
//!
//! The window shrinks symmetrically at the boundaries: the first and last
//! `window / 2` points average over the in-bounds samples only. This is the
//! same result as a rolling mean with `center = true` and `min_periods = 1`.

/// Smooth `values` with a centered moving average of width `window`.
///
/// `window` is expected to be odd; callers validate it. A window of 0 or 1
/// returns the input unchanged.
pub fn centered_moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 || values.is_empty() {
        return values.to_vec();
    }

    let half = window / 2;
    let last = values.len() - 1;

    (0..values.len())
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(last);
            mean(&values[lo..=hi])
        })
        .collect()
}

/// Arithmetic mean that stays finite for finite inputs near `f64::MAX`.
fn mean(span: &[f64]) -> f64 {
    let len = span.len() as f64;
    let sum: f64 = span.iter().sum();
    if sum.is_finite() {
        return sum / len;
    }

    // The mean lies between the extremes; clamping absorbs rounding past them.
    let (lo, hi) = span
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    span.iter().map(|v| v / len).sum::<f64>().clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::centered_moving_average;

    #[test]
    fn window_one_is_identity() {
        let values = [1.0, 5.0, 2.0];
        assert_eq!(centered_moving_average(&values, 1), values.to_vec());
    }

    #[test]
    fn edges_shrink_the_window() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let smoothed = centered_moving_average(&values, 3);

        // Edge points average two samples, interior points three.
        assert_eq!(smoothed, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
    }

    #[test]
    fn window_wider_than_series_averages_reachable_samples() {
        let values = [2.0, 4.0, 6.0];
        let smoothed = centered_moving_average(&values, 7);

        // Every index reaches the whole series.
        assert_eq!(smoothed, vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let values = [f64::MAX, f64::MAX, f64::MAX];
        let smoothed = centered_moving_average(&values, 3);

        assert!(smoothed.iter().all(|v| v.is_finite()), "{smoothed:?}");
    }

    #[test]
    fn single_value_is_unchanged() {
        assert_eq!(centered_moving_average(&[3.5], 5), vec![3.5]);
    }
}

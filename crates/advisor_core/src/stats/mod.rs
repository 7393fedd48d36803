//! Summary-statistics kernels.
//!
//! Small, allocation-light numeric routines shared by the metrics,
//! simulation and risk layers. Generic over [`Float`] so the kernels work
//! for `f64` and `f32` alike.
//!
//! Percentiles use linear interpolation between order statistics (the
//! convention the rest of the workspace's statistics are defined against).
//! Empty inputs return zero rather than faulting; callers that must reject
//! empty series validate before calling.

use num_traits::Float;

/// Arithmetic mean of a series.
///
/// Returns zero for an empty series.
///
/// # Examples
///
/// ```
/// use advisor_core::stats::mean;
///
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0]), 2.0);
/// assert_eq!(mean::<f64>(&[]), 0.0);
/// ```
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap_or(T::one())
}

/// Population standard deviation of a series.
///
/// Divides by `n`, not `n - 1`. Returns zero for series shorter than two
/// elements.
///
/// # Examples
///
/// ```
/// use advisor_core::stats::population_std_dev;
///
/// let sd = population_std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev<T: Float>(values: &[T]) -> T {
    if values.len() < 2 {
        return T::zero();
    }
    let mu = mean(values);
    let sq_sum = values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - mu) * (v - mu));
    (sq_sum / T::from(values.len()).unwrap_or(T::one())).sqrt()
}

/// Percentile of a series with linear interpolation between order
/// statistics.
///
/// `p` is in [0, 100] and is clamped to that range. Returns zero for an
/// empty series.
///
/// # Examples
///
/// ```
/// use advisor_core::stats::percentile;
///
/// let values = [1.0_f64, 2.0, 3.0, 4.0];
/// assert!((percentile(&values, 50.0) - 2.5).abs() < 1e-12);
/// assert!((percentile(&values, 5.0) - 1.15).abs() < 1e-12);
/// assert_eq!(percentile(&values, 100.0), 4.0);
/// ```
pub fn percentile<T: Float>(values: &[T], p: f64) -> T {
    if values.is_empty() {
        return T::zero();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let frac = T::from(rank - lo as f64).unwrap_or(T::zero());
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Median of a series (the 50th percentile).
///
/// # Examples
///
/// ```
/// use advisor_core::stats::median;
///
/// assert_eq!(median(&[3.0_f64, 1.0, 2.0]), 2.0);
/// assert!((median(&[1.0_f64, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
/// ```
pub fn median<T: Float>(values: &[T]) -> T {
    percentile(values, 50.0)
}

/// Maximum drawdown of a value trajectory, as a fraction of the running
/// peak.
///
/// Tracks the running peak and returns the largest `(peak - value) / peak`
/// observed. Returns zero for empty trajectories or trajectories whose
/// running peak never exceeds zero.
///
/// # Examples
///
/// ```
/// use advisor_core::stats::max_drawdown;
///
/// // Peak 120, trough 90: drawdown 25%.
/// let trajectory = [100.0_f64, 120.0, 90.0, 110.0];
/// assert!((max_drawdown(&trajectory) - 0.25).abs() < 1e-12);
///
/// // Monotonically rising: no drawdown.
/// assert_eq!(max_drawdown(&[1.0_f64, 2.0, 3.0]), 0.0);
/// ```
pub fn max_drawdown<T: Float>(trajectory: &[T]) -> T {
    let mut peak = T::neg_infinity();
    let mut worst = T::zero();

    for &value in trajectory {
        if value > peak {
            peak = value;
        }
        if peak > T::zero() {
            let drawdown = (peak - value) / peak;
            if drawdown > worst {
                worst = drawdown;
            }
        }
    }

    worst
}

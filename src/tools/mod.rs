//! Auxiliary utilities
//!
//! Small helpers around the codec and container engine: nearest-value lookup,
//! time vectors, tab-separated tables and a console progress bar.

pub mod progress;
pub mod table;

pub use progress::{print_progress_bar, ProgressBar};
pub use table::{parse_table, read_table, Table};

use crate::error::{AudiolibError, Result};

/// Index of the value closest to `target`
///
/// Ties resolve to the first index. NaN entries are never selected.
///
/// # Errors
/// * `InvalidArgument` - if `values` holds no comparable value or `target` is NaN
pub fn closest_idx_to_val(values: &[f64], target: f64) -> Result<usize> {
    if target.is_nan() {
        return Err(AudiolibError::invalid_argument("target value is NaN"));
    }

    let mut best: Option<(usize, f64)> = None;
    for (idx, &value) in values.iter().enumerate() {
        let distance = (value - target).abs();
        if distance.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((idx, distance));
        }
    }

    best.map(|(idx, _)| idx)
        .ok_or_else(|| AudiolibError::invalid_argument("no comparable values to search"))
}

/// Time in seconds of each of `num_samples` samples taken at `sample_rate`
pub fn calc_time_vec(num_samples: usize, sample_rate: u32) -> Result<Vec<f64>> {
    if sample_rate == 0 {
        return Err(AudiolibError::invalid_argument("sample rate must be positive"));
    }

    let period = 1.0 / f64::from(sample_rate);
    Ok((0..num_samples).map(|i| i as f64 * period).collect())
}

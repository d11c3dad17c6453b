//! Sample Codec
//!
//! Pure conversions between fixed-point integer PCM and the normalized float
//! domain. Every function is parameterized by the integer bit depth `B`:
//!
//! - signed B-bit integers map by a single divisor of `2^(B-1)`
//! - unsigned B-bit integers are offset-binary: `2^(B-1)` is re-centered to
//!   zero, the negative half divides by `2^(B-1)` and the positive half by
//!   `2^(B-1) - 1`, so both ends land exactly on -1.0 and +1.0
//!
//! Float results are real-valued. Rounding and clipping to an actual integer
//! type happens at serialization time, see
//! [`SampleEncoding::quantize`](crate::codec::SampleEncoding::quantize).

use num_traits::AsPrimitive;

use crate::error::{AudiolibError, Result};

/// Smallest bit depth with a non-zero positive span
pub const MIN_BIT_DEPTH: u32 = 2;

/// Largest bit depth representable by the 64-bit input types
pub const MAX_BIT_DEPTH: u32 = 64;

/// Negative and positive half-ranges of a B-bit integer domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spans {
    /// `2^(B-1)`: count of negative values
    pub neg: f64,
    /// `2^(B-1) - 1`: count of strictly positive values
    pub pos: f64,
}

impl Spans {
    pub(crate) fn for_bit_depth(bit_depth: u32) -> Result<Self> {
        if !(MIN_BIT_DEPTH..=MAX_BIT_DEPTH).contains(&bit_depth) {
            return Err(AudiolibError::invalid_argument(format!(
                "bit depth {} outside {}..={}",
                bit_depth, MIN_BIT_DEPTH, MAX_BIT_DEPTH
            )));
        }
        let neg = 2.0_f64.powi(bit_depth as i32 - 1);
        Ok(Spans { neg, pos: neg - 1.0 })
    }
}

/// Convert unsigned (offset-binary) B-bit integers to floats in `[-1, 1]`
///
/// # Errors
/// * `InvalidArgument` - bit depth outside `2..=64`, or a sample outside
///   `[0, 2^B - 1]`
pub fn uint_to_float<T>(samples: &[T], bit_depth: u32) -> Result<Vec<f64>>
where
    T: AsPrimitive<f64>,
{
    let spans = Spans::for_bit_depth(bit_depth)?;
    let max = spans.neg + spans.pos;

    samples
        .iter()
        .enumerate()
        .map(|(idx, sample)| {
            let value: f64 = sample.as_();
            if !(0.0..=max).contains(&value) {
                return Err(AudiolibError::invalid_argument(format!(
                    "sample {} = {} is not a {}-bit unsigned value",
                    idx, value, bit_depth
                )));
            }

            let centered = value - spans.neg;
            if centered >= 0.0 {
                Ok(centered / spans.pos)
            } else {
                Ok(centered / spans.neg)
            }
        })
        .collect()
}

/// Convert signed B-bit integers to floats in `[-1, 1)`
///
/// The most negative value maps to exactly -1.0; the most positive value maps
/// to `1 - 2^(1-B)`.
///
/// # Errors
/// * `InvalidArgument` - bit depth outside `2..=64`, or a sample outside
///   `[-2^(B-1), 2^(B-1) - 1]`
pub fn sint_to_float<T>(samples: &[T], bit_depth: u32) -> Result<Vec<f64>>
where
    T: AsPrimitive<f64>,
{
    let spans = Spans::for_bit_depth(bit_depth)?;

    samples
        .iter()
        .enumerate()
        .map(|(idx, sample)| {
            let value: f64 = sample.as_();
            if !(-spans.neg..=spans.pos).contains(&value) {
                return Err(AudiolibError::invalid_argument(format!(
                    "sample {} = {} is not a {}-bit signed value",
                    idx, value, bit_depth
                )));
            }
            Ok(value / spans.neg)
        })
        .collect()
}

/// Scale normalized floats into the signed B-bit domain
///
/// Exact inverse of [`sint_to_float`]. The result is not rounded or clipped.
pub fn float_to_sint(samples: &[f64], bit_depth: u32) -> Result<Vec<f64>> {
    let spans = Spans::for_bit_depth(bit_depth)?;
    Ok(samples.iter().map(|&s| s * spans.neg).collect())
}

/// Scale normalized floats into the unsigned (offset-binary) B-bit domain
///
/// Inverse of [`uint_to_float`]: the same two-branch span choice is applied
/// before the offset is re-added. The result is not rounded or clipped.
pub fn float_to_uint(samples: &[f64], bit_depth: u32) -> Result<Vec<f64>> {
    let spans = Spans::for_bit_depth(bit_depth)?;
    Ok(samples
        .iter()
        .map(|&s| {
            let centered = if s >= 0.0 { s * spans.pos } else { s * spans.neg };
            centered + spans.neg
        })
        .collect())
}

//! Recording model
//!
//! Per-channel float data decoded from one container file, plus the helpers
//! that reshape interleaved frames into channels and back.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{AudiolibError, Result};
use crate::tools::calc_time_vec;

/// Decoded recordings keyed by the path they were requested with, in input order
pub type BatchResult = IndexMap<String, Recording>;

// ============================================================================
// Recording
// ============================================================================

/// Decoded result of one container file
///
/// All channels share the sample rate, the source bit depth and the number of
/// samples. Samples are always in the normalized float domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    sample_rate: u32,
    initial_bit_depth: u16,
    channels: Vec<Vec<f64>>,
}

impl Recording {
    /// Create a recording from per-channel float data
    ///
    /// # Errors
    /// * `InvalidArgument` - zero sample rate or bit depth, no channels, or
    ///   channels of different lengths
    pub fn new(sample_rate: u32, initial_bit_depth: u16, channels: Vec<Vec<f64>>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AudiolibError::invalid_argument("sample rate must be positive"));
        }
        if initial_bit_depth == 0 {
            return Err(AudiolibError::invalid_argument("bit depth must be positive"));
        }
        check_channel_lengths(&channels)?;

        Ok(Self {
            sample_rate,
            initial_bit_depth,
            channels,
        })
    }

    /// Sample rate in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bit depth of the integer encoding the samples were decoded from
    #[inline]
    pub fn initial_bit_depth(&self) -> u16 {
        self.initial_bit_depth
    }

    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples of one channel, or None if the index is out of bounds
    pub fn channel(&self, index: usize) -> Option<&[f64]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels, outer index is the channel
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.channels
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Time in seconds of every sample index
    pub fn time_vector(&self) -> Result<Vec<f64>> {
        calc_time_vec(self.len(), self.sample_rate)
    }

    /// Metadata view without the sample data
    pub fn summary(&self) -> RecordingSummary {
        RecordingSummary {
            fs: self.sample_rate,
            initial_bit_depth: self.initial_bit_depth,
            channels: self.num_channels(),
            samples: self.len(),
            duration_secs: self.duration_secs(),
        }
    }
}

/// Serializable metadata of a [`Recording`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordingSummary {
    pub fs: u32,
    pub initial_bit_depth: u16,
    pub channels: usize,
    pub samples: usize,
    pub duration_secs: f64,
}

// ============================================================================
// Channel reshaping
// ============================================================================

/// De-interleave frames from [L,R,L,R,...] to [[L,L,...], [R,R,...]]
///
/// Mono data is the `num_channels == 1` case and comes back as a single
/// channel holding the input unchanged.
pub fn deinterleave<T: Copy>(interleaved: &[T], num_channels: usize) -> Result<Vec<Vec<T>>> {
    if num_channels == 0 {
        return Err(AudiolibError::invalid_argument("channel count must be positive"));
    }
    if interleaved.len() % num_channels != 0 {
        return Err(AudiolibError::invalid_argument(format!(
            "{} samples do not divide into {} channels",
            interleaved.len(),
            num_channels
        )));
    }

    let frames = interleaved.len() / num_channels;
    let mut channels = vec![Vec::with_capacity(frames); num_channels];

    for frame in interleaved.chunks_exact(num_channels) {
        for (ch, &sample) in frame.iter().enumerate() {
            channels[ch].push(sample);
        }
    }

    Ok(channels)
}

/// Interleave channels from [[L,L,...], [R,R,...]] to [L,R,L,R,...]
pub fn interleave<T: Copy>(channels: &[Vec<T>]) -> Result<Vec<T>> {
    check_channel_lengths(channels)?;

    let frames = channels[0].len();
    let mut interleaved = Vec::with_capacity(frames * channels.len());

    for frame in 0..frames {
        for channel in channels {
            interleaved.push(channel[frame]);
        }
    }

    Ok(interleaved)
}

fn check_channel_lengths<T>(channels: &[Vec<T>]) -> Result<()> {
    let first = channels
        .first()
        .ok_or_else(|| AudiolibError::invalid_argument("at least one channel is required"))?;

    if let Some((index, channel)) = channels
        .iter()
        .enumerate()
        .find(|(_, channel)| channel.len() != first.len())
    {
        return Err(AudiolibError::invalid_argument(format!(
            "channel {} has {} samples, channel 0 has {}",
            index,
            channel.len(),
            first.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deinterleave_stereo() {
        let interleaved = vec![1, 5, 2, 6, 3, 7, 4, 8];
        let channels = deinterleave(&interleaved, 2).unwrap();

        assert_eq!(channels, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    }

    #[test]
    fn test_deinterleave_mono_is_identity() {
        let samples = vec![0.1, -0.2, 0.3];
        let channels = deinterleave(&samples, 1).unwrap();

        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0], samples);
    }

    #[test]
    fn test_deinterleave_invalid() {
        assert!(deinterleave(&[1, 2, 3], 2).is_err());
        assert!(deinterleave(&[1, 2], 0).is_err());
        assert_eq!(deinterleave::<i32>(&[], 2).unwrap(), vec![Vec::<i32>::new(); 2]);
    }

    #[test]
    fn test_interleave_three_channels() {
        let channels = vec![vec![1, 4], vec![2, 5], vec![3, 6]];
        assert_eq!(interleave(&channels).unwrap(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(deinterleave(&[1, 2, 3, 4, 5, 6], 3).unwrap(), channels);
    }

    #[test]
    fn test_interleave_rejects_ragged_channels() {
        assert!(interleave(&[vec![1, 2], vec![3]]).is_err());
        assert!(interleave::<i32>(&[]).is_err());
    }

    #[test]
    fn test_recording_accessors() {
        let recording =
            Recording::new(4, 16, vec![vec![0.0, 0.25, 0.5, 0.75], vec![0.0; 4]]).unwrap();

        assert_eq!(recording.sample_rate(), 4);
        assert_eq!(recording.initial_bit_depth(), 16);
        assert_eq!(recording.num_channels(), 2);
        assert_eq!(recording.len(), 4);
        assert_eq!(recording.duration_secs(), 1.0);
        assert_eq!(recording.channel(0).unwrap()[1], 0.25);
        assert!(recording.channel(2).is_none());
        assert_eq!(recording.time_vector().unwrap(), vec![0.0, 0.25, 0.5, 0.75]);

        let summary = recording.summary();
        assert_eq!(summary.channels, 2);
        assert_eq!(summary.samples, 4);
    }

    #[test]
    fn test_recording_rejects_invalid() {
        assert!(Recording::new(0, 16, vec![vec![0.0]]).is_err());
        assert!(Recording::new(44100, 0, vec![vec![0.0]]).is_err());
        assert!(Recording::new(44100, 16, vec![]).is_err());
        assert!(Recording::new(44100, 16, vec![vec![0.0], vec![]]).is_err());
    }
}

//! Audio file I/O for audiolib
//!
//! Reads linear PCM WAV files into [`Recording`]s and writes numeric buffers
//! back out. Integer samples are converted through the codec selected by the
//! file's declared [`SampleEncoding`]; there is no implicit fallback codec.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::{debug, info};

use crate::codec::SampleEncoding;
use crate::engine::recording::{deinterleave, interleave, BatchResult, Recording};
use crate::error::{AudiolibError, Result};

/// Offset between hound's signed view of 8-bit data and the on-disk bytes
const U8_OFFSET: i32 = 128;

// ============================================================================
// Reading
// ============================================================================

/// Decode one WAV file into a [`Recording`]
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `MalformedContainer` - If the header or sample data cannot be decoded
/// * `UnsupportedEncoding` - If the samples are not integer PCM
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Recording> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AudiolibError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = WavReader::open(path)
        .map_err(|e| malformed(path, format!("failed to open WAV file: {}", e), Some(e)))?;

    let spec = reader.spec();
    let encoding = SampleEncoding::from_wav_spec(&spec).map_err(|e| match e {
        AudiolibError::UnsupportedEncoding { encoding } => AudiolibError::UnsupportedEncoding {
            encoding: format!("{} in {}", encoding, path.display()),
        },
        other => other,
    })?;

    // The reader is consumed here, so the file handle is released before conversion
    let raw = read_raw_samples(reader, encoding)
        .map_err(|e| malformed(path, format!("failed to read samples: {}", e), Some(e)))?;

    let raw_channels = deinterleave(&raw, usize::from(spec.channels))
        .map_err(|e| malformed(path, e.to_string(), None))?;

    let channels = raw_channels
        .iter()
        .map(|channel| encoding.to_float(channel))
        .collect::<Result<Vec<_>>>()?;

    let recording = Recording::new(spec.sample_rate, encoding.bit_depth(), channels)
        .map_err(|e| malformed(path, e.to_string(), None))?;

    debug!(
        "Decoded {}: {} Hz, {}, {} channel(s), {} samples",
        path.display(),
        recording.sample_rate(),
        encoding,
        recording.num_channels(),
        recording.len()
    );

    Ok(recording)
}

/// Decode several WAV files, keyed by the path each was requested with
///
/// Files are decoded in order. The batch is all-or-nothing: the first file
/// that fails aborts the call with that file's error.
pub fn read_wavs<I, P>(paths: I) -> Result<BatchResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    read_wavs_with(paths, |_, _| {})
}

/// Like [`read_wavs`], calling `on_decoded` with each key and recording as
/// soon as that file has been decoded
pub fn read_wavs_with<I, P, F>(paths: I, mut on_decoded: F) -> Result<BatchResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&str, &Recording),
{
    let mut batch = BatchResult::new();

    for path in paths {
        let path = path.as_ref();
        let recording = read_wav(path)?;
        let key = path.to_string_lossy().into_owned();
        on_decoded(&key, &recording);
        batch.insert(key, recording);
    }

    info!("Decoded {} file(s)", batch.len());
    Ok(batch)
}

/// Read every interleaved sample in the file's integer domain
///
/// hound hands out 8-bit data re-centered on zero, so it is shifted back to
/// the offset-binary values stored on disk.
fn read_raw_samples<R: std::io::Read>(
    mut reader: WavReader<R>,
    encoding: SampleEncoding,
) -> std::result::Result<Vec<i32>, hound::Error> {
    let samples = reader.samples::<i32>();
    match encoding {
        SampleEncoding::Unsigned(8) => samples.map(|s| s.map(|v| v + U8_OFFSET)).collect(),
        _ => samples.collect(),
    }
}

fn malformed(path: &Path, reason: String, source: Option<hound::Error>) -> AudiolibError {
    AudiolibError::MalformedContainer {
        path: path.display().to_string(),
        reason,
        source,
    }
}

// ============================================================================
// Writing
// ============================================================================

/// How data reaches the on-disk integer scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    /// Normalized floats scaled by the target encoding's codec
    Scale,
    /// Data already in the target encoding
    PassThrough,
}

/// Write channels of numeric data to a WAV file
///
/// `channels` is shaped `[channel][sample]`; mono data is a single channel.
/// `data_encoding` names the domain the values are in and `wav_encoding` the
/// integer PCM encoding stored in the file. Supported pairs:
///
/// | data          | file          |                          |
/// |---------------|---------------|--------------------------|
/// | `float*`      | `int16/24/32` | scaled by `float_to_sint` |
/// | `float*`      | `uint8`       | scaled by `float_to_uint` |
/// | `intB`        | `intB`        | passed through           |
/// | `uint8`       | `uint8`       | passed through           |
///
/// Values are rounded and clipped to the file's range. An existing file at
/// `path` is overwritten.
///
/// # Errors
/// * `InvalidArgument` - empty or ragged channels, zero sample rate
/// * `UnsupportedEncoding` - `wav_encoding` is not storable as linear PCM
/// * `UnsupportedConversion` - the data/file pair is not listed above
/// * `WavWrite` - the file cannot be created or written
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    channels: &[Vec<f64>],
    data_encoding: SampleEncoding,
    sample_rate: u32,
    wav_encoding: SampleEncoding,
) -> Result<()> {
    let path = path.as_ref();

    if sample_rate == 0 {
        return Err(AudiolibError::invalid_argument("sample rate must be positive"));
    }
    let num_channels = u16::try_from(channels.len()).map_err(|_| {
        AudiolibError::invalid_argument(format!("{} channels exceed the WAV limit", channels.len()))
    })?;

    let spec = wav_spec_for(wav_encoding, num_channels, sample_rate)?;
    let conversion = conversion_for(data_encoding, wav_encoding)?;

    let interleaved = interleave(channels)?;
    let scaled = match conversion {
        Conversion::Scale => wav_encoding.scale_float(&interleaved)?,
        Conversion::PassThrough => interleaved,
    };
    let quantized = wav_encoding.quantize(&scaled)?;

    let write_err = |e: hound::Error| AudiolibError::WavWrite {
        path: path.display().to_string(),
        source: e,
    };

    let mut writer = WavWriter::create(path, spec).map_err(write_err)?;
    for value in quantized {
        let raw = match wav_encoding {
            SampleEncoding::Unsigned(8) => value as i32 - U8_OFFSET,
            _ => value as i32,
        };
        writer.write_sample(raw).map_err(write_err)?;
    }
    writer.finalize().map_err(write_err)?;

    debug!(
        "Wrote {}: {} Hz, {} -> {}, {} channel(s)",
        path.display(),
        sample_rate,
        data_encoding,
        wav_encoding,
        num_channels
    );

    Ok(())
}

/// Write a decoded recording back out with the given integer encoding
pub fn write_recording<P: AsRef<Path>>(
    path: P,
    recording: &Recording,
    wav_encoding: SampleEncoding,
) -> Result<()> {
    write_wav(
        path,
        recording.channels(),
        SampleEncoding::Float(64),
        recording.sample_rate(),
        wav_encoding,
    )
}

fn wav_spec_for(encoding: SampleEncoding, channels: u16, sample_rate: u32) -> Result<WavSpec> {
    match encoding {
        SampleEncoding::Unsigned(8)
        | SampleEncoding::Signed(16)
        | SampleEncoding::Signed(24)
        | SampleEncoding::Signed(32) => Ok(WavSpec {
            channels,
            sample_rate,
            bits_per_sample: encoding.bit_depth(),
            sample_format: SampleFormat::Int,
        }),
        other => Err(AudiolibError::UnsupportedEncoding {
            encoding: format!("{} cannot be stored as linear PCM WAV", other),
        }),
    }
}

fn conversion_for(from: SampleEncoding, to: SampleEncoding) -> Result<Conversion> {
    match (from, to) {
        (SampleEncoding::Float(_), SampleEncoding::Signed(_) | SampleEncoding::Unsigned(_)) => {
            Ok(Conversion::Scale)
        }
        (from, to) if from == to => Ok(Conversion::PassThrough),
        (from, to) => Err(AudiolibError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================

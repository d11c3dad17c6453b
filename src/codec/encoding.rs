//! Sample encoding descriptors
//!
//! A [`SampleEncoding`] tags a buffer with its numeric domain. It is parsed
//! from dtype-like names (`"int16"`, `"uint8"`, `"float32"`) or derived from a
//! WAV header, and it selects the codec direction through an exhaustive match.

use std::fmt;
use std::str::FromStr;

use hound::{SampleFormat, WavSpec};
use num_traits::AsPrimitive;

use crate::codec::sample::{self, Spans};
use crate::error::{AudiolibError, Result};

/// Widest integer encoding that can be quantized for serialization
pub const MAX_QUANTIZE_BIT_DEPTH: u16 = 32;

/// Numeric domain of a sample buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleEncoding {
    /// Two's complement integers of the given bit depth
    Signed(u16),
    /// Offset-binary integers of the given bit depth
    Unsigned(u16),
    /// Normalized floating point of the given width (32 or 64)
    Float(u16),
}

impl SampleEncoding {
    /// Derive the encoding declared by a WAV header
    ///
    /// Linear PCM WAV stores 8-bit samples offset-binary and wider samples as
    /// two's complement. IEEE float data is neither and is rejected.
    pub fn from_wav_spec(spec: &WavSpec) -> Result<Self> {
        match spec.sample_format {
            SampleFormat::Int if spec.bits_per_sample == 8 => Ok(SampleEncoding::Unsigned(8)),
            SampleFormat::Int => Ok(SampleEncoding::Signed(spec.bits_per_sample)),
            SampleFormat::Float => Err(AudiolibError::UnsupportedEncoding {
                encoding: format!("float{} WAV data", spec.bits_per_sample),
            }),
        }
    }

    /// Bit depth (or float width) of this encoding
    pub fn bit_depth(&self) -> u16 {
        match *self {
            SampleEncoding::Signed(bits)
            | SampleEncoding::Unsigned(bits)
            | SampleEncoding::Float(bits) => bits,
        }
    }

    /// True for the signed and unsigned integer domains
    pub fn is_integer(&self) -> bool {
        !matches!(self, SampleEncoding::Float(_))
    }

    /// Convert integer samples in this encoding to normalized floats
    pub fn to_float<T>(self, samples: &[T]) -> Result<Vec<f64>>
    where
        T: AsPrimitive<f64>,
    {
        match self {
            SampleEncoding::Signed(bits) => sample::sint_to_float(samples, u32::from(bits)),
            SampleEncoding::Unsigned(bits) => sample::uint_to_float(samples, u32::from(bits)),
            SampleEncoding::Float(_) => Err(AudiolibError::UnsupportedEncoding {
                encoding: format!("{} has no integer-to-float codec", self),
            }),
        }
    }

    /// Convert normalized floats into this encoding's (unrounded) integer scale
    pub fn scale_float(self, samples: &[f64]) -> Result<Vec<f64>> {
        match self {
            SampleEncoding::Signed(bits) => sample::float_to_sint(samples, u32::from(bits)),
            SampleEncoding::Unsigned(bits) => sample::float_to_uint(samples, u32::from(bits)),
            SampleEncoding::Float(_) => Err(AudiolibError::UnsupportedEncoding {
                encoding: format!("{} has no float-to-integer codec", self),
            }),
        }
    }

    /// Round integer-scaled values and clip them to the representable range
    ///
    /// # Errors
    /// * `UnsupportedEncoding` - for float encodings
    /// * `InvalidArgument` - for bit depths above 32, or NaN/infinite values
    pub fn quantize(&self, values: &[f64]) -> Result<Vec<i64>> {
        let bits = self.bit_depth();
        if !self.is_integer() {
            return Err(AudiolibError::UnsupportedEncoding {
                encoding: format!("cannot quantize to {}", self),
            });
        }
        if bits > MAX_QUANTIZE_BIT_DEPTH {
            return Err(AudiolibError::invalid_argument(format!(
                "cannot quantize to {} bits (maximum {})",
                bits, MAX_QUANTIZE_BIT_DEPTH
            )));
        }

        let spans = Spans::for_bit_depth(u32::from(bits))?;
        let (min, max) = match self {
            SampleEncoding::Unsigned(_) => (0.0, spans.neg + spans.pos),
            _ => (-spans.neg, spans.pos),
        };

        values
            .iter()
            .map(|&v| {
                if !v.is_finite() {
                    return Err(AudiolibError::invalid_argument(format!(
                        "cannot quantize non-finite value {}",
                        v
                    )));
                }
                Ok(v.round().clamp(min, max) as i64)
            })
            .collect()
    }
}

impl fmt::Display for SampleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleEncoding::Signed(bits) => write!(f, "int{}", bits),
            SampleEncoding::Unsigned(bits) => write!(f, "uint{}", bits),
            SampleEncoding::Float(bits) => write!(f, "float{}", bits),
        }
    }
}

impl FromStr for SampleEncoding {
    type Err = AudiolibError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let unsupported = || AudiolibError::UnsupportedEncoding {
            encoding: s.to_string(),
        };

        let (kind, digits) = ["uint", "int", "float"]
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix).map(|rest| (*prefix, rest)))
            .ok_or_else(unsupported)?;

        let bits: u16 = digits.parse().map_err(|_| unsupported())?;
        if bits == 0 {
            return Err(AudiolibError::invalid_argument(format!(
                "encoding '{}' has zero bit depth",
                s
            )));
        }

        match kind {
            "int" => Ok(SampleEncoding::Signed(bits)),
            "uint" => Ok(SampleEncoding::Unsigned(bits)),
            _ if bits == 32 || bits == 64 => Ok(SampleEncoding::Float(bits)),
            _ => Err(unsupported()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_spec(bits: u16, format: SampleFormat) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: bits,
            sample_format: format,
        }
    }

    #[test]
    fn test_parse_dtype_names() {
        assert_eq!("int16".parse::<SampleEncoding>().unwrap(), SampleEncoding::Signed(16));
        assert_eq!("uint8".parse::<SampleEncoding>().unwrap(), SampleEncoding::Unsigned(8));
        assert_eq!("Float32".parse::<SampleEncoding>().unwrap(), SampleEncoding::Float(32));
        assert_eq!(" int24 ".parse::<SampleEncoding>().unwrap(), SampleEncoding::Signed(24));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for name in ["complex64", "int", "float16", "pcm16", ""] {
            assert!(
                matches!(
                    name.parse::<SampleEncoding>(),
                    Err(AudiolibError::UnsupportedEncoding { .. })
                ),
                "{} should be unsupported",
                name
            );
        }
        assert!(matches!(
            "int0".parse::<SampleEncoding>(),
            Err(AudiolibError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_display_round_trips_parse() {
        for encoding in [
            SampleEncoding::Signed(16),
            SampleEncoding::Unsigned(8),
            SampleEncoding::Float(64),
        ] {
            assert_eq!(encoding.to_string().parse::<SampleEncoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_from_wav_spec() {
        assert_eq!(
            SampleEncoding::from_wav_spec(&wav_spec(8, SampleFormat::Int)).unwrap(),
            SampleEncoding::Unsigned(8)
        );
        assert_eq!(
            SampleEncoding::from_wav_spec(&wav_spec(24, SampleFormat::Int)).unwrap(),
            SampleEncoding::Signed(24)
        );
        assert!(matches!(
            SampleEncoding::from_wav_spec(&wav_spec(32, SampleFormat::Float)),
            Err(AudiolibError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn test_codec_dispatch() {
        let signed = SampleEncoding::Signed(16).to_float(&[-32768_i32, 0]).unwrap();
        assert_eq!(signed, vec![-1.0, 0.0]);

        let unsigned = SampleEncoding::Unsigned(8).to_float(&[0_i32, 128, 255]).unwrap();
        assert_eq!(unsigned, vec![-1.0, 0.0, 1.0]);

        assert!(SampleEncoding::Float(32).to_float(&[0_i32]).is_err());
        assert!(SampleEncoding::Float(32).scale_float(&[0.0]).is_err());
    }

    #[test]
    fn test_quantize_rounds_and_clips() {
        let q = SampleEncoding::Signed(16)
            .quantize(&[0.4, 0.6, -0.6, 40000.0, -40000.0])
            .unwrap();
        assert_eq!(q, vec![0, 1, -1, 32767, -32768]);

        let q = SampleEncoding::Unsigned(8).quantize(&[-3.0, 127.5, 300.0]).unwrap();
        assert_eq!(q, vec![0, 128, 255]);
    }

    #[test]
    fn test_quantize_rejects_invalid() {
        assert!(SampleEncoding::Float(32).quantize(&[0.0]).is_err());
        assert!(SampleEncoding::Signed(64).quantize(&[0.0]).is_err());
        assert!(SampleEncoding::Signed(16).quantize(&[f64::NAN]).is_err());
    }
}

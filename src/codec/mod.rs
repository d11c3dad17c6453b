//! Sample Codec Module
//!
//! Conversions between integer PCM domains and normalized floats:
//! - Stateless per-domain conversion functions
//! - Encoding descriptors that select the conversion direction

pub mod encoding;
pub mod sample;

pub use encoding::SampleEncoding;
pub use sample::{float_to_sint, float_to_uint, sint_to_float, uint_to_float};

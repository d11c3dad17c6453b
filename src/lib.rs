//! audiolib - PCM sample conversion and WAV container I/O
//!
//! audiolib converts between fixed-point integer PCM (signed or unsigned, any
//! bit depth from 2 to 64) and normalized floating-point samples, and moves
//! those samples in and out of WAV files.
//!
//! # Architecture
//!
//! - `codec`: stateless integer/float conversions and encoding descriptors
//! - `engine`: WAV reading into per-channel [`Recording`]s, and writing back
//! - `tools`: time vectors, nearest-value lookup, tab-separated tables,
//!   console progress bar
//!
//! # Example
//! ```
//! use audiolib::codec::{sint_to_float, float_to_sint};
//!
//! let floats = sint_to_float(&[-32768_i16, 0, 16384], 16).unwrap();
//! assert_eq!(floats, vec![-1.0, 0.0, 0.5]);
//! assert_eq!(float_to_sint(&floats, 16).unwrap(), vec![-32768.0, 0.0, 16384.0]);
//! ```

pub mod cli;
pub mod codec;
pub mod engine;
pub mod error;
pub mod tools;

pub use codec::SampleEncoding;
pub use engine::{
    read_wav, read_wavs, read_wavs_with, write_recording, write_wav, BatchResult, Recording,
};
pub use error::{AudiolibError, Result};

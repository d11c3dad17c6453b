//! Container Engine Module
//!
//! WAV container reading and writing:
//! - Recording model and channel reshaping
//! - File I/O operations

pub mod io;
pub mod recording;

pub use io::{read_wav, read_wavs, read_wavs_with, write_recording, write_wav};
pub use recording::{deinterleave, interleave, BatchResult, Recording, RecordingSummary};

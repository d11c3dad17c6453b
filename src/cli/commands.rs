//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{info, warn};
use walkdir::WalkDir;

use crate::codec::SampleEncoding;
use crate::engine::{read_wav, read_wavs_with, write_recording};
use crate::error::{AudiolibError, Result};
use crate::tools::{read_table, ProgressBar};

/// Decode WAV files and print a summary of each.
pub fn info(paths: &[PathBuf], json: bool) -> Result<()> {
    let files = collect_wav_files(paths)?;
    if files.is_empty() {
        warn!("No WAV files found");
        return Ok(());
    }

    info!("Decoding {} file(s)", files.len());
    let progress = if files.len() > 1 && !json {
        ProgressBar::new(files.len(), "Decoding")?
    } else {
        ProgressBar::hidden(files.len(), "Decoding")?
    };

    let batch = read_wavs_with(&files, |_, _| progress.inc())?;
    progress.finish();

    if json {
        let summaries: IndexMap<_, _> = batch
            .iter()
            .map(|(name, recording)| (name.as_str(), recording.summary()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for (name, recording) in &batch {
        println!("{}", name);
        println!("  fs:                {} Hz", recording.sample_rate());
        println!("  initial_bit_depth: {}", recording.initial_bit_depth());
        println!("  channels:          {}", recording.num_channels());
        println!("  samples:           {}", recording.len());
        println!("  duration:          {:.3} s", recording.duration_secs());
    }

    Ok(())
}

/// Re-encode a WAV file with the given integer encoding.
pub fn convert(input: &Path, output: &Path, encoding: SampleEncoding) -> Result<()> {
    info!("Converting {} -> {} ({})", input.display(), output.display(), encoding);

    let recording = read_wav(input)?;
    write_recording(output, &recording, encoding)?;

    println!(
        "Wrote {}: {} channel(s), {} samples, {}-bit -> {}",
        output.display(),
        recording.num_channels(),
        recording.len(),
        recording.initial_bit_depth(),
        encoding
    );

    Ok(())
}

/// Parse a tab-separated table and print each column's length and range.
pub fn table(path: &Path) -> Result<()> {
    info!("Reading table: {}", path.display());

    let table = read_table(path)?;

    println!("{:<24} {:>8} {:>14} {:>14}", "column", "rows", "min", "max");
    println!("{:-<63}", "");
    for (name, values) in &table {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if values.is_empty() {
            println!("{:<24} {:>8} {:>14} {:>14}", name, 0, "-", "-");
        } else {
            println!("{:<24} {:>8} {:>14.6} {:>14.6}", name, values.len(), min, max);
        }
    }

    Ok(())
}

/// Expand directories into the WAV files below them, keeping explicit files
fn collect_wav_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(AudiolibError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && is_wav(entry.path()))
            .map(|entry| entry.into_path())
            .collect();
        found.sort();
        files.extend(found);
    }

    Ok(files)
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

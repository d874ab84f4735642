//! Boundary to whatever supplies input and stores results: a file picker, a
//! download prompt, a directory on disk.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::codec;
use crate::error::Result;
use crate::symbol::Symbol;

pub trait InputSource {
    fn read_input(&mut self) -> Result<Vec<u8>>;
}

pub trait OutputSink {
    fn write_output(&mut self, bytes: &[u8], suggested_name: &str) -> Result<()>;
}

/// Names offered to the sink for each kind of result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub compressed: String,
    pub decompressed: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            compressed: "compressed.huff".to_string(),
            decompressed: "decompressed.txt".to_string(),
        }
    }
}

/// Sizes of one compress or decompress run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferStats {
    pub input_bytes: usize,
    pub output_bytes: usize,
}

impl TransferStats {
    /// Output size as a fraction of input size.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }
}

/// Reads a whole file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputSource for FileSource {
    fn read_input(&mut self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
}

/// Writes each output to `dir/suggested_name`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for DirectorySink {
    fn write_output(&mut self, bytes: &[u8], suggested_name: &str) -> Result<()> {
        fs::write(self.dir.join(suggested_name), bytes)?;
        Ok(())
    }
}

/// Keeps outputs in memory, in the order they were written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub outputs: Vec<(String, Vec<u8>)>,
}

impl OutputSink for MemorySink {
    fn write_output(&mut self, bytes: &[u8], suggested_name: &str) -> Result<()> {
        self.outputs.push((suggested_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

impl InputSource for &[u8] {
    fn read_input(&mut self) -> Result<Vec<u8>> {
        Ok(self.to_vec())
    }
}

/// Read from `source`, compress as `S` symbols, hand the artifact to `sink`.
pub fn compress_with<S: Symbol>(
    source: &mut impl InputSource,
    sink: &mut impl OutputSink,
    names: &OutputNames,
) -> Result<TransferStats> {
    let input = source.read_input()?;
    let compressed = codec::compress_symbols(&S::from_input(&input)?)?;
    sink.write_output(&compressed, &names.compressed)?;

    let stats = TransferStats {
        input_bytes: input.len(),
        output_bytes: compressed.len(),
    };
    info!(
        original = stats.input_bytes,
        compressed = stats.output_bytes,
        ratio = stats.ratio(),
        name = %names.compressed,
        "compression complete"
    );
    Ok(stats)
}

/// Read an artifact from `source`, decompress as `S` symbols, hand the
/// result to `sink`.
pub fn decompress_with<S: Symbol>(
    source: &mut impl InputSource,
    sink: &mut impl OutputSink,
    names: &OutputNames,
) -> Result<TransferStats> {
    let input = source.read_input()?;
    let decompressed = S::to_output(&codec::decompress_symbols::<S>(&input)?);
    sink.write_output(&decompressed, &names.decompressed)?;

    let stats = TransferStats {
        input_bytes: input.len(),
        output_bytes: decompressed.len(),
    };
    info!(
        compressed = stats.input_bytes,
        decompressed = stats.output_bytes,
        name = %names.decompressed,
        "decompression complete"
    );
    Ok(stats)
}

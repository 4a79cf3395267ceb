use crate::error::CliError;
use bytesize::ByteSize;
use core::{fmt, time::Duration};
use floodsquare::{pbm::write_portable_bitmap, GridView, TransformObserver, TransformStep};
use log::{LevelFilter, Log, Metadata, Record};
use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

/// Represents throughput in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    /// Computes the rate at which `bytes` were processed in `elapsed`.
    pub fn measure(bytes: usize, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            Self(ByteSize((bytes as f64 / secs) as u64))
        } else {
            Self(ByteSize(0))
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}

pub fn print_summary(action: &str, input_len: usize, output_len: usize, elapsed: Duration) {
    println!("=== {action} Complete ===");
    println!("Time taken: {elapsed:.2?}");
    println!("Input size: {}", ByteSize(input_len as u64));
    println!("Output size: {}", ByteSize(output_len as u64));
    println!("Throughput: {}", Throughput::measure(input_len, elapsed));
}

/// Canonicalizes the `--dump` directory, creating it if it doesn't exist.
pub fn create_dump_dir(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Writes the grid after every transform pass to `{prefix}_{index:04}.pbm`.
///
/// The first write error stops further dumps and is reported by [`BitmapDumper::finish`].
pub struct BitmapDumper {
    dir: PathBuf,
    prefix: &'static str,
    written: usize,
    error: Option<CliError>,
}

impl BitmapDumper {
    pub fn new(dir: PathBuf, prefix: &'static str) -> Self {
        Self {
            dir,
            prefix,
            written: 0,
            error: None,
        }
    }

    /// Returns the number of bitmaps written, or the first error hit.
    pub fn finish(self) -> Result<usize, CliError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.written),
        }
    }
}

impl TransformObserver for BitmapDumper {
    fn on_transform(&mut self, step: TransformStep, grid: GridView<'_>) {
        if self.error.is_some() {
            return;
        }

        let path = self.dir.join(format!("{}_{:04}.pbm", self.prefix, step.index));
        match write_bitmap(&path, grid) {
            Ok(()) => self.written += 1,
            Err(source) => self.error = Some(CliError::Dump { path, source }),
        }
    }
}

fn write_bitmap(path: &Path, grid: GridView<'_>) -> io::Result<()> {
    let file = File::create(path)?;
    write_portable_bitmap(grid, BufWriter::new(file))
}

/// Prints `log` records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Routes `log` output to stderr. Warnings are always shown; `verbose` adds
/// per-call and per-pass detail.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

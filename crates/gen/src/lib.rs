// crates/gen/src/lib.rs
//! Generates `line: <n>\n` files of a given size for counting at scale.

pub mod error;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{debug, info};

pub use error::{GenError, Result};
use countline_shared_kernel::FileSize;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Files generated when no sizes are given.
pub const DEFAULT_DATA_SIZES: [(&str, u64); 6] = [
    ("Tiny", KIB),
    ("Small", MIB),
    ("Medium", 10 * MIB),
    ("Large", 50 * MIB),
    ("Huge", 100 * MIB),
    ("Giant", 1024 * MIB),
];

/// A named target size; written to `data_<name>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSize {
    pub name: String,
    pub size: u64,
}

impl DataSize {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }

    pub fn file_name(&self) -> String {
        format!("data_{}.txt", self.name)
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_DATA_SIZES.iter().map(|&(name, size)| Self::new(name, size)).collect()
    }
}

/// Parses `NAME=BYTES`.
impl FromStr for DataSize {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| GenError::InvalidDataSize {
            spec: s.to_string(),
            reason: reason.to_string(),
        };
        let (name, size) = s.split_once('=').ok_or_else(|| invalid("expected NAME=BYTES"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        let size = size.trim().parse::<u64>().map_err(|e| invalid(&e.to_string()))?;
        Ok(Self::new(name, size))
    }
}

/// What was written by [`write_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedStats {
    pub bytes: FileSize,
    pub lines: u64,
}

/// Writes `line: 1\n`, `line: 2\n`, ... until at least `target` bytes are
/// written. At least one line is always written.
pub fn write_lines<W: Write>(writer: &mut W, target: u64) -> io::Result<GeneratedStats> {
    let mut written = 0u64;
    let mut lines = 0u64;
    loop {
        lines += 1;
        let line = format!("line: {lines}\n");
        writer.write_all(line.as_bytes())?;
        written += line.len() as u64;
        if written >= target {
            break;
        }
    }
    Ok(GeneratedStats { bytes: FileSize::new(written), lines })
}

/// Result of one entry of [`Generator::generate_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated { path: PathBuf, stats: GeneratedStats },
    /// The file already existed with at least the target size.
    Skipped { path: PathBuf, size: FileSize },
}

/// Writer that refuses every write.
struct RefusingWriter;

impl Write for RefusingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("forced error"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    sizes: Vec<DataSize>,
    force_write_failure: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DataSize::defaults())
    }
}

impl Generator {
    pub fn new(sizes: Vec<DataSize>) -> Self {
        Self { sizes, force_write_failure: false }
    }

    /// Makes every line write fail; used to exercise the error path.
    #[must_use]
    pub const fn with_forced_write_failure(mut self, force: bool) -> Self {
        self.force_write_failure = force;
        self
    }

    pub fn sizes(&self) -> &[DataSize] {
        &self.sizes
    }

    /// Generates every configured file under `dir`, creating `dir` if needed.
    pub fn generate_all(&self, dir: &Path) -> Result<Vec<Outcome>> {
        fs::create_dir_all(dir).map_err(|source| GenError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut outcomes = Vec::with_capacity(self.sizes.len());
        for data in &self.sizes {
            let path = dir.join(data.file_name());

            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() && meta.len() >= data.size => {
                    let size = FileSize::new(meta.len());
                    info!("  - {} ... OK (exists, {size:#})", path.display());
                    outcomes.push(Outcome::Skipped { path, size });
                    continue;
                }
                _ => {}
            }

            let stats = self.generate_file(data.size, &path)?;
            outcomes.push(Outcome::Generated { path, stats });
        }
        Ok(outcomes)
    }

    /// Writes one file of at least `target` bytes to `path`.
    pub fn generate_file(&self, target: u64, path: &Path) -> Result<GeneratedStats> {
        debug!("  - {} ...", path.display());
        let file = File::create(path).map_err(|source| GenError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let write_error = |source: io::Error| GenError::Write { path: path.to_path_buf(), source };

        let stats = if self.force_write_failure {
            write_lines(&mut RefusingWriter, target).map_err(write_error)?
        } else {
            let mut writer = BufWriter::new(file);
            let stats = write_lines(&mut writer, target).map_err(write_error)?;
            writer.flush().map_err(write_error)?;
            stats
        };

        info!(
            "  - {}, size: {:#}, line: {} ... OK",
            path.display(),
            stats.bytes,
            stats.lines
        );
        Ok(stats)
    }
}

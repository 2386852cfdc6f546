use anyhow::Result;
use memmap2::{Mmap, MmapOptions};
use std::ops::Deref;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Read at most this many bytes per input; detection cost is linear in input size
    pub max_bytes: Option<usize>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
            max_bytes: None,
        }
    }
}

/// Statistics for one input
#[derive(Debug, Clone)]
pub struct InputStats {
    pub source: String,
    pub bytes_read: u64,
    /// True when `max_bytes` cut the input short
    pub truncated: bool,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Input bytes, either read into memory or borrowed from a file mapping
pub enum InputBytes {
    Owned(Vec<u8>),
    Mapped { map: Mmap, len: usize },
}

impl Deref for InputBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputBytes::Owned(bytes) => bytes,
            InputBytes::Mapped { map, len } => &map[..*len],
        }
    }
}

/// Reads whole inputs as raw bytes; no decoding happens here since the
/// scanner tolerates any encoding damage
pub struct InputReader {
    config: ReaderConfig,
}

impl InputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file with async buffered I/O, honoring `max_bytes`
    pub async fn read_file<P: AsRef<Path>>(&self, file_path: P) -> Result<(InputBytes, InputStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();
        let source = path.display().to_string();

        debug!("Starting async read of file: {}", source);

        // WHY: early validation prevents partial processing and provides clear error context
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                return self.failed(source, format!("Failed to open file {}: {}", path.display(), e), start_time);
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        match self.read_capped(reader).await {
            Ok((bytes, truncated)) => Ok(self.finished(source, bytes, truncated, start_time)),
            Err(e) => self.failed(source, format!("Failed to read file {}: {}", path.display(), e), start_time),
        }
    }

    /// Read standard input to end (or `max_bytes`)
    pub async fn read_stdin(&self) -> Result<(InputBytes, InputStats)> {
        let start_time = Instant::now();
        let source = "<stdin>".to_string();
        let reader = BufReader::with_capacity(self.config.buffer_size, tokio::io::stdin());
        match self.read_capped(reader).await {
            Ok((bytes, truncated)) => Ok(self.finished(source, bytes, truncated, start_time)),
            Err(e) => self.failed(source, format!("Failed to read standard input: {e}"), start_time),
        }
    }

    /// Map a file into memory instead of copying it
    pub fn read_file_mmap<P: AsRef<Path>>(&self, file_path: P) -> Result<(InputBytes, InputStats)> {
        let path = file_path.as_ref();
        let start_time = Instant::now();
        let source = path.display().to_string();

        let mapped = std::fs::File::open(path).and_then(|file| {
            let file_len = file.metadata()?.len() as usize;
            if file_len == 0 {
                return Ok(None);
            }
            // SAFETY: the mapping is read-only and dropped before the process
            // exits; concurrent truncation by another process is not guarded against
            let map = unsafe { MmapOptions::new().map(&file)? };
            Ok(Some(map))
        });

        match mapped {
            Ok(None) => Ok(self.finished(source, InputBytes::Owned(Vec::new()), false, start_time)),
            Ok(Some(map)) => {
                let (len, truncated) = match self.config.max_bytes {
                    Some(limit) if map.len() > limit => (limit, true),
                    _ => (map.len(), false),
                };
                Ok(self.finished(source, InputBytes::Mapped { map, len }, truncated, start_time))
            }
            Err(e) => self.failed(source, format!("Failed to map file {}: {}", path.display(), e), start_time),
        }
    }

    /// Read several files sequentially
    pub async fn read_files_batch<P: AsRef<Path>>(
        &self,
        file_paths: &[P],
        use_mmap: bool,
    ) -> Result<Vec<(InputBytes, InputStats)>> {
        info!("Starting batch read of {} inputs", file_paths.len());

        let mut results = Vec::with_capacity(file_paths.len());
        // WHY: one file open at a time; every input stays buffered until the
        // batch returns, so callers bound memory with max_bytes
        for file_path in file_paths {
            let result = if use_mmap {
                self.read_file_mmap(file_path)?
            } else {
                self.read_file(file_path).await?
            };
            results.push(result);
        }

        info!("Completed batch read of {} inputs", results.len());
        Ok(results)
    }

    async fn read_capped<R: AsyncRead + Unpin>(&self, reader: R) -> std::io::Result<(InputBytes, bool)> {
        let mut bytes = Vec::new();
        let truncated = match self.config.max_bytes {
            Some(limit) => {
                // one extra byte tells a capped read from an input of exactly `limit`
                reader.take(limit as u64 + 1).read_to_end(&mut bytes).await?;
                let truncated = bytes.len() > limit;
                bytes.truncate(limit);
                truncated
            }
            None => {
                let mut reader = reader;
                reader.read_to_end(&mut bytes).await?;
                false
            }
        };
        Ok((InputBytes::Owned(bytes), truncated))
    }

    fn finished(
        &self,
        source: String,
        bytes: InputBytes,
        truncated: bool,
        start_time: Instant,
    ) -> (InputBytes, InputStats) {
        let stats = InputStats {
            source,
            bytes_read: bytes.len() as u64,
            truncated,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: None,
        };
        if truncated {
            info!("Input {} capped at {} bytes", stats.source, stats.bytes_read);
        }
        debug!("Read {}: {} bytes in {}ms", stats.source, stats.bytes_read, stats.duration_ms);
        (bytes, stats)
    }

    fn failed(&self, source: String, error_msg: String, start_time: Instant) -> Result<(InputBytes, InputStats)> {
        warn!("{}", error_msg);
        if self.config.fail_fast {
            return Err(anyhow::anyhow!(error_msg));
        }
        let stats = InputStats {
            source,
            bytes_read: 0,
            truncated: false,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: Some(error_msg),
        };
        Ok((InputBytes::Owned(Vec::new()), stats))
    }
}

//! Rolling Logger
//!
//! File logger with size-based rotation and a circular buffer of the most
//! recent lines. `log` records are bridged into a `tracing-subscriber` fmt
//! layer that writes through the rolling sink.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Size at which the active log file is rotated
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Number of rotated files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;
/// Lines kept in memory for `recent_lines`
pub const DEFAULT_BUFFER_LINES: usize = 500;

static LOGGER: OnceLock<SharedSink> = OnceLock::new();

/// Append-only log file that rotates once it grows past `max_bytes`.
///
/// Rotated files are named `<app>.log.1` (newest) up to `<app>.log.<max_files>`.
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
    recent: VecDeque<String>,
    buffer_lines: usize,
    partial: String,
}

impl RollingFile {
    pub fn open(
        dir: impl Into<PathBuf>,
        app_name: &str,
        max_bytes: u64,
        max_files: usize,
    ) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path(&dir, app_name, 0))?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir,
            app_name: app_name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
            recent: VecDeque::new(),
            buffer_lines: DEFAULT_BUFFER_LINES,
            partial: String::new(),
        })
    }

    pub fn with_buffer_lines(mut self, lines: usize) -> Self {
        self.buffer_lines = lines;
        self
    }

    /// Path of the active log file
    pub fn path(&self) -> PathBuf {
        log_path(&self.dir, &self.app_name, 0)
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.recent.iter().cloned().collect()
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            self.file = File::create(self.path())?;
        } else {
            let oldest = log_path(&self.dir, &self.app_name, self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files).rev() {
                let from = log_path(&self.dir, &self.app_name, index);
                if from.exists() {
                    fs::rename(&from, log_path(&self.dir, &self.app_name, index + 1))?;
                }
            }
            fs::rename(self.path(), log_path(&self.dir, &self.app_name, 1))?;
            self.file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.path())?;
        }

        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.buffer_lines == 0 {
            return;
        }
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            if self.recent.len() == self.buffer_lines {
                self.recent.pop_front();
            }
            self.recent.push_back(line.trim_end().to_string());
        }
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        self.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn log_path(dir: &Path, app_name: &str, index: usize) -> PathBuf {
    if index == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.log.{}", app_name, index))
    }
}

#[derive(Clone)]
struct SharedSink(Arc<Mutex<RollingFile>>);

impl SharedSink {
    fn lock(&self) -> MutexGuard<'_, RollingFile> {
        // A panic mid-write leaves the file usable; keep logging.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

/// Install the global logger writing to `<log_dir>/<app_name>.log`.
///
/// Records emitted through the `log` facade or `tracing` both end up in the
/// file and the in-memory buffer. Can only succeed once per process.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Err("Logger already initialized".to_string());
    }

    let mut file = RollingFile::open(
        log_dir.as_ref(),
        app_name,
        DEFAULT_MAX_BYTES,
        DEFAULT_MAX_FILES,
    )
    .map_err(|e| format!("Failed to open log file: {}", e))?;

    writeln!(
        file,
        "=== {} started at {} ===",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    )
    .map_err(|e| format!("Failed to write log header: {}", e))?;

    let sink = SharedSink(Arc::new(Mutex::new(file)));
    let writer = sink.clone();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    LOGGER
        .set(sink)
        .map_err(|_| "Logger already initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    emit(log::Level::Info, msg)
}

pub fn warn(msg: &str) -> Result<(), String> {
    emit(log::Level::Warn, msg)
}

pub fn error(msg: &str) -> Result<(), String> {
    emit(log::Level::Error, msg)
}

fn emit(level: log::Level, msg: &str) -> Result<(), String> {
    if LOGGER.get().is_none() {
        return Err("Logger not initialized".to_string());
    }
    log::log!(target: "rolling_logger", level, "{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .map(|sink| sink.lock().recent_lines())
        .unwrap_or_default()
}

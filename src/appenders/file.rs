//! File appender implementation
//!
//! The file is opened in append mode (created if absent) for every entry and
//! the whole line goes out in a single `write_all`, so concurrent writers
//! interleave at line granularity on platforms with atomic small appends.

use crate::core::{Appender, FormatterConfig, LogEntry, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileAppender {
    path: PathBuf,
    formatter: FormatterConfig,
    #[cfg(feature = "file")]
    lock_file: bool,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            formatter: FormatterConfig::default(),
            #[cfg(feature = "file")]
            lock_file: false,
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    /// Hold an exclusive advisory lock on the file while appending
    ///
    /// ```no_run
    /// use release_log::appenders::FileAppender;
    ///
    /// let appender = FileAppender::new("/var/log/release.log").with_file_lock(true);
    /// ```
    #[cfg(feature = "file")]
    #[must_use]
    pub fn with_file_lock(mut self, lock_file: bool) -> Self {
        self.lock_file = lock_file;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LoggerError::io_operation("opening log target", self.path.display().to_string(), e)
            })
    }

    fn write_line(&self, file: &mut File, line: &str) -> Result<()> {
        file.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation("appending log line", self.path.display().to_string(), e)
        })
    }

    #[cfg(feature = "file")]
    fn write_entry_line(&self, file: &mut File, line: &str) -> Result<()> {
        use fs2::FileExt;

        if !self.lock_file {
            return self.write_line(file, line);
        }

        file.lock_exclusive()
            .map_err(|_| LoggerError::file_lock(self.path.display().to_string()))?;
        let result = self.write_line(file, line);
        let _ = FileExt::unlock(&*file);
        result
    }

    #[cfg(not(feature = "file"))]
    fn write_entry_line(&self, file: &mut File, line: &str) -> Result<()> {
        self.write_line(file, line)
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut line = self.formatter.render(entry);
        line.push('\n');

        let mut file = self.open()?;
        self.write_entry_line(&mut file, &line)
    }

    fn flush(&mut self) -> Result<()> {
        // Every append opens, writes and closes the file; nothing is buffered.
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

//! Size-rotating line writer for the trace file.
//!
//! Lines are appended to a single file. Once the next line would push the
//! file past [`RotationPolicy::max_bytes`], the file is renamed to a
//! timestamped backup and a fresh one is started. Only the newest
//! [`RotationPolicy::max_backups`] backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB per file, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe appending writer with size-based rotation.
///
/// Backups are named `<file name>.<UTC timestamp>-<sequence>`, e.g.
/// `restloop-otlp.json.20240501T101500.123-0001`, so name order is age order
/// even when several rotations land in the same millisecond.
pub struct RotatingWriter {
    path: PathBuf,
    policy: RotationPolicy,
    state: Mutex<WriterState>,
}

struct WriterState {
    /// Opened lazily on the first write.
    file: Option<File>,
    rotations: u32,
}

impl RotatingWriter {
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            state: Mutex::new(WriterState {
                file: None,
                rotations: 0,
            }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` and a newline, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotating, opening, writing or flushing fails,
    /// or if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map_or(0, |m| m.len());
        if current > 0 && current + incoming > self.policy.max_bytes {
            state.file = None;
            state.rotations += 1;
            self.rotate(state.rotations)?;
        }

        if state.file.is_none() {
            state.file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }
        let Some(file) = state.file.as_mut() else {
            return Err(io::Error::other("trace file is not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self, sequence: u32) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");

        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".{stamp}-{sequence:04}"));

        fs::rename(&self.path, self.path.with_file_name(name))?;
        self.prune_backups()
    }

    /// Backup files of this writer, oldest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let prefix = format!(
            "{}.",
            self.path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| io::Error::other("trace file name is not UTF-8"))?
        );

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.policy.max_backups);
        for old in &backups[..excess] {
            // A backup that cannot be removed is retried on the next rotation.
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

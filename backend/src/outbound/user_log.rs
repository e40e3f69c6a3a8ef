//! Append-only JSON Lines log of fetched users.
//!
//! Every [`UserLog::append`] call opens the file in append mode, writes one
//! JSON object per line, flushes, and closes it again. A mutex shared by all
//! clones of the adapter is held across that whole sequence, so lines from
//! concurrent requests never interleave.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::{Dir, File, OpenOptions};
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{UserLog, UserLogError};

/// Default log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "users.json";

/// [`UserLog`] writing newline-delimited JSON to a single file.
#[derive(Debug, Clone)]
pub struct JsonLinesUserLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonLinesUserLog {
    /// Create a log that appends to `path`. Nothing is opened until the
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonLinesUserLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

#[async_trait]
impl UserLog for JsonLinesUserLog {
    async fn append(&self, users: &[User]) -> Result<(), UserLogError> {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);
        let users = users.to_vec();

        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            append_locked(&path, &users)
        })
        .await
        .map_err(|err| UserLogError::write(err.to_string()))?
    }
}

fn append_locked(path: &Path, users: &[User]) -> Result<(), UserLogError> {
    let mut file = open_for_append(path)?;
    for user in users {
        let mut line =
            serde_json::to_vec(user).map_err(|err| UserLogError::encode(err.to_string()))?;
        line.push(b'\n');
        file.write_all(&line)
            .map_err(|err| UserLogError::write(err.to_string()))?;
    }
    file.flush()
        .map_err(|err| UserLogError::write(err.to_string()))?;
    debug!(path = %path.display(), count = users.len(), "appended users to log");
    Ok(())
}

fn open_for_append(path: &Path) -> Result<File, UserLogError> {
    let display = path.display().to_string();
    let file_name = path
        .file_name()
        .ok_or_else(|| UserLogError::open(&display, "path has no file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| UserLogError::open(&display, err.to_string()))?;
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    dir.open_with(file_name, &options)
        .map_err(|err| UserLogError::open(&display, err.to_string()))
}

//! JSON-file snapshot store.
//!
//! Layout under the data directory:
//! - `banks_<YYYY-MM-DD>.json` dated archive copy
//! - `latest.json` pointer copy with identical content
//! - `changes_<YYYY-MM-DD>.json` change report, only for runs with changes
//!
//! Files are written next to their target as `*.tmp` and renamed into place.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use super::storage_errors::PersistenceError;
use super::storage_traits::SnapshotStore;
use crate::constants::{CHANGES_FILE_PREFIX, LATEST_SNAPSHOT_FILE, SNAPSHOT_FILE_PREFIX};
use crate::rankings::{ChangeRecord, Snapshot};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PersistenceError + '_ {
    move |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

fn to_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<String, PersistenceError> {
    serde_json::to_string_pretty(value).map_err(|source| PersistenceError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}

/// Snapshot store over a directory of pretty-printed JSON files.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    data_dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn latest_path(&self) -> PathBuf {
        self.data_dir.join(LATEST_SNAPSHOT_FILE)
    }

    pub fn dated_path(&self, date: NaiveDate) -> PathBuf {
        self.data_dir
            .join(format!("{}{}.json", SNAPSHOT_FILE_PREFIX, date.format("%Y-%m-%d")))
    }

    pub fn changes_path(&self, date: NaiveDate) -> PathBuf {
        self.data_dir
            .join(format!("{}{}.json", CHANGES_FILE_PREFIX, date.format("%Y-%m-%d")))
    }

    /// The archived snapshot for `date`, if one was written.
    pub async fn read_dated(&self, date: NaiveDate) -> Result<Option<Snapshot>, PersistenceError> {
        read_json(&self.dated_path(date)).await
    }

    /// The change report for `date`, if one was written.
    pub async fn read_changes(&self, date: NaiveDate) -> Result<Option<Vec<String>>, PersistenceError> {
        read_json(&self.changes_path(date)).await
    }

    async fn ensure_dir(&self) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(io_error(&self.data_dir))
    }

    /// Remove a freshly renamed dated copy and put `backup` back in its place.
    async fn rollback_dated(&self, dated: &Path, backup: Option<&Path>) {
        if let Err(e) = fs::remove_file(dated).await {
            warn!("Rollback could not remove {}: {}", dated.display(), e);
        }
        if let Some(backup) = backup {
            if let Err(e) = fs::rename(backup, dated).await {
                warn!("Rollback could not restore {}: {}", dated.display(), e);
            }
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(path)(e)),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| PersistenceError::Serialization {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_staged(path: &Path, contents: &str) -> Result<PathBuf, PersistenceError> {
    let staged = with_suffix(path, ".tmp");
    fs::write(&staged, contents).await.map_err(io_error(&staged))?;
    Ok(staged)
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        debug!("Could not remove staged file {}: {}", path.display(), e);
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn write(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        self.ensure_dir().await?;

        let dated = self.dated_path(snapshot.snapshot_date());
        let latest = self.latest_path();
        let json = to_json(snapshot, &dated)?;

        let dated_staged = write_staged(&dated, &json).await?;
        let latest_staged = match write_staged(&latest, &json).await {
            Ok(path) => path,
            Err(e) => {
                discard(&dated_staged).await;
                return Err(e);
            }
        };

        // Keep the current dated copy aside so a failed pointer update can restore it.
        let backup = with_suffix(&dated, ".bak");
        let had_dated = fs::try_exists(&dated).await.map_err(io_error(&dated))?;
        if had_dated {
            if let Err(e) = fs::rename(&dated, &backup).await {
                discard(&dated_staged).await;
                discard(&latest_staged).await;
                return Err(io_error(&dated)(e));
            }
        }
        let backup = had_dated.then_some(backup.as_path());

        if let Err(e) = fs::rename(&dated_staged, &dated).await {
            discard(&dated_staged).await;
            discard(&latest_staged).await;
            if let Some(backup) = backup {
                if let Err(restore) = fs::rename(backup, &dated).await {
                    warn!("Could not restore {}: {}", dated.display(), restore);
                }
            }
            return Err(io_error(&dated)(e));
        }

        if let Err(e) = fs::rename(&latest_staged, &latest).await {
            discard(&latest_staged).await;
            self.rollback_dated(&dated, backup).await;
            return Err(io_error(&latest)(e));
        }

        if let Some(backup) = backup {
            discard(backup).await;
        }

        info!(
            "Snapshot with {} banks saved to {} and {}",
            snapshot.bank_count,
            dated.display(),
            latest.display()
        );
        Ok(())
    }

    async fn read_latest(&self) -> Result<Option<Snapshot>, PersistenceError> {
        read_json(&self.latest_path()).await
    }

    async fn write_changes(
        &self,
        date: NaiveDate,
        changes: &[ChangeRecord],
    ) -> Result<(), PersistenceError> {
        self.ensure_dir().await?;

        let path = self.changes_path(date);
        let descriptions: Vec<&str> = changes.iter().map(|c| c.description.as_str()).collect();
        let json = to_json(&descriptions, &path)?;

        let staged = write_staged(&path, &json).await?;
        if let Err(e) = fs::rename(&staged, &path).await {
            discard(&staged).await;
            return Err(io_error(&path)(e));
        }

        info!("Change report with {} entries saved to {}", changes.len(), path.display());
        Ok(())
    }
}

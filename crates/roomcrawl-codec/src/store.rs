//! Room set storage: one directory per set, one file per room.
//!
//! Directories are named `<prefix>.rooms.<tag>`, where the tag defaults to
//! the process id. Loading picks the most recently modified directory
//! with the right prefix.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use roomcrawl_graph::{GraphConfig, RoomSet};
use serde::{Deserialize, Serialize};

use crate::{RoomCodec, StoreError, TextCodec};

/// Where room sets are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory that holds the room set directories.
    pub base_dir: PathBuf,

    /// Directory name prefix, before `.rooms.`.
    pub prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            prefix: "roomcrawl".to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a config rooted at `base_dir` with the default prefix.
    pub fn in_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Default::default()
        }
    }

    fn dir_prefix(&self) -> String {
        format!("{}.rooms.", self.prefix)
    }
}

/// Saves and loads room sets through a [`RoomCodec`].
#[derive(Debug, Clone)]
pub struct RoomStore<C: RoomCodec = TextCodec> {
    config: StoreConfig,
    codec: C,
}

impl RoomStore<TextCodec> {
    /// Create a store that uses the text room file format.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_codec(config, TextCodec)
    }
}

impl<C: RoomCodec> RoomStore<C> {
    /// Create a store with a custom codec.
    pub fn with_codec(config: StoreConfig, codec: C) -> Self {
        Self { config, codec }
    }

    /// Writes `set` to a directory tagged with this process's id.
    pub fn save(&self, set: &RoomSet) -> Result<PathBuf, StoreError> {
        self.save_as(set, &std::process::id().to_string())
    }

    /// Writes `set` to `<prefix>.rooms.<tag>`, replacing any directory of
    /// that name. Returns the directory path.
    pub fn save_as(&self, set: &RoomSet, tag: &str) -> Result<PathBuf, StoreError> {
        let dir = self
            .config
            .base_dir
            .join(format!("{}{tag}", self.config.dir_prefix()));
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        }
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        for (room, text) in set.iter().zip(self.codec.encode(set)) {
            let path = dir.join(&room.name);
            fs::write(&path, text).map_err(|e| StoreError::io(&path, e))?;
        }

        tracing::info!(dir = %dir.display(), rooms = set.len(), "room set saved");
        Ok(dir)
    }

    /// Finds the newest room set directory and lists its files.
    ///
    /// Directories are compared by modification time; ties go to the
    /// lexically greater name. Files come back sorted by path.
    pub fn locate(&self) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.newest_dir()?;
        let mut files = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| StoreError::io(&dir, e))? {
            let entry = entry.map_err(|e| StoreError::io(&dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| StoreError::io(&path, e))?;
            if file_type.is_file() {
                files.push(path);
            }
        }
        files.sort();
        tracing::debug!(dir = %dir.display(), files = files.len(), "room set located");
        Ok(files)
    }

    /// Loads the newest room set and checks it against `config`.
    pub fn load(&self, config: &GraphConfig) -> Result<RoomSet, StoreError> {
        let files = self.locate()?;
        if files.len() != config.room_count {
            let dir = files
                .first()
                .and_then(|f| f.parent())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.config.base_dir.clone());
            return Err(StoreError::WrongFileCount {
                dir,
                expected: config.room_count,
                found: files.len(),
            });
        }

        let mut records = Vec::with_capacity(files.len());
        for path in &files {
            let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
            let record = self
                .codec
                .decode_room(&text)
                .map_err(|source| StoreError::Decode {
                    path: path.clone(),
                    source,
                })?;
            records.push(record);
        }

        let set = RoomSet::resolve(records, config).map_err(crate::CodecError::from)?;
        Ok(set)
    }

    fn newest_dir(&self) -> Result<PathBuf, StoreError> {
        let base = &self.config.base_dir;
        let prefix = self.config.dir_prefix();
        let mut newest: Option<(SystemTime, String, PathBuf)> = None;

        for entry in fs::read_dir(base).map_err(|e| StoreError::io(base, e))? {
            let entry = entry.map_err(|e| StoreError::io(base, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(&prefix) {
                continue;
            }
            let path = entry.path();
            let meta = entry.metadata().map_err(|e| StoreError::io(&path, e))?;
            if !meta.is_dir() {
                continue;
            }
            let modified = meta.modified().map_err(|e| StoreError::io(&path, e))?;
            let candidate = (modified, name, path);
            if newest
                .as_ref()
                .is_none_or(|best| (&candidate.0, &candidate.1) > (&best.0, &best.1))
            {
                newest = Some(candidate);
            }
        }

        newest
            .map(|(_, _, path)| path)
            .ok_or_else(|| StoreError::NoRoomSet(base.clone()))
    }
}

//! Wall-clock side channel for roomcrawl.
//!
//! The current time is written to a single side artifact (a small text
//! file) and read back. Only one artifact exists, so a query holds one
//! lock across the write and the read-back: concurrent queries queue up
//! behind each other and each sees its own write.
//!
//! The write runs on a blocking thread that the query joins before
//! reading, so a query never returns before its write has landed.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Long-form 12-hour time, e.g. `3:21PM, Tuesday, May 14, 2024`.
pub const DEFAULT_FORMAT: &str = "%-I:%M%p, %A, %B %-d, %Y";

/// Where the time is written and how it is formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Path of the side artifact. Overwritten on every write.
    pub artifact: PathBuf,
    /// `strftime`-style format string.
    pub format: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from("currentTime.txt"),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl ClockConfig {
    /// Create a config writing to `artifact` with the default format.
    pub fn at(artifact: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from a time query.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The side artifact couldn't be written or read.
    #[error("time artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The format string contains an unknown specifier.
    #[error("invalid time format {0:?}")]
    InvalidFormat(String),

    /// The writer thread panicked or was cancelled.
    #[error("time writer failed: {0}")]
    Writer(#[from] tokio::task::JoinError),
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Formats `time` with a `strftime`-style format string.
///
/// Unlike `DateTime::format(..).to_string()`, an unknown specifier is
/// an error rather than a panic.
pub fn format_time<Tz>(time: &DateTime<Tz>, format: &str) -> Result<String, ClockError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", time.format(format))
        .map_err(|_| ClockError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Answers "what time is it?" for the game.
///
/// Implemented by [`FileClock`]; tests can substitute their own.
pub trait TimeService: Send + Sync + 'static {
    /// Computes the current time and returns it formatted.
    ///
    /// Safe to call concurrently. Each call reflects a time taken no
    /// earlier than the call itself.
    fn query(&self) -> impl std::future::Future<Output = Result<String, ClockError>> + Send;
}

/// A [`TimeService`] backed by a single text file.
#[derive(Debug)]
pub struct FileClock {
    config: ClockConfig,
    lock: Mutex<()>,
}

impl FileClock {
    /// Create a clock. Nothing is written until the first query.
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            lock: Mutex::new(()),
        }
    }

    /// Path of the side artifact.
    pub fn artifact(&self) -> &Path {
        &self.config.artifact
    }

    /// Writes the current time to the artifact and returns what was written.
    pub async fn write(&self) -> Result<String, ClockError> {
        let _guard = self.lock.lock().await;
        self.write_locked().await
    }

    /// Returns the most recently written time.
    pub async fn read(&self) -> Result<String, ClockError> {
        let _guard = self.lock.lock().await;
        self.read_locked().await
    }

    /// Runs the write on its own thread and waits for it. Caller holds the lock.
    async fn write_locked(&self) -> Result<String, ClockError> {
        let path = self.config.artifact.clone();
        let format = self.config.format.clone();

        let writer = tokio::task::spawn_blocking(move || {
            let text = format_time(&Local::now(), &format)?;
            std::fs::write(&path, format!("{text}\n"))
                .map_err(|source| ClockError::Io { path, source })?;
            Ok::<_, ClockError>(text)
        });
        let text = writer.await??;

        trace!(time = %text, "time written");
        Ok(text)
    }

    /// Caller holds the lock.
    async fn read_locked(&self) -> Result<String, ClockError> {
        let path = &self.config.artifact;
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ClockError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl TimeService for FileClock {
    async fn query(&self) -> Result<String, ClockError> {
        // Held across write and read so another query can't overwrite
        // the artifact in between.
        let _guard = self.lock.lock().await;
        self.write_locked().await?;
        let text = self.read_locked().await?;
        debug!(time = %text, "time query answered");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn tuesday_afternoon() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .unwrap()
            .and_hms_opt(15, 21, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_default_format() {
        let text = format_time(&tuesday_afternoon(), DEFAULT_FORMAT).unwrap();
        assert_eq!(text, "3:21PM, Tuesday, May 14, 2024");
    }

    #[test]
    fn test_morning_single_digit_day() {
        let time = NaiveDate::from_ymd_opt(2025, 1, 3)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
            .and_utc();
        assert_eq!(
            format_time(&time, DEFAULT_FORMAT).unwrap(),
            "9:05AM, Friday, January 3, 2025"
        );
    }

    #[test]
    fn test_invalid_format_is_an_error() {
        assert!(matches!(
            format_time(&tuesday_afternoon(), "%Q"),
            Err(ClockError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = ClockConfig::default();
        assert_eq!(config.artifact, PathBuf::from("currentTime.txt"));
        assert_eq!(config.format, DEFAULT_FORMAT);
    }
}

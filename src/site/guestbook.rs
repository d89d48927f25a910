//! Append-only guestbook file.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Guestbook backed by a plain text file, one `<timestamp> - <message>`
/// entry per line.
///
/// Appends go through a lock so entries from simultaneous connections never
/// interleave. Reads are not locked.
#[derive(Debug)]
pub struct Guestbook {
    path: PathBuf,
    append: Mutex<()>,
}

impl Guestbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append: Mutex::new(()),
        }
    }

    /// Appends one entry stamped with the current UTC time, creating the
    /// file if needed. Returns the line written.
    pub async fn sign(&self, message: &str) -> anyhow::Result<String> {
        let entry = format_entry(&Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true), message);

        let _guard = self.append.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("failed to open guestbook {}", self.path.display()))?;
        file.write_all(entry.as_bytes())
            .await
            .with_context(|| format!("failed to append to guestbook {}", self.path.display()))?;
        file.flush().await?;

        Ok(entry)
    }

    /// Returns the whole guestbook, or `None` when nobody has signed yet.
    pub async fn entries(&self) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("failed to read guestbook {}", self.path.display())),
        }
    }
}

fn format_entry(timestamp: &str, message: &str) -> String {
    format!("{} - {}\n", timestamp, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_format() {
        assert_eq!(
            format_entry("2026-01-02T03:04:05.678Z", "hi there"),
            "2026-01-02T03:04:05.678Z - hi there\n"
        );
    }
}

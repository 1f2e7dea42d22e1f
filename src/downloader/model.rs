// src/downloader/model.rs

//! Value types for the download pipeline

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// One download request: a source URL and the destination file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadItem {
    pub url: String,
    pub dest: PathBuf,
}

impl DownloadItem {
    pub fn new(url: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            dest: dest.into(),
        }
    }
}

/// Revalidation metadata captured from a successful response. Each field
/// is absent when the server did not supply the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub etag: Option<String>,
    pub content_length: Option<u64>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Lifecycle of one transfer, emitted in order: `Pending` first, zero or
/// more `Progress` values with non-decreasing byte counts, then exactly
/// one terminal `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadState {
    /// No bytes transferred yet
    Pending,
    /// Bytes received so far; `percent` is absent when the server did not
    /// report a usable total
    Progress {
        total: Option<u64>,
        percent: Option<u8>,
    },
    /// Terminal: body fully written to the destination
    Success(HeaderInfo),
    /// Terminal: the transfer failed
    Error(String),
}

impl DownloadState {
    /// Progress for `fetched` bytes out of an optional expected `total`.
    /// Percent truncates toward zero, saturates at 100, and is never
    /// computed from an unknown or zero total.
    pub fn progress(fetched: u64, total: Option<u64>) -> Self {
        let percent = match total {
            Some(total) if total > 0 => Some((fetched * 100 / total).min(100) as u8),
            _ => None,
        };
        DownloadState::Progress { total, percent }
    }

    /// Whether no further states follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, DownloadState::Success(_) | DownloadState::Error(_))
    }
}

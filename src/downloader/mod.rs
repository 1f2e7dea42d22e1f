// src/downloader/mod.rs

//! Streaming downloads with observable lifecycle states
//!
//! One download is one GET issued from a background task. The task feeds
//! [`DownloadState`] values through a bounded channel: `Pending` before
//! any network I/O, `Progress` per received chunk, then exactly one
//! terminal `Success` or `Error`. The response body is buffered and
//! written to the destination in a single whole-file write, overwriting
//! any existing content.
//!
//! Cancellation is cooperative: dropping the [`DownloadStream`] closes the
//! channel, the producer observes this at each suspension point, and the
//! connection plus any buffered body are released by drop. Nothing is
//! emitted after cancellation and nothing panics on that path.

mod model;

pub use model::{DownloadItem, DownloadState, HeaderInfo};

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::{CONTENT_LENGTH, ETAG, HeaderMap, LAST_MODIFIED};
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Default timeout for HTTP requests (30 seconds)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Capacity of the state channel; bounds how far the producer runs ahead
/// of a slow consumer
const STATE_BUFFER: usize = 16;

/// Upper bound on the body buffer preallocation; the advertised
/// Content-Length is server-supplied and must not size an allocation on
/// its own
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

/// Capability for fetching a remote resource as an observable sequence of
/// lifecycle states
pub trait Downloader {
    fn download(&self, item: DownloadItem) -> DownloadStream;
}

/// Consumer handle for one transfer
///
/// States arrive in strict emission order. Dropping the handle before the
/// terminal state cancels the transfer.
pub struct DownloadStream {
    rx: mpsc::Receiver<DownloadState>,
}

impl DownloadStream {
    /// Next state, or `None` once the sequence has terminated
    pub async fn recv(&mut self) -> Option<DownloadState> {
        self.rx.recv().await
    }

    /// Adapt into a [`tokio_stream::Stream`] of states
    pub fn into_stream(self) -> ReceiverStream<DownloadState> {
        ReceiverStream::new(self.rx)
    }
}

/// Downloader backed by a reqwest client
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    /// Create a downloader with the default client configuration
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap an externally configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, item: DownloadItem) -> DownloadStream {
        let (tx, rx) = mpsc::channel(STATE_BUFFER);
        let client = self.client.clone();
        tokio::spawn(run_transfer(client, item, tx));
        DownloadStream { rx }
    }
}

/// Why a transfer stopped short of `Success`
enum Abort {
    /// Consumer went away; terminate silently
    Cancelled,
    /// Transfer failed; surface as a terminal `Error` state
    Failed(Error),
}

impl From<Error> for Abort {
    fn from(err: Error) -> Self {
        Abort::Failed(err)
    }
}

async fn run_transfer(client: Client, item: DownloadItem, tx: mpsc::Sender<DownloadState>) {
    if tx.send(DownloadState::Pending).await.is_err() {
        return;
    }

    match transfer(&client, &item, &tx).await {
        Ok(info) => {
            info!("Downloaded {} to {}", item.url, item.dest.display());
            let _ = tx.send(DownloadState::Success(info)).await;
        }
        Err(Abort::Cancelled) => {
            debug!("Download of {} cancelled", item.url);
        }
        Err(Abort::Failed(err)) => {
            warn!("Download of {} failed: {}", item.url, err);
            let _ = tx.send(DownloadState::Error(err.to_string())).await;
        }
    }
}

async fn transfer(
    client: &Client,
    item: &DownloadItem,
    tx: &mpsc::Sender<DownloadState>,
) -> std::result::Result<HeaderInfo, Abort> {
    debug!("GET {}", item.url);

    let response = tokio::select! {
        _ = tx.closed() => return Err(Abort::Cancelled),
        response = client.get(&item.url).send() => response
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::DownloadError(format!("Failed to fetch {}: {e}", item.url)))?,
    };

    let info = header_info(response.headers());
    let total = info.content_length;

    let mut body = Vec::with_capacity(total.unwrap_or(0).min(MAX_PREALLOC) as usize);
    let mut chunks = response.bytes_stream();

    loop {
        let next = tokio::select! {
            _ = tx.closed() => return Err(Abort::Cancelled),
            chunk = chunks.next() => chunk,
        };
        let Some(chunk) = next else { break };
        let chunk = chunk.map_err(|e| {
            Error::DownloadError(format!("Failed to read response from {}: {e}", item.url))
        })?;

        body.extend_from_slice(&chunk);
        debug!(
            "download: bytes received: {}, content length: {:?}",
            body.len(),
            total
        );
        if tx
            .send(DownloadState::progress(body.len() as u64, total))
            .await
            .is_err()
        {
            return Err(Abort::Cancelled);
        }
    }

    tokio::fs::write(&item.dest, &body).await.map_err(|e| {
        Error::IoError(format!("Failed to write {}: {e}", item.dest.display()))
    })?;

    Ok(info)
}

/// Extract the revalidation headers from a response
fn header_info(headers: &HeaderMap) -> HeaderInfo {
    let etag = headers
        .get(ETAG)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let content_length = headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok());
    let last_modified = headers
        .get(LAST_MODIFIED)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| DateTime::parse_from_rfc2822(value).ok())
        .map(|date| date.with_timezone(&Utc));

    HeaderInfo {
        etag,
        content_length,
        last_modified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn header_info_captures_revalidation_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, "\"abc123\"".parse().unwrap());
        headers.insert(CONTENT_LENGTH, "1000".parse().unwrap());
        headers.insert(
            LAST_MODIFIED,
            "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap(),
        );

        let info = header_info(&headers);
        assert_eq!(info.etag.as_deref(), Some("\"abc123\""));
        assert_eq!(info.content_length, Some(1000));
        assert_eq!(
            info.last_modified,
            Some(Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap())
        );
    }

    #[test]
    fn header_info_tolerates_absent_headers() {
        let info = header_info(&HeaderMap::new());
        assert_eq!(info, HeaderInfo::default());
    }

    #[test]
    fn header_info_tolerates_malformed_values() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, "not-a-number".parse().unwrap());
        headers.insert(LAST_MODIFIED, "yesterday".parse().unwrap());

        let info = header_info(&headers);
        assert_eq!(info.content_length, None);
        assert_eq!(info.last_modified, None);
    }
}

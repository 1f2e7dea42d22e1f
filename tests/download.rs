// tests/download.rs

//! End-to-end download tests
//!
//! These tests drive the downloader against a local TCP fixture server
//! speaking just enough HTTP/1.1 to exercise success, failure, and
//! cancellation paths without touching the network.

use std::time::Duration;

use repofetch::{DownloadItem, DownloadState, Downloader, HttpDownloader};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Serve one canned response on a fresh local port, returning the URL to
/// fetch. `hold_open` keeps the socket alive after writing, for
/// cancellation tests.
async fn serve_once(response: Vec<u8>, hold_open: Option<Duration>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        // Drain the request head before responding
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket.write_all(&response).await;
        match hold_open {
            Some(delay) => tokio::time::sleep(delay).await,
            None => {
                let _ = socket.shutdown().await;
            }
        }
    });

    format!("http://{addr}/index.json")
}

fn response_with_body(head: &str, body: &[u8]) -> Vec<u8> {
    let mut response = head.as_bytes().to_vec();
    response.extend_from_slice(body);
    response
}

async fn collect(mut stream: repofetch::DownloadStream) -> Vec<DownloadState> {
    let mut states = Vec::new();
    while let Some(state) = stream.recv().await {
        states.push(state);
    }
    states
}

#[tokio::test]
async fn successful_download_emits_pending_progress_success() {
    init_logging();
    let body = vec![b'x'; 1000];
    let head = "HTTP/1.1 200 OK\r\n\
                Content-Length: 1000\r\n\
                ETag: \"abc123\"\r\n\
                Last-Modified: Wed, 21 Oct 2015 07:28:00 GMT\r\n\
                Connection: close\r\n\r\n";
    let url = serve_once(response_with_body(head, &body), None).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("index.json");
    let downloader = HttpDownloader::new().unwrap();
    let states = collect(downloader.download(DownloadItem::new(url, &dest))).await;

    assert_eq!(states.first(), Some(&DownloadState::Pending));

    let info = match states.last().unwrap() {
        DownloadState::Success(info) => info,
        other => panic!("expected terminal Success, got {other:?}"),
    };
    assert_eq!(info.etag.as_deref(), Some("\"abc123\""));
    assert_eq!(info.content_length, Some(1000));
    assert!(info.last_modified.is_some());

    // Everything between the endpoints is monotone progress toward 100
    let mut previous = 0;
    assert!(states.len() > 2, "expected at least one progress state");
    for state in &states[1..states.len() - 1] {
        match state {
            DownloadState::Progress { total, percent } => {
                assert_eq!(*total, Some(1000));
                let percent = percent.expect("total known, percent must be computed");
                assert!(percent >= previous);
                assert!(percent <= 100);
                previous = percent;
            }
            other => panic!("unexpected intermediate state {other:?}"),
        }
    }

    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn missing_content_length_yields_indeterminate_progress() {
    init_logging();
    let body = b"indeterminate body".to_vec();
    let head = "HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n";
    let url = serve_once(response_with_body(head, &body), None).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("blob");
    let downloader = HttpDownloader::new().unwrap();
    let states = collect(downloader.download(DownloadItem::new(url, &dest))).await;

    assert_eq!(states.first(), Some(&DownloadState::Pending));
    let info = match states.last().unwrap() {
        DownloadState::Success(info) => info,
        other => panic!("expected terminal Success, got {other:?}"),
    };
    assert_eq!(info.content_length, None);

    for state in &states[1..states.len() - 1] {
        match state {
            DownloadState::Progress { total, percent } => {
                assert_eq!(*total, None);
                assert_eq!(*percent, None);
            }
            other => panic!("unexpected intermediate state {other:?}"),
        }
    }

    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[tokio::test]
async fn http_failure_status_yields_error_not_success() {
    init_logging();
    let head = "HTTP/1.1 404 Not Found\r\n\
                Content-Length: 9\r\n\
                Connection: close\r\n\r\n";
    let url = serve_once(response_with_body(head, b"not found"), None).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("missing.json");
    let downloader = HttpDownloader::new().unwrap();
    let states = collect(downloader.download(DownloadItem::new(url, &dest))).await;

    assert_eq!(states.first(), Some(&DownloadState::Pending));
    assert!(matches!(states.last(), Some(DownloadState::Error(_))));
    assert!(
        !states.iter().any(|s| matches!(s, DownloadState::Success(_))),
        "a failed transfer must never report success"
    );
    assert!(!dest.exists(), "no file may be written on HTTP failure");
}

#[tokio::test]
async fn oversized_content_length_is_not_trusted() {
    init_logging();
    // One terabyte advertised, ten bytes delivered, then the connection
    // closes. The truncated body must surface as an error, and the
    // advertised length must not size the buffer up front.
    let head = "HTTP/1.1 200 OK\r\n\
                Content-Length: 1099511627776\r\n\
                Connection: close\r\n\r\n";
    let url = serve_once(response_with_body(head, b"ten bytes!"), None).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("oversized");
    let downloader = HttpDownloader::new().unwrap();
    let states = collect(downloader.download(DownloadItem::new(url, &dest))).await;

    assert_eq!(states.first(), Some(&DownloadState::Pending));
    assert!(matches!(states.last(), Some(DownloadState::Error(_))));
    assert!(
        !states.iter().any(|s| matches!(s, DownloadState::Success(_))),
        "a truncated transfer must never report success"
    );
    assert!(!dest.exists());
}

#[tokio::test]
async fn connection_failure_yields_error() {
    init_logging();
    // Bind then drop to get a port nothing is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("unreachable");
    let downloader = HttpDownloader::new().unwrap();
    let states = collect(
        downloader.download(DownloadItem::new(format!("http://{addr}/x"), &dest)),
    )
    .await;

    assert_eq!(states.first(), Some(&DownloadState::Pending));
    assert!(matches!(states.last(), Some(DownloadState::Error(_))));
    assert!(!dest.exists());
}

#[tokio::test]
async fn dropping_the_stream_cancels_silently() {
    init_logging();
    // Server sends headers and a first chunk, then stalls with the socket
    // held open; the consumer walks away mid-transfer.
    let head = "HTTP/1.1 200 OK\r\n\
                Content-Length: 100000\r\n\
                Connection: close\r\n\r\n";
    let partial = vec![b'y'; 1000];
    let url = serve_once(
        response_with_body(head, &partial),
        Some(Duration::from_secs(5)),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("cancelled");
    let downloader = HttpDownloader::new().unwrap();
    let mut stream = downloader.download(DownloadItem::new(url, &dest));

    assert_eq!(stream.recv().await, Some(DownloadState::Pending));
    drop(stream);

    // Give the producer time to observe the closed channel and bail
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!dest.exists(), "cancelled transfer must not write the file");
}

#[tokio::test]
async fn states_can_be_consumed_as_a_stream() {
    init_logging();
    use tokio_stream::StreamExt;

    let head = "HTTP/1.1 200 OK\r\n\
                Content-Length: 4\r\n\
                Connection: close\r\n\r\n";
    let url = serve_once(response_with_body(head, b"data"), None).await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("streamed");
    let downloader = HttpDownloader::new().unwrap();
    let states: Vec<DownloadState> = downloader
        .download(DownloadItem::new(url, &dest))
        .into_stream()
        .collect()
        .await;

    assert_eq!(states.first(), Some(&DownloadState::Pending));
    assert!(states.last().unwrap().is_terminal());
    assert_eq!(
        states
            .iter()
            .filter(|state| state.is_terminal())
            .count(),
        1,
        "exactly one terminal state per transfer"
    );
}

// src/lib.rs

//! Repofetch
//!
//! Client-side core for efficient repeated polling of remote package
//! repositories.
//!
//! # Architecture
//!
//! - Repository records: immutable values whose transitions clear HTTP
//!   revalidation tokens exactly when security-relevant fields change
//! - Forward-compatible serialization: unknown keys are skipped, absent
//!   keys fall back to zero values
//! - Streaming downloads: one transfer becomes an ordered sequence of
//!   lifecycle states with progress fractions and captured revalidation
//!   headers; dropping the consumer handle cancels the transfer
//!
//! Persistence, UI, retry policy, and sync scheduling live outside this
//! crate. An external synchronizer reads a [`Repository`], performs a
//! conditional fetch through a [`Downloader`] using the record's stored
//! tokens, and feeds the outcome back through the record's transitions.

pub mod downloader;
mod error;
pub mod repository;

pub use downloader::{
    DownloadItem, DownloadState, DownloadStream, Downloader, HeaderInfo, HttpDownloader,
};
pub use error::{Error, Result};
pub use repository::{Repository, default_repositories};

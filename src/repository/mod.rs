// src/repository/mod.rs

//! Repository configuration records and their synchronization cursors
//!
//! A [`Repository`] describes one remote package source together with the
//! HTTP revalidation tokens left behind by its last successful sync. All
//! mutation goes through the record's transition methods, each of which
//! returns a new value. [`default_repositories`] provides the fixed seed
//! set for a fresh installation.

mod defaults;
mod record;

pub use defaults::default_repositories;
pub use record::{ID_UNASSIGNED, Repository};

// src/repository/record.rs

//! Repository record - one configured remote source and its sync cursor
//!
//! The record carries the HTTP revalidation tokens (`last_modified`,
//! `entity_tag`) captured by the last successful fetch. Tokens are only
//! meaningful against the `address` and `fingerprint` they were captured
//! under, so every transition that changes either field clears both,
//! forcing the next sync to perform a full (non-conditional) fetch.
//!
//! Transitions never mutate in place: each returns a new value, leaving
//! concurrent readers untouched.

use std::fmt;

use chrono::Utc;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use url::Url;

/// Serialized format version, written on every encode for forward migration
const SERIAL_VERSION: i32 = 1;

/// Id of a record the persistence layer has not assigned one to yet
pub const ID_UNASSIGNED: i64 = -1;

/// One configured remote repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    /// Local identity; [`ID_UNASSIGNED`] until persisted
    pub id: i64,
    /// Canonical fetch endpoint
    pub address: String,
    /// Alternate endpoints, insertion order significant
    pub mirrors: Vec<String>,
    pub name: String,
    pub description: String,
    /// Remote index schema version
    pub version: i32,
    /// Whether this repository participates in sync
    pub enabled: bool,
    /// Expected signing-key fingerprint
    pub fingerprint: String,
    /// HTTP `Last-Modified` revalidation token, empty when invalid
    pub last_modified: String,
    /// HTTP entity tag revalidation token, empty when invalid
    pub entity_tag: String,
    /// Epoch millis of the last successful local update
    pub updated: i64,
    /// The remote index's own timestamp
    pub timestamp: i64,
    /// Credential material for the address
    pub authentication: String,
}

impl Repository {
    /// New unpersisted record for a user-supplied endpoint. The display
    /// name is derived from the URL's host and path, falling back to the
    /// raw address when it does not parse.
    pub fn new(address: &str, fingerprint: &str, authentication: &str) -> Self {
        Self {
            id: ID_UNASSIGNED,
            address: address.to_string(),
            name: display_name(address),
            enabled: true,
            fingerprint: fingerprint.to_string(),
            authentication: authentication.to_string(),
            ..Self::default()
        }
    }

    /// Rewrite the identity/security fields. Revalidation tokens survive
    /// only when neither `address` nor `fingerprint` actually changed.
    pub fn edit(&self, address: &str, fingerprint: &str, authentication: &str) -> Self {
        let changed = self.address != address || self.fingerprint != fingerprint;
        Self {
            address: address.to_string(),
            fingerprint: fingerprint.to_string(),
            authentication: authentication.to_string(),
            last_modified: if changed {
                String::new()
            } else {
                self.last_modified.clone()
            },
            entity_tag: if changed {
                String::new()
            } else {
                self.entity_tag.clone()
            },
            ..self.clone()
        }
    }

    /// Apply the outcome of a successful fetch and parse of the remote
    /// index. Descriptive fields and tokens are overwritten; a negative
    /// `version` means "unknown, keep existing". Stamps `updated` with the
    /// current time.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        mirrors: Vec<String>,
        name: &str,
        description: &str,
        version: i32,
        last_modified: &str,
        entity_tag: &str,
        timestamp: i64,
    ) -> Self {
        Self {
            mirrors,
            name: name.to_string(),
            description: description.to_string(),
            version: if version >= 0 { version } else { self.version },
            last_modified: last_modified.to_string(),
            entity_tag: entity_tag.to_string(),
            updated: Utc::now().timestamp_millis(),
            timestamp,
            ..self.clone()
        }
    }

    /// Flip sync participation. Always clears the revalidation tokens: a
    /// repository that was disabled for a while is treated as stale.
    pub fn enable(&self, enabled: bool) -> Self {
        Self {
            enabled,
            last_modified: String::new(),
            entity_tag: String::new(),
            ..self.clone()
        }
    }
}

/// Host and path of the address, or the raw address when unparsable
fn display_name(address: &str) -> String {
    match Url::parse(address) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}{}", host, url.path()),
            None => address.to_string(),
        },
        Err(_) => address.to_string(),
    }
}

impl Serialize for Repository {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(14))?;
        map.serialize_entry("serialVersion", &SERIAL_VERSION)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("address", &self.address)?;
        map.serialize_entry("mirrors", &self.mirrors)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("description", &self.description)?;
        map.serialize_entry("version", &self.version)?;
        map.serialize_entry("enabled", &self.enabled)?;
        map.serialize_entry("fingerprint", &self.fingerprint)?;
        map.serialize_entry("lastModified", &self.last_modified)?;
        map.serialize_entry("entityTag", &self.entity_tag)?;
        map.serialize_entry("updated", &self.updated)?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.serialize_entry("authentication", &self.authentication)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Repository {
    /// Key-driven and order-independent: recognized keys accumulate into
    /// zero-value defaults, unrecognized keys (including those written by
    /// newer versions of this format) are skipped without error.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Repository;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a repository record object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Repository, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut record = Repository::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "id" => record.id = map.next_value()?,
                        "address" => record.address = map.next_value()?,
                        "mirrors" => record.mirrors = map.next_value()?,
                        "name" => record.name = map.next_value()?,
                        "description" => record.description = map.next_value()?,
                        "version" => record.version = map.next_value()?,
                        "enabled" => record.enabled = map.next_value()?,
                        "fingerprint" => record.fingerprint = map.next_value()?,
                        "lastModified" => record.last_modified = map.next_value()?,
                        "entityTag" => record.entity_tag = map.next_value()?,
                        "updated" => record.updated = map.next_value()?,
                        "timestamp" => record.timestamp = map.next_value()?,
                        "authentication" => record.authentication = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The fixed list of artworks available for viewing.
//!
//! The catalog is built once at startup from the embedded manifest and
//! never mutated. Order is significant: it defines the navigation
//! sequence.

use crate::io::{assets, manifest};
use crate::models::artwork::{ArtworkEntry, ArtworkRecord};
use anyhow::{bail, ensure, Context, Result};

/// Catalog manifest compiled into the binary.
const BUILTIN_MANIFEST: &str = include_str!("../../assets/catalog.yaml");

/// Ordered, immutable sequence of artworks, length >= 1.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
}

impl Catalog {
    /// Create a catalog from a list of records.
    ///
    /// An empty list is a startup precondition violation, rejected here
    /// rather than handled anywhere downstream.
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self> {
        ensure!(!records.is_empty(), "catalog must contain at least one artwork");
        for record in &records {
            ensure!(!record.title.is_empty(), "artwork with empty title");
            ensure!(
                !record.author.is_empty(),
                "artwork {:?} has an empty author",
                record.title
            );
        }
        Ok(Self { records })
    }

    /// Build the compiled-in catalog from the embedded manifest.
    pub fn builtin() -> Result<Self> {
        let entries =
            manifest::parse(BUILTIN_MANIFEST).context("failed to parse builtin catalog manifest")?;
        Self::from_entries(entries)
    }

    /// Resolve manifest entries into a catalog.
    ///
    /// Fails if an entry references an asset that is not embedded.
    pub fn from_entries(entries: Vec<ArtworkEntry>) -> Result<Self> {
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            let image = match assets::bytes_for(&entry.asset) {
                Some(bytes) => bytes,
                None => bail!("manifest references unknown asset {:?}", entry.asset),
            };
            records.push(ArtworkRecord {
                title: entry.title,
                author: entry.author,
                year: entry.year,
                image,
            });
        }

        Self::new(records)
    }

    /// Number of artworks. Constant for the process lifetime.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at position `index`.
    ///
    /// Out-of-range indices are an error; the viewer state machine keeps
    /// its index in range, so correct usage never hits it.
    pub fn get(&self, index: usize) -> Result<&ArtworkRecord> {
        match self.records.get(index) {
            Some(record) => Ok(record),
            None => bail!(
                "artwork index {} out of range (catalog holds {})",
                index,
                self.records.len()
            ),
        }
    }
}

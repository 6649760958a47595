// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog manifest parsing.
//!
//! The list of artworks ships as a YAML manifest embedded in the
//! binary; this module turns it into entries the catalog can resolve.

use crate::models::artwork::ArtworkEntry;
use anyhow::{ensure, Context, Result};

/// Parse a catalog manifest.
pub fn parse(yaml: &str) -> Result<Vec<ArtworkEntry>> {
    let entries: Vec<ArtworkEntry> =
        serde_yaml::from_str(yaml).context("malformed catalog manifest")?;
    ensure!(!entries.is_empty(), "catalog manifest lists no artworks");
    Ok(entries)
}

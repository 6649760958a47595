// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Artwork data structures.
//!
//! This module defines the record displayed by the viewer and the
//! manifest form it is deserialized from.

use serde::Deserialize;

/// One artwork as listed in the embedded catalog manifest.
///
/// `asset` names an image compiled into the binary; see `io::assets`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworkEntry {
    pub title: String,
    pub author: String,
    pub year: String,
    pub asset: String,
}

/// An artwork ready for display.
///
/// `year` stays a display string: the source list mixes single years
/// with ranges like "1902-1903".
#[derive(Debug, Clone)]
pub struct ArtworkRecord {
    pub title: String,
    pub author: String,
    pub year: String,
    /// Encoded image bytes, embedded at compile time.
    pub image: &'static [u8],
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O for embedded images and the catalog manifest.

pub mod assets;
pub mod manifest;

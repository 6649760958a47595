// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the gallery viewer.

pub mod artwork;
pub mod catalog;
pub mod viewer;

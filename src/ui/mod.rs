// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the gallery viewer.

pub mod artwork;
pub mod controls;
pub mod placard;

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image fitting math.
//!
//! This module computes the display size for an artwork inside the
//! space the frame makes available, preserving aspect ratio.

use egui::Vec2;

/// Scale `image` to fit inside `available`, preserving aspect ratio.
///
/// Images smaller than the available space are not upscaled; pixel art
/// placeholders look worse blown up than letterboxed.
pub fn fit_size(image: Vec2, available: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (available.x / image.x)
        .min(available.y / image.y)
        .min(1.0);
    image * scale
}

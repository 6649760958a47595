// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Artwork display area.
//!
//! This module renders the current artwork, scaled to fit the available
//! space and centered inside a framed area, or placeholder text while
//! no texture is available.

use crate::util::fit;

/// Display the artwork image area.
pub fn show(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>) {
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        if let Some(texture) = texture {
            let available = ui.available_size();
            let display_size = fit::fit_size(texture.size_vec2(), available);

            // Center the image
            let offset = (available - display_size) / 2.0;
            let image_rect =
                egui::Rect::from_min_size(ui.min_rect().min + offset, display_size);

            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            // White mat around the artwork, drawn over the image edge
            ui.painter().rect_stroke(
                image_rect,
                0.0,
                egui::Stroke::new(6.0, egui::Color32::WHITE),
            );
        } else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Artwork unavailable")
                        .color(egui::Color32::from_gray(150)),
                );
            });
        }
    });
}

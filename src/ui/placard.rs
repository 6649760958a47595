// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Artwork placard.
//!
//! This module renders the descriptive card under the image: the title,
//! then author and year on one row, the way a museum wall label reads.

use crate::models::artwork::ArtworkRecord;

/// Display the placard for the given artwork.
pub fn show(ui: &mut egui::Ui, artwork: &ArtworkRecord) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&artwork.title)
                        .size(24.0)
                        .color(egui::Color32::from_gray(220)),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(egui::RichText::new(&artwork.author).strong());
                    ui.label(
                        egui::RichText::new(format!("({})", artwork.year)).weak(),
                    );
                });
            });
        });
}

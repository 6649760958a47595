// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation controls.
//!
//! This module provides the two navigation buttons and the position
//! indicator shown below the placard.

/// Result of interacting with the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    Previous,
    Next,
}

/// Display the Previous / Next buttons and the "i / N" position label.
///
/// With wraparound navigation both buttons are always enabled; there is
/// no end of the list to hit.
pub fn show(ui: &mut egui::Ui, position: usize, total: usize) -> NavAction {
    let mut action = NavAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let button_width = (ui.available_width() - 80.0).max(0.0) / 2.0;
        let button_size = egui::vec2(button_width, 32.0);

        if ui
            .add_sized(button_size, egui::Button::new("⬅ Previous"))
            .clicked()
        {
            action = NavAction::Previous;
        }

        ui.add_sized(
            egui::vec2(64.0, 32.0),
            egui::Label::new(
                egui::RichText::new(format!("{} / {}", position + 1, total)).weak(),
            ),
        );

        if ui
            .add_sized(button_size, egui::Button::new("Next ➡"))
            .clicked()
        {
            action = NavAction::Next;
        }
    });

    action
}

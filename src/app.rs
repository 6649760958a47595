// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the screen controller: it owns the catalog and
//! the navigation state, turns button presses and key presses into
//! transitions, and projects the current record into the panels.

use crate::host::{Orientation, OrientationLock, ViewportHost};
use crate::io::assets;
use crate::models::{catalog::Catalog, viewer::ViewerState};
use crate::ui::{artwork, controls, controls::NavAction, placard};
use anyhow::Result;

/// Main application state.
pub struct GalleryApp {
    /// Fixed list of artworks, built once at startup
    catalog: Catalog,

    /// Position within the catalog
    viewer: ViewerState,

    /// Display texture per catalog position, created on first display
    textures: Vec<Option<egui::TextureHandle>>,

    /// Positions whose image failed to decode; not retried
    decode_failed: Vec<bool>,

    /// Keeps portrait forced for as long as the screen is up
    _orientation: OrientationLock<ViewportHost>,
}

impl GalleryApp {
    /// Create the application. Fails if the builtin catalog is invalid.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        Self::with_context(&cc.egui_ctx, Catalog::builtin()?)
    }

    fn with_context(ctx: &egui::Context, catalog: Catalog) -> Result<Self> {
        let viewer = ViewerState::new(catalog.len())?;
        log::info!("catalog holds {} artworks", catalog.len());

        let orientation =
            OrientationLock::acquire(ViewportHost::new(ctx.clone()), Orientation::Portrait);

        let textures = vec![None; catalog.len()];
        let decode_failed = vec![false; catalog.len()];

        Ok(Self {
            catalog,
            viewer,
            textures,
            decode_failed,
            _orientation: orientation,
        })
    }

    /// Apply a navigation action to the viewer state.
    fn navigate(&mut self, action: NavAction) {
        match action {
            NavAction::Previous => self.viewer.previous(),
            NavAction::Next => self.viewer.next(),
            NavAction::None => return,
        }

        if let Ok(record) = self.catalog.get(self.viewer.current()) {
            log::info!(
                "showing {}/{}: {}",
                self.viewer.current() + 1,
                self.catalog.len(),
                record.title
            );
        }
    }

    /// Texture for the artwork at `index`, decoding it on first use.
    ///
    /// Decoding is synchronous: the assets are small and compiled in,
    /// and all work stays on the UI thread.
    fn texture_at(&mut self, index: usize, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        if self.textures[index].is_none() && !self.decode_failed[index] {
            let record = self.catalog.get(index).ok()?;
            match assets::decode(record.image) {
                Ok(color_image) => {
                    let texture = ctx.load_texture(
                        format!("artwork_{}", index),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures[index] = Some(texture);
                }
                Err(e) => {
                    log::error!("failed to decode image for {}: {:#}", record.title, e);
                    self.decode_failed[index] = true;
                }
            }
        }

        self.textures[index].clone()
    }

    /// Draw one frame and collect the navigation input it registered.
    ///
    /// Key presses are handled before the snapshot and button clicks are
    /// returned to the caller, so every panel in a frame projects the
    /// same record.
    fn show_frame(&mut self, ctx: &egui::Context) -> NavAction {
        // Arrow keys are keyboard equivalents of the two buttons
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.navigate(NavAction::Previous);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.navigate(NavAction::Next);
        }

        // The single index this frame displays
        let index = self.viewer.current();

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("Gallery Walk")
                        .size(24.0)
                        .color(egui::Color32::from_gray(200)),
                );
                ui.add_space(6.0);
            });
        });

        // Placard and navigation controls (bottom)
        let action = egui::TopBottomPanel::bottom("controls")
            .show(ctx, |ui| {
                ui.add_space(8.0);
                match self.catalog.get(index) {
                    Ok(record) => placard::show(ui, record),
                    Err(e) => {
                        // Unreachable while the viewer invariant holds
                        ui.label(format!("catalog error: {:#}", e));
                    }
                }
                ui.add_space(8.0);
                let action = controls::show(ui, index, self.catalog.len());
                ui.add_space(8.0);
                action
            })
            .inner;

        let texture = self.texture_at(index, ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            artwork::show(ui, texture.as_ref());
        });

        action
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = self.show_frame(ctx);

        // Apply the collected click after every panel has drawn; the
        // repaint the click triggers shows the new record
        self.navigate(action);
    }
}

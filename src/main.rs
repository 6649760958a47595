// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery Walk - a single-window artwork viewer
//!
//! Displays one artwork at a time from a fixed, compiled-in list, with
//! its title, author, and year, and steps through the list with two
//! buttons that wrap around at either end.

mod app;
mod host;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::GalleryApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options; the orientation lock keeps the window
    // portrait once the app is up
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([360.0, 600.0])
            .with_title("Gallery Walk"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Gallery Walk",
        options,
        Box::new(|cc| Ok(Box::new(GalleryApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

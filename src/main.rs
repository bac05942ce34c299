// SPDX-License-Identifier: BSD-3-Clause

//! Atelier - a tabless navigation demo.
//!
//! A single root screen (a grid of projects) launches three modal flows:
//! a freehand drawing canvas, a full-screen paged gallery, and a detail
//! overlay. No tab bar, no persistence; every flow's state lives only
//! while that flow is on screen.

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::AtelierApp;
use models::project::ProjectLibrary;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // The bundled thumbnails are the only environment dependency; refusing
    // to start here is what keeps the grid from ever rendering partially.
    let assets_dir = io::assets::default_assets_dir();
    let library = ProjectLibrary::load(&assets_dir)
        .context("cannot start without the bundled project thumbnails")?;
    log::info!(
        "loaded {} projects from {}",
        library.len(),
        assets_dir.display()
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 480.0])
            .with_title("Atelier - My Projects"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Atelier",
        options,
        Box::new(move |_cc| Ok(Box::new(AtelierApp::new(library)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

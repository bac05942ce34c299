// SPDX-License-Identifier: BSD-3-Clause

//! Root project grid.
//!
//! Displays the fixed project set as tappable tiles and routes selections:
//! a tile opens the paged gallery at that index, a tile's info affordance
//! opens the detail overlay, and the floating add button opens the drawing
//! surface. The grid itself holds no navigational state; while a modal flow
//! is active it is rendered paused and resumes unchanged on dismissal.

use crate::models::project::ProjectLibrary;

const TILE_SIZE: egui::Vec2 = egui::vec2(150.0, 186.0);
const TILE_PADDING: f32 = 8.0;

/// Result of interacting with the project grid.
pub enum GridAction {
    None,
    /// Open the paged gallery starting at the given tile index.
    OpenGallery(usize),
    /// Open the detail overlay for the given tile index.
    OpenDetail(usize),
    /// Open the drawing surface with a fresh stroke path.
    NewSketch,
}

/// Display the grid and the floating add button.
///
/// `enabled` is false while a modal flow is presented; the grid then draws
/// dimmed and produces no actions.
pub fn show(
    ui: &mut egui::Ui,
    library: &ProjectLibrary,
    textures: &[egui::TextureHandle],
    enabled: bool,
) -> GridAction {
    let mut action = GridAction::None;

    ui.heading("My Projects");
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);

            for (index, project) in library.projects().iter().enumerate() {
                if let Some(tile_action) =
                    show_tile(ui, index, &project.title, textures.get(index), enabled)
                {
                    action = tile_action;
                }
            }
        });
    });

    // Floating add button, bottom-right over the grid.
    let add_clicked = egui::Area::new(egui::Id::new("grid_add_button"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
        .show(ui.ctx(), |ui| {
            ui.add_enabled(
                enabled,
                egui::Button::new(egui::RichText::new("+").size(28.0).strong())
                    .min_size(egui::vec2(56.0, 56.0))
                    .rounding(28.0),
            )
            .on_hover_text("New sketch")
            .clicked()
        })
        .inner;
    if add_clicked && enabled {
        action = GridAction::NewSketch;
    }

    action
}

/// One tile: thumbnail, title, and an info affordance in the corner.
fn show_tile(
    ui: &mut egui::Ui,
    index: usize,
    title: &str,
    texture: Option<&egui::TextureHandle>,
    enabled: bool,
) -> Option<GridAction> {
    let (rect, response) = ui.allocate_exact_size(TILE_SIZE, egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return None;
    }

    let hovered = enabled && response.hovered();
    let fill = if hovered {
        egui::Color32::from_gray(55)
    } else {
        egui::Color32::from_gray(40)
    };
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(16.0), fill);

    // Square thumbnail across the tile width, title underneath.
    let image_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(TILE_PADDING, TILE_PADDING),
        egui::Vec2::splat(TILE_SIZE.x - 2.0 * TILE_PADDING),
    );
    if let Some(texture) = texture {
        let tint = if enabled {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_gray(130)
        };
        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            tint,
        );
    }

    let text_color = if enabled {
        egui::Color32::WHITE
    } else {
        egui::Color32::from_gray(130)
    };
    ui.painter().text(
        egui::pos2(rect.center().x, image_rect.max.y + 14.0),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(14.0),
        text_color,
    );

    // Info affordance in the top-right tile corner, drawn over the image.
    let info_rect = egui::Rect::from_min_size(
        egui::pos2(rect.max.x - 30.0, rect.min.y + 6.0),
        egui::vec2(24.0, 24.0),
    );
    let info_response = ui
        .allocate_ui_at_rect(info_rect, |ui| {
            ui.add_enabled(
                enabled,
                egui::Button::new(egui::RichText::new("i").size(12.0))
                    .rounding(12.0)
                    .small(),
            )
        })
        .inner;

    if !enabled {
        return None;
    }
    if info_response.clicked() {
        return Some(GridAction::OpenDetail(index));
    }
    if response.clicked() {
        return Some(GridAction::OpenGallery(index));
    }
    None
}

// SPDX-License-Identifier: BSD-3-Clause

//! Detail overlay.
//!
//! A transient modal card showing one project's image over a dimmed
//! backdrop. There is no navigation state here: every exit path returns to
//! the presenter unconditionally. The enter transition (backdrop fade plus
//! a slight card scale-up) is cosmetic only.

use crate::models::project::Project;
use crate::util::geometry;

/// Result of interacting with the detail overlay.
pub enum DetailAction {
    None,
    Dismiss,
}

/// Display the detail card for one frame.
pub fn show(
    ctx: &egui::Context,
    project: &Project,
    texture: Option<&egui::TextureHandle>,
    fade: f32,
) -> DetailAction {
    let mut action = DetailAction::None;
    let screen = ctx.screen_rect();

    egui::Area::new(egui::Id::new("detail_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let _backdrop = ui.allocate_rect(screen, egui::Sense::click_and_drag());
            ui.painter().rect_filled(
                screen,
                0.0,
                egui::Color32::from_black_alpha((235.0 * fade) as u8),
            );

            // Card scales from 80% to full size as the fade completes.
            let scale = 0.8 + 0.2 * fade;
            let card_size = egui::vec2(screen.width() * 0.8, screen.height() * 0.6) * scale;
            let card_rect = egui::Rect::from_center_size(screen.center(), card_size);
            ui.painter().rect_filled(
                card_rect,
                egui::Rounding::same(16.0),
                egui::Color32::from_gray(28),
            );

            // Image fills the card above the title and close button.
            let inner = card_rect.shrink(16.0);
            let image_bounds = egui::vec2(inner.width(), inner.height() - 64.0);
            if let Some(texture) = texture {
                let (w, h) = geometry::fit_size(
                    project.thumbnail.width,
                    project.thumbnail.height,
                    image_bounds.x,
                    image_bounds.y,
                );
                let image_rect = egui::Rect::from_center_size(
                    egui::pos2(inner.center().x, inner.min.y + image_bounds.y / 2.0),
                    egui::vec2(w, h),
                );
                ui.painter().image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );

                // Tap the image to dismiss and pick another project.
                let image_response = ui.allocate_rect(image_rect, egui::Sense::click());
                if image_response.clicked() {
                    action = DetailAction::Dismiss;
                }
            }

            ui.painter().text(
                egui::pos2(inner.center().x, inner.max.y - 44.0),
                egui::Align2::CENTER_CENTER,
                &project.title,
                egui::FontId::proportional(16.0),
                egui::Color32::WHITE,
            );

            let close_rect = egui::Rect::from_center_size(
                egui::pos2(inner.center().x, inner.max.y - 14.0),
                egui::vec2(70.0, 28.0),
            );
            let close_clicked = ui
                .allocate_ui_at_rect(close_rect, |ui| ui.button("Close").clicked())
                .inner;
            if close_clicked {
                action = DetailAction::Dismiss;
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = DetailAction::Dismiss;
    }

    action
}

// SPDX-License-Identifier: BSD-3-Clause

//! Full-screen paged gallery overlay.
//!
//! Renders the current page of a [`GallerySession`] over a dimmed backdrop,
//! with the adjacent pages kept one screen-width to either side so a swipe
//! in progress reveals them. Paging commits only when an input gesture
//! completes: a button click, an arrow key, or a swipe released past the
//! threshold. Boundary attempts are silent no-ops, refused by the session.

use crate::models::gallery::GallerySession;
use crate::models::project::ProjectLibrary;
use crate::util::geometry;

/// Fraction of the screen width a swipe must cover to turn the page.
const SWIPE_THRESHOLD: f32 = 0.15;

/// Result of interacting with the gallery overlay.
pub enum GalleryAction {
    None,
    GoPrevious,
    GoNext,
    Dismiss,
}

/// Display the gallery overlay for one frame.
///
/// `swipe` is the horizontal drag offset accumulated across frames while a
/// swipe is in progress; it is reset here when the drag ends.
pub fn show(
    ctx: &egui::Context,
    library: &ProjectLibrary,
    textures: &[egui::TextureHandle],
    session: &GallerySession,
    swipe: &mut f32,
    fade: f32,
) -> GalleryAction {
    let mut action = GalleryAction::None;
    let screen = ctx.screen_rect();

    egui::Area::new(egui::Id::new("gallery_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Backdrop swallows pointer input meant for the paused grid.
            let _backdrop = ui.allocate_rect(screen, egui::Sense::click_and_drag());
            ui.painter().rect_filled(
                screen,
                0.0,
                egui::Color32::from_black_alpha((235.0 * fade) as u8),
            );

            // Only the current page and its neighbours exist; the neighbours
            // sit one screen-width to the side and show through mid-swipe.
            let window = session.page_window();
            if let Some(prev) = window.previous {
                draw_page(ui, library, textures, prev, screen, *swipe - screen.width());
            }
            if let Some(next) = window.next {
                draw_page(ui, library, textures, next, screen, *swipe + screen.width());
            }
            let page_rect = draw_page(ui, library, textures, window.current, screen, *swipe);
            draw_caption(ui, library, session, screen);

            // The displayed page: tap to dismiss, drag to swipe.
            let page_response = ui.allocate_rect(page_rect, egui::Sense::click_and_drag());
            if page_response.dragged() {
                *swipe += page_response.drag_delta().x;
            }
            if page_response.drag_stopped() {
                let threshold = screen.width() * SWIPE_THRESHOLD;
                if *swipe <= -threshold {
                    action = GalleryAction::GoNext;
                } else if *swipe >= threshold {
                    action = GalleryAction::GoPrevious;
                }
                *swipe = 0.0;
            }
            if page_response.clicked() {
                action = GalleryAction::Dismiss;
            }

            // Prev/next controls, disabled exactly at the boundaries.
            let controls_y = screen.max.y - 48.0;
            let prev_rect = egui::Rect::from_center_size(
                egui::pos2(screen.center().x - 50.0, controls_y),
                egui::vec2(44.0, 32.0),
            );
            let next_rect = egui::Rect::from_center_size(
                egui::pos2(screen.center().x + 50.0, controls_y),
                egui::vec2(44.0, 32.0),
            );
            let prev_clicked = ui
                .allocate_ui_at_rect(prev_rect, |ui| {
                    ui.add_enabled(session.has_previous(), egui::Button::new("◀"))
                        .clicked()
                })
                .inner;
            let next_clicked = ui
                .allocate_ui_at_rect(next_rect, |ui| {
                    ui.add_enabled(session.has_next(), egui::Button::new("▶"))
                        .clicked()
                })
                .inner;
            if prev_clicked {
                action = GalleryAction::GoPrevious;
            }
            if next_clicked {
                action = GalleryAction::GoNext;
            }

            let close_rect = egui::Rect::from_min_size(
                egui::pos2(screen.max.x - 76.0, screen.min.y + 16.0),
                egui::vec2(60.0, 28.0),
            );
            let close_clicked = ui
                .allocate_ui_at_rect(close_rect, |ui| ui.button("Close").clicked())
                .inner;
            if close_clicked {
                action = GalleryAction::Dismiss;
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
        action = GalleryAction::GoPrevious;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
        action = GalleryAction::GoNext;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = GalleryAction::Dismiss;
    }

    action
}

/// Draw one preview page centered at the given horizontal offset from the
/// screen center. Returns the region the page occupies.
fn draw_page(
    ui: &mut egui::Ui,
    library: &ProjectLibrary,
    textures: &[egui::TextureHandle],
    index: usize,
    screen: egui::Rect,
    x_offset: f32,
) -> egui::Rect {
    let bounds = egui::vec2(screen.width() * 0.8, screen.height() * 0.6);
    let center = screen.center() + egui::vec2(x_offset, 0.0);
    let page_rect = egui::Rect::from_center_size(center, bounds);

    if let (Some(project), Some(texture)) = (library.get(index), textures.get(index)) {
        let (w, h) = geometry::fit_size(
            project.thumbnail.width,
            project.thumbnail.height,
            bounds.x,
            bounds.y,
        );
        let image_rect = egui::Rect::from_center_size(center, egui::vec2(w, h));
        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    page_rect
}

/// Title and page position under the displayed page.
fn draw_caption(
    ui: &mut egui::Ui,
    library: &ProjectLibrary,
    session: &GallerySession,
    screen: egui::Rect,
) {
    let title = library
        .get(session.current_index())
        .map(|p| p.title.as_str())
        .unwrap_or_default();
    ui.painter().text(
        egui::pos2(screen.center().x, screen.max.y - 88.0),
        egui::Align2::CENTER_CENTER,
        format!(
            "{}   {} / {}",
            title,
            session.current_index() + 1,
            session.page_count()
        ),
        egui::FontId::proportional(15.0),
        egui::Color32::from_gray(220),
    );
}

// SPDX-License-Identifier: BSD-3-Clause

//! Drawing surface overlay.
//!
//! The whole screen becomes a drag surface: gesture start, move, and end
//! events are reported as actions and the session's stroke is rendered as a
//! polyline through its points. Positions are clamped to the surface, so an
//! out-of-bounds drag never produces points outside it.

use crate::models::sketch::{Point, SketchSession};

const STROKE_WIDTH: f32 = 3.0;
const STROKE_COLOR: egui::Color32 = egui::Color32::from_rgb(10, 132, 255);

/// Result of interacting with the drawing surface.
pub enum CanvasAction {
    None,
    /// A drag started: begin a new stroke at this point.
    StrokeBegan(Point),
    /// A drag moved: extend the active stroke to this point.
    StrokeExtended(Point),
    /// The drag ended.
    StrokeEnded,
    Dismiss,
}

/// Display the drawing surface for one frame.
pub fn show(ctx: &egui::Context, session: &SketchSession, fade: f32) -> CanvasAction {
    let mut action = CanvasAction::None;
    let screen = ctx.screen_rect();

    egui::Area::new(egui::Id::new("canvas_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click_and_drag());
            ui.painter().rect_filled(
                screen,
                0.0,
                egui::Color32::from_black_alpha((190.0 * fade) as u8),
            );

            if let Some(pos) = response.interact_pointer_pos() {
                let point = clamp_to(pos, screen);
                if response.drag_started() {
                    action = CanvasAction::StrokeBegan(point);
                } else if response.dragged() {
                    action = CanvasAction::StrokeExtended(point);
                }
            }
            if response.drag_stopped() {
                action = CanvasAction::StrokeEnded;
            }

            draw_stroke(ui.painter(), session);

            if session.path().is_empty() {
                ui.painter().text(
                    screen.center(),
                    egui::Align2::CENTER_CENTER,
                    "Drag to draw",
                    egui::FontId::proportional(16.0),
                    egui::Color32::from_gray(160),
                );
            }

            let close_rect = egui::Rect::from_min_size(
                egui::pos2(screen.max.x - 76.0, screen.min.y + 16.0),
                egui::vec2(60.0, 28.0),
            );
            let close_clicked = ui
                .allocate_ui_at_rect(close_rect, |ui| ui.button("Close").clicked())
                .inner;
            if close_clicked {
                action = CanvasAction::Dismiss;
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = CanvasAction::Dismiss;
    }

    action
}

/// Render the captured stroke as a polyline through its points, in order.
fn draw_stroke(painter: &egui::Painter, session: &SketchSession) {
    let points: Vec<egui::Pos2> = session
        .path()
        .points()
        .iter()
        .map(|p| egui::pos2(p.x, p.y))
        .collect();

    match points.as_slice() {
        [] => {}
        // A gesture that has not moved yet: mark the single point.
        [point] => {
            painter.circle_filled(*point, STROKE_WIDTH / 2.0, STROKE_COLOR);
        }
        _ => {
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(STROKE_WIDTH, STROKE_COLOR),
            ));
        }
    }
}

fn clamp_to(pos: egui::Pos2, rect: egui::Rect) -> Point {
    Point::new(
        pos.x.clamp(rect.min.x, rect.max.x),
        pos.y.clamp(rect.min.y, rect.max.y),
    )
}

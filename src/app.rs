// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! One root screen (the project grid) with at most one modal flow presented
//! over it. Each flow owns its session state exclusively: the state is
//! created on entry, handed to the overlay each frame, and dropped on
//! dismissal. The grid stays alive underneath, paused, and resumes
//! unchanged when the flow ends.

use crate::models::gallery::GallerySession;
use crate::models::project::ProjectLibrary;
use crate::models::sketch::SketchSession;
use crate::ui::{canvas, detail, gallery, grid};

/// Enter-transition length for modal overlays, in seconds.
const FLOW_FADE_SECS: f64 = 0.25;

/// The modal flow currently presented over the grid.
enum Flow {
    /// Freehand drawing surface.
    Sketch {
        session: SketchSession,
        opened_at: f64,
    },
    /// Paged gallery over the project sequence.
    Gallery {
        session: GallerySession,
        /// Horizontal drag offset of an in-progress swipe.
        swipe: f32,
        opened_at: f64,
    },
    /// Detail card for a single project.
    Detail { index: usize, opened_at: f64 },
}

impl Flow {
    fn opened_at(&self) -> f64 {
        match self {
            Flow::Sketch { opened_at, .. }
            | Flow::Gallery { opened_at, .. }
            | Flow::Detail { opened_at, .. } => *opened_at,
        }
    }
}

/// Main application state.
pub struct AtelierApp {
    /// The fixed project set, loaded before the window opened.
    library: ProjectLibrary,

    /// One texture per project, uploaded on the first frame.
    textures: Vec<egui::TextureHandle>,

    /// The active modal flow, if any.
    active_flow: Option<Flow>,
}

impl AtelierApp {
    /// Create the application over an already-loaded project library.
    pub fn new(library: ProjectLibrary) -> Self {
        Self {
            library,
            textures: Vec::new(),
            active_flow: None,
        }
    }

    /// Upload the project thumbnails as textures once.
    fn ensure_textures(&mut self, ctx: &egui::Context) {
        if self.textures.len() == self.library.len() {
            return;
        }
        self.textures = self
            .library
            .projects()
            .iter()
            .map(|project| {
                let thumb = &project.thumbnail;
                let size = [thumb.width as usize, thumb.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &thumb.pixels);
                ctx.load_texture(&project.title, color_image, egui::TextureOptions::LINEAR)
            })
            .collect();
    }
}

impl eframe::App for AtelierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_textures(ctx);

        let now = ctx.input(|i| i.time);
        let flow_active = self.active_flow.is_some();

        // Root grid, paused beneath an active flow.
        let grid_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                grid::show(ui, &self.library, &self.textures, !flow_active)
            })
            .inner;

        if !flow_active {
            match grid_action {
                grid::GridAction::OpenGallery(index) => {
                    log::info!("opening gallery at project {}", index);
                    self.active_flow = Some(Flow::Gallery {
                        session: GallerySession::new(self.library.len(), index),
                        swipe: 0.0,
                        opened_at: now,
                    });
                }
                grid::GridAction::OpenDetail(index) => {
                    log::info!("opening detail for project {}", index);
                    self.active_flow = Some(Flow::Detail {
                        index,
                        opened_at: now,
                    });
                }
                grid::GridAction::NewSketch => {
                    log::info!("opening drawing surface");
                    self.active_flow = Some(Flow::Sketch {
                        session: SketchSession::new(),
                        opened_at: now,
                    });
                }
                grid::GridAction::None => {}
            }
        }

        let mut dismissed = false;
        if let Some(flow) = &mut self.active_flow {
            let fade = (((now - flow.opened_at()) / FLOW_FADE_SECS).clamp(0.0, 1.0)) as f32;
            if fade < 1.0 {
                ctx.request_repaint();
            }

            match flow {
                Flow::Gallery { session, swipe, .. } => {
                    match gallery::show(ctx, &self.library, &self.textures, session, swipe, fade) {
                        gallery::GalleryAction::GoPrevious => {
                            if session.go_to_previous() {
                                log::info!(
                                    "gallery page {}/{}",
                                    session.current_index() + 1,
                                    session.page_count()
                                );
                            }
                        }
                        gallery::GalleryAction::GoNext => {
                            if session.go_to_next() {
                                log::info!(
                                    "gallery page {}/{}",
                                    session.current_index() + 1,
                                    session.page_count()
                                );
                            }
                        }
                        gallery::GalleryAction::Dismiss => dismissed = true,
                        gallery::GalleryAction::None => {}
                    }
                }
                Flow::Detail { index, .. } => {
                    if let Some(project) = self.library.get(*index) {
                        let texture = self.textures.get(*index);
                        match detail::show(ctx, project, texture, fade) {
                            detail::DetailAction::Dismiss => dismissed = true,
                            detail::DetailAction::None => {}
                        }
                    } else {
                        dismissed = true;
                    }
                }
                Flow::Sketch { session, .. } => match canvas::show(ctx, session, fade) {
                    canvas::CanvasAction::StrokeBegan(point) => {
                        session.begin_stroke(point);
                    }
                    canvas::CanvasAction::StrokeExtended(point) => {
                        session.extend_stroke(point);
                    }
                    canvas::CanvasAction::StrokeEnded => {
                        session.end_stroke();
                        log::info!("stroke finished with {} points", session.path().points().len());
                    }
                    canvas::CanvasAction::Dismiss => dismissed = true,
                    canvas::CanvasAction::None => {}
                },
            }
        }

        if dismissed {
            // Dropping the flow discards its session; the grid needs no
            // restoration because it was never torn down.
            log::info!("flow dismissed, back to grid");
            self.active_flow = None;
        }
    }
}

//! Top nav bar — site name and section links with active highlight

use eframe::egui;
use tracing::debug;

use crate::theme::colors;
use crate::time::now_seconds;

use super::{FolioApp, ScrollTarget, Section};

impl FolioApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&self.content.profile.name)
                    .color(colors::TEXT_PRIMARY)
                    .strong()
                    .size(16.0),
            );

            // Links laid out from the right edge; reversed so they read in
            // page order
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for (i, section) in Section::ALL.iter().enumerate().rev() {
                    let active = self.active_section == Some(i);
                    let color = if active {
                        colors::ACCENT
                    } else {
                        colors::TEXT_SECONDARY
                    };
                    let response = ui.selectable_label(
                        active,
                        egui::RichText::new(section.label()).color(color).size(13.0),
                    );
                    if response.clicked() {
                        // Nothing recorded yet (first frames) → no-op
                        if let Some(offset) = self.layout.resolve(ScrollTarget::Section(i)) {
                            debug!(section = section.label(), "nav link clicked");
                            self.scroll.scroll_to(offset);
                        }
                    }
                    ui.add_space(4.0);
                }
            });
        });
    }
}

/// FPS counter using platform-agnostic time
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        let now = now_seconds() * 1000.0;
        self.frames.push(now);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        if self.frames.len() < 2 {
            return 0.0;
        }
        let elapsed = self.frames.last().unwrap() - self.frames.first().unwrap();
        if elapsed == 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

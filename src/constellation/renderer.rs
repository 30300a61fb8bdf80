//! CPU painter for the constellation field
//!
//! Paints onto the background layer each frame; the panels above keep
//! transparent frames so the field shows through.

use eframe::egui;

use super::data::ParticleField;
use crate::theme::colors;

/// Paint the field into `rect`. Clears to the page background, then lines
/// under dots so connections never cover a particle.
pub fn paint_field(field: &ParticleField, painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, colors::BG_PRIMARY);

    let ink = colors::PARTICLE;

    field.for_each_connection(|a, b, opacity| {
        let alpha = (opacity * 255.0) as u8;
        if alpha == 0 {
            return;
        }
        let color = egui::Color32::from_rgba_unmultiplied(ink.r(), ink.g(), ink.b(), alpha);
        painter.line_segment(
            [
                egui::pos2(rect.min.x + a.x, rect.min.y + a.y),
                egui::pos2(rect.min.x + b.x, rect.min.y + b.y),
            ],
            egui::Stroke::new(1.0, color),
        );
    });

    for p in field.particles() {
        painter.circle_filled(
            egui::pos2(rect.min.x + p.x, rect.min.y + p.y),
            p.radius,
            ink,
        );
    }
}

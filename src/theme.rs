//! Light academic theme — warm paper background, slate ink

use egui::Color32;

/// Named palette for the whole site
pub mod colors {
    use super::Color32;

    // === Backgrounds (paper white to soft grey) ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 250, 247);  // #FAFAF7 - paper
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(242, 242, 237); // #F2F2ED - cards
    pub const BG_HOVER: Color32 = Color32::from_rgb(232, 232, 226);    // #E8E8E2 - hover states

    // === Text (slate ink to grey) ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(44, 62, 80);    // #2C3E50 - slate ink
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(93, 109, 126); // #5D6D7E - secondary
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(149, 165, 166);   // #95A5A6 - muted

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 212);       // #DCDCD4 - subtle borders

    // === Accent (links, active controls) ===
    pub const ACCENT: Color32 = Color32::from_rgb(41, 128, 185);        // #2980B9

    // === Constellation background ===
    // Dots and connection lines share the ink color; lines get a distance-based alpha
    pub const PARTICLE: Color32 = TEXT_PRIMARY;
}

/// Create the site's egui Visuals — flat, light, low-contrast chrome
pub fn site_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_PRIMARY;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.weak_bg_fill = BG_PRIMARY;

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.widgets.active.weak_bg_fill = BG_HOVER;

    // Selection - accent on paper
    visuals.selection.bg_fill = Color32::from_rgb(214, 230, 242);
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    visuals.hyperlink_color = ACCENT;

    // No shadows - flat design
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

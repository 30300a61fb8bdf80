//! Page sections — hero, about, experience timeline, skills, contact

use eframe::egui;

use crate::core::observe::{Element, RevealTracker};
use crate::theme::colors;

use super::{FolioApp, Section, REVEAL_SECONDS};

/// Animated opacity for an element: 0 until first revealed, easing to 1 after.
pub(crate) fn reveal_alpha(ui: &egui::Ui, reveals: &RevealTracker, element: Element) -> f32 {
    let revealed = reveals.is_revealed(element);
    ui.ctx()
        .animate_bool_with_time(egui::Id::new(("reveal", element)), revealed, REVEAL_SECONDS)
}

pub(crate) fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .color(colors::TEXT_PRIMARY)
            .size(24.0)
            .strong(),
    );
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(12.0);
}

impl FolioApp {
    pub(crate) fn render_hero(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(&self.content.profile.name)
                .color(colors::TEXT_PRIMARY)
                .size(34.0)
                .strong(),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(&self.content.profile.tagline)
                .color(colors::TEXT_SECONDARY)
                .size(16.0),
        );
    }

    pub(crate) fn render_about(&mut self, ui: &mut egui::Ui) {
        let element = Element::Section(Section::About.index());
        let alpha = reveal_alpha(ui, &self.reveals, element);
        let rect = ui
            .scope(|ui| {
                ui.set_opacity(alpha);
                section_heading(ui, Section::About.label());
                for paragraph in &self.content.profile.about {
                    ui.label(
                        egui::RichText::new(paragraph)
                            .color(colors::TEXT_SECONDARY)
                            .size(15.0),
                    );
                    ui.add_space(8.0);
                }
            })
            .response
            .rect;
        self.layout.sections[Section::About.index()] = Some(self.layout.band(rect));
    }

    pub(crate) fn render_experience(&mut self, ui: &mut egui::Ui) {
        let element = Element::Section(Section::Experience.index());
        let alpha = reveal_alpha(ui, &self.reveals, element);
        self.layout.timeline = vec![None; self.content.timeline.len()];

        let rect = ui
            .scope(|ui| {
                ui.set_opacity(alpha);
                section_heading(ui, Section::Experience.label());
                for (i, entry) in self.content.timeline.iter().enumerate() {
                    let item_alpha = reveal_alpha(ui, &self.reveals, Element::TimelineItem(i));
                    let item_rect = ui
                        .scope(|ui| {
                            ui.multiply_opacity(item_alpha);
                            ui.label(
                                egui::RichText::new(&entry.period)
                                    .color(colors::TEXT_MUTED)
                                    .size(12.0),
                            );
                            ui.label(
                                egui::RichText::new(&entry.title)
                                    .color(colors::TEXT_PRIMARY)
                                    .size(16.0)
                                    .strong(),
                            );
                            ui.label(
                                egui::RichText::new(&entry.organization)
                                    .color(colors::ACCENT)
                                    .size(13.0),
                            );
                            ui.add_space(2.0);
                            ui.label(
                                egui::RichText::new(&entry.summary)
                                    .color(colors::TEXT_SECONDARY)
                                    .size(14.0),
                            );
                        })
                        .response
                        .rect;
                    self.layout.timeline[i] = Some(self.layout.band(item_rect));
                    ui.add_space(18.0);
                }
            })
            .response
            .rect;
        self.layout.sections[Section::Experience.index()] = Some(self.layout.band(rect));
    }

    pub(crate) fn render_skills(&mut self, ui: &mut egui::Ui) {
        let element = Element::Section(Section::Skills.index());
        let alpha = reveal_alpha(ui, &self.reveals, element);
        self.layout.skills = vec![None; self.content.skills.len()];

        let rect = ui
            .scope(|ui| {
                ui.set_opacity(alpha);
                section_heading(ui, Section::Skills.label());
                ui.horizontal_wrapped(|ui| {
                    for (i, group) in self.content.skills.iter().enumerate() {
                        let card_alpha = reveal_alpha(ui, &self.reveals, Element::SkillCard(i));
                        let card_rect = ui
                            .scope(|ui| {
                                ui.multiply_opacity(card_alpha);
                                egui::Frame::new()
                                    .fill(colors::BG_ELEVATED)
                                    .stroke(egui::Stroke::new(1.0, colors::BORDER))
                                    .corner_radius(6.0)
                                    .inner_margin(12.0)
                                    .show(ui, |ui| {
                                        ui.set_min_width(180.0);
                                        ui.label(
                                            egui::RichText::new(&group.name)
                                                .color(colors::TEXT_PRIMARY)
                                                .size(14.0)
                                                .strong(),
                                        );
                                        ui.add_space(4.0);
                                        for item in &group.items {
                                            ui.label(
                                                egui::RichText::new(item)
                                                    .color(colors::TEXT_SECONDARY)
                                                    .size(13.0),
                                            );
                                        }
                                    });
                            })
                            .response
                            .rect;
                        self.layout.skills[i] = Some(self.layout.band(card_rect));
                        ui.add_space(10.0);
                    }
                });
            })
            .response
            .rect;
        self.layout.sections[Section::Skills.index()] = Some(self.layout.band(rect));
    }

    pub(crate) fn render_contact(&mut self, ui: &mut egui::Ui) {
        let element = Element::Section(Section::Contact.index());
        let alpha = reveal_alpha(ui, &self.reveals, element);
        let rect = ui
            .scope(|ui| {
                ui.set_opacity(alpha);
                section_heading(ui, Section::Contact.label());
                if !self.content.contact.email.is_empty() {
                    ui.hyperlink_to(
                        self.content.contact.email.clone(),
                        format!("mailto:{}", self.content.contact.email),
                    );
                    ui.add_space(8.0);
                }
                ui.horizontal(|ui| {
                    for link in &self.content.contact.links {
                        ui.hyperlink_to(&link.label, &link.url);
                        ui.add_space(10.0);
                    }
                });
            })
            .response
            .rect;
        self.layout.sections[Section::Contact.index()] = Some(self.layout.band(rect));
    }
}

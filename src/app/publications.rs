//! Publication list — filter rows, entry cards, show-more control

use eframe::egui;
use tracing::info;

use crate::core::content::Publication;
use crate::core::filter::{FilterKind, FilterValue};
use crate::core::observe::Element;
use crate::theme::colors;
use crate::time::now_seconds;

use super::sections::{reveal_alpha, section_heading};
use super::{FolioApp, PendingScroll, ScrollTarget, Section, SHOW_MORE_SCROLL_DELAY};

impl FolioApp {
    pub(crate) fn render_publications(&mut self, ui: &mut egui::Ui) {
        let element = Element::Section(Section::Publications.index());
        let alpha = reveal_alpha(ui, &self.reveals, element);

        let rect = ui
            .scope(|ui| {
                ui.set_opacity(alpha);
                section_heading(ui, Section::Publications.label());

                let years = self.content.years();
                let topics = self.content.topics();
                self.filter_row(ui, FilterKind::Year, "Year:", years);
                self.filter_row(ui, FilterKind::Topic, "Topic:", topics);
                ui.add_space(10.0);

                let flags = self.filter.visible_flags(&self.content.publications);
                self.layout.pub_items = vec![None; self.content.publications.len()];

                for (i, entry) in self.content.publications.iter().enumerate() {
                    if !flags[i] {
                        continue;
                    }
                    let item_alpha = reveal_alpha(ui, &self.reveals, Element::PubItem(i));
                    let item_rect = ui
                        .scope(|ui| {
                            ui.multiply_opacity(item_alpha);
                            pub_card(ui, entry);
                        })
                        .response
                        .rect;
                    self.layout.pub_items[i] = Some(self.layout.band(item_rect));
                    ui.add_space(14.0);
                }

                if self.filter.matching_count(&self.content.publications) == 0 {
                    ui.label(
                        egui::RichText::new("No publications match the selected filters.")
                            .color(colors::TEXT_MUTED)
                            .size(13.0),
                    );
                }

                if self.filter.show_more_visible(&self.content.publications) {
                    ui.add_space(6.0);
                    let remaining = self.filter.matching_count(&self.content.publications)
                        - self.filter.visible_count(&self.content.publications);
                    let button = egui::Button::new(
                        egui::RichText::new(format!("Show {remaining} more"))
                            .color(colors::ACCENT)
                            .size(13.0),
                    )
                    .fill(colors::BG_ELEVATED)
                    .stroke(egui::Stroke::new(1.0, colors::BORDER));
                    if ui.add(button).clicked() {
                        let anchor = self.filter.first_expanded_index(&self.content.publications);
                        self.filter.show_all();
                        info!("showing all publications");
                        if let Some(index) = anchor {
                            self.pending_scroll = Some(PendingScroll {
                                fire_at: now_seconds() + SHOW_MORE_SCROLL_DELAY,
                                target: ScrollTarget::PubEntry(index),
                            });
                        }
                    }
                }
            })
            .response
            .rect;
        self.layout.sections[Section::Publications.index()] = Some(self.layout.band(rect));
    }

    /// One row of filter buttons. The selected value renders active; picking
    /// any value — even the already-selected one — collapses the list.
    fn filter_row(
        &mut self,
        ui: &mut egui::Ui,
        kind: FilterKind,
        label: &str,
        values: Vec<String>,
    ) {
        ui.horizontal_wrapped(|ui| {
            ui.label(
                egui::RichText::new(label)
                    .color(colors::TEXT_MUTED)
                    .size(12.0),
            );
            let choices =
                std::iter::once(FilterValue::All).chain(values.into_iter().map(FilterValue::Only));
            for choice in choices {
                let active = *self.filter.selected(kind) == choice;
                let color = if active {
                    colors::ACCENT
                } else {
                    colors::TEXT_SECONDARY
                };
                let response = ui.selectable_label(
                    active,
                    egui::RichText::new(choice.label()).color(color).size(12.0),
                );
                if response.clicked() {
                    info!(kind = ?kind, value = choice.label(), "filter changed");
                    self.filter.set(kind, choice);
                }
            }
        });
    }
}

fn pub_card(ui: &mut egui::Ui, entry: &Publication) {
    ui.label(
        egui::RichText::new(&entry.title)
            .color(colors::TEXT_PRIMARY)
            .size(15.0)
            .strong(),
    );
    if !entry.authors.is_empty() {
        ui.label(
            egui::RichText::new(&entry.authors)
                .color(colors::TEXT_SECONDARY)
                .size(13.0),
        );
    }
    ui.horizontal_wrapped(|ui| {
        let venue_line = if entry.year.is_empty() {
            entry.venue.clone()
        } else {
            format!("{} {}", entry.venue, entry.year)
        };
        ui.label(
            egui::RichText::new(venue_line)
                .color(colors::TEXT_MUTED)
                .size(12.0),
        );
        for topic in &entry.topics {
            ui.label(
                egui::RichText::new(format!("· {topic}"))
                    .color(colors::ACCENT)
                    .size(12.0),
            );
        }
    });
}

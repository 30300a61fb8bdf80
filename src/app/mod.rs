//! Personal site app
//!
//! Owns all page state and drives the frame loop: the constellation field,
//! the smooth scroll driver, reveal/nav observation, and the panel layout.
//! Runs unchanged on native and WASM.

mod header;
mod publications;
mod scroll;
mod sections;

use eframe::egui;
use tracing::{debug, info};

use crate::constellation::{paint_field, ParticleField};
use crate::core::content::SiteContent;
use crate::core::filter::PubFilter;
use crate::core::observe::{self, Band, Element, RevealTracker};
use crate::theme::{colors, site_visuals};
use crate::time::now_seconds;

use header::FpsCounter;
use scroll::ScrollDriver;

/// Seconds an element takes to fade in once revealed.
pub(crate) const REVEAL_SECONDS: f32 = 0.6;
/// Deferral between "show more" and the follow-up scroll, so the expanded
/// list has had a frame to lay out.
const SHOW_MORE_SCROLL_DELAY: f64 = 0.1;
/// Breathing room above a scroll target.
const SCROLL_PADDING: f32 = 8.0;
/// Content column width cap.
pub(crate) const CONTENT_MAX_WIDTH: f32 = 760.0;
/// Vertical gap between sections.
pub(crate) const SECTION_GAP: f32 = 56.0;

/// Nav sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Experience,
    Skills,
    Publications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Publications,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Publications => "Publications",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Where a deferred scroll should land. Resolved against the layout recorded
/// in the frame it fires, not the frame it was scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScrollTarget {
    Section(usize),
    PubEntry(usize),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingScroll {
    pub fire_at: f64,
    pub target: ScrollTarget,
}

/// Element positions recorded while rendering, in content coordinates.
/// Rewritten every frame; reads act on the previous frame's values.
#[derive(Debug, Default)]
pub(crate) struct PageLayout {
    /// Content top in screen coordinates for the current frame.
    pub origin: f32,
    /// Visible height of the scroll viewport.
    pub viewport_height: f32,
    pub sections: Vec<Option<Band>>,
    pub timeline: Vec<Option<Band>>,
    pub skills: Vec<Option<Band>>,
    pub pub_items: Vec<Option<Band>>,
}

impl PageLayout {
    /// Map a screen-space rect into a content-space band.
    pub fn band(&self, rect: egui::Rect) -> Band {
        Band::new(rect.top() - self.origin, rect.bottom() - self.origin)
    }

    /// Scroll offset that brings a target into view, or None when the target
    /// was never laid out (hidden entry, first frames) — callers no-op then.
    pub fn resolve(&self, target: ScrollTarget) -> Option<f32> {
        let band = match target {
            ScrollTarget::Section(i) => self.sections.get(i).copied().flatten(),
            ScrollTarget::PubEntry(i) => self.pub_items.get(i).copied().flatten(),
        }?;
        Some((band.top - SCROLL_PADDING).max(0.0))
    }
}

pub struct FolioApp {
    pub(crate) content: SiteContent,
    pub(crate) field: ParticleField,
    pub(crate) filter: PubFilter,
    pub(crate) reveals: RevealTracker,
    pub(crate) scroll: ScrollDriver,
    pub(crate) layout: PageLayout,
    pub(crate) pending_scroll: Option<PendingScroll>,
    /// Index into [`Section::ALL`]; keeps its last value while no section
    /// crosses the middle of the viewport.
    pub(crate) active_section: Option<usize>,
    pub(crate) scroll_offset: f32,
    pub(crate) fps_counter: FpsCounter,
    last_stats_tick: f64,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>, content: SiteContent) -> Self {
        cc.egui_ctx.set_visuals(site_visuals());

        // The real viewport arrives with the first frame; until then any
        // placeholder size will do, the resize check rebuilds the field.
        let screen = cc.egui_ctx.screen_rect();
        let (width, height) = if screen.width() > 1.0 {
            (screen.width(), screen.height())
        } else {
            (1280.0, 720.0)
        };

        Self {
            content,
            field: ParticleField::new(width, height),
            filter: PubFilter::default(),
            reveals: RevealTracker::default(),
            scroll: ScrollDriver::default(),
            layout: PageLayout::default(),
            pending_scroll: None,
            active_section: None,
            scroll_offset: 0.0,
            fps_counter: FpsCounter::new(),
            last_stats_tick: 0.0,
        }
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        self.layout.origin = ui.cursor().top();
        self.layout.sections = vec![None; Section::ALL.len()];

        let width = ui.available_width();
        let content_width = CONTENT_MAX_WIDTH.min(width - 32.0);
        let side_margin = ((width - content_width) / 2.0).max(16.0);

        ui.horizontal(|ui| {
            ui.add_space(side_margin);
            ui.vertical(|ui| {
                ui.set_width(content_width);
                ui.add_space(48.0);
                self.render_hero(ui);
                ui.add_space(SECTION_GAP);
                self.render_about(ui);
                ui.add_space(SECTION_GAP);
                self.render_experience(ui);
                ui.add_space(SECTION_GAP);
                self.render_skills(ui);
                ui.add_space(SECTION_GAP);
                self.render_publications(ui);
                ui.add_space(SECTION_GAP);
                self.render_contact(ui);
                ui.add_space(96.0);
            });
        });
    }

    /// Run the per-frame observation pass against the layout just recorded:
    /// sticky reveals plus the active nav section.
    fn observe_layout(&mut self) {
        let top = self.scroll_offset;
        let height = self.layout.viewport_height;
        if height <= 0.0 {
            return;
        }

        for (i, band) in self.layout.sections.iter().enumerate() {
            if let Some(b) = band {
                self.reveals.observe(Element::Section(i), *b, top, height);
            }
        }
        for (i, band) in self.layout.timeline.iter().enumerate() {
            if let Some(b) = band {
                self.reveals.observe(Element::TimelineItem(i), *b, top, height);
            }
        }
        for (i, band) in self.layout.skills.iter().enumerate() {
            if let Some(b) = band {
                self.reveals.observe(Element::SkillCard(i), *b, top, height);
            }
        }
        for (i, band) in self.layout.pub_items.iter().enumerate() {
            if let Some(b) = band {
                self.reveals.observe(Element::PubItem(i), *b, top, height);
            }
        }

        let hit = self
            .layout
            .sections
            .iter()
            .enumerate()
            .find(|(_, band)| band.is_some_and(|b| observe::in_middle_band(b, top, height)))
            .map(|(i, _)| i);
        if let Some(i) = hit {
            if self.active_section != Some(i) {
                debug!(section = Section::ALL[i].label(), "active section changed");
                self.active_section = Some(i);
            }
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The constellation never pauses
        ctx.request_repaint();

        let now = now_seconds();
        let dt = ctx.input(|i| i.stable_dt).min(0.1);

        // Background field: full rebuild on viewport change, then one frame
        // of travel
        let screen = ctx.screen_rect();
        let (field_w, field_h) = self.field.size();
        if (field_w - screen.width()).abs() > 0.5 || (field_h - screen.height()).abs() > 0.5 {
            debug!(
                width = screen.width(),
                height = screen.height(),
                "viewport resized, field rebuilt"
            );
            self.field.resize(screen.width(), screen.height());
        }
        self.field.step();
        paint_field(
            &self.field,
            &ctx.layer_painter(egui::LayerId::background()),
            screen,
        );

        // Deferred show-more scroll; dropped silently if the anchor never
        // laid out
        if let Some(pending) = self.pending_scroll {
            if now >= pending.fire_at {
                self.pending_scroll = None;
                if let Some(offset) = self.layout.resolve(pending.target) {
                    self.scroll.scroll_to(offset);
                }
            }
        }

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(colors::BG_PRIMARY)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| self.render_header(ui));

        // Transparent frame so the constellation shows through
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical();
                if let Some(offset) = self.scroll.tick(dt) {
                    area = area.vertical_scroll_offset(offset);
                }
                let output = area.show(ui, |ui| self.render_page(ui));
                self.scroll.sync(output.state.offset.y);
                self.scroll_offset = output.state.offset.y;
                self.layout.viewport_height = output.inner_rect.height();
            });

        self.observe_layout();

        // Once-per-second stats line
        if now - self.last_stats_tick >= 1.0 {
            let visible = self.filter.visible_count(&self.content.publications);
            let matching = self.filter.matching_count(&self.content.publications);
            info!(
                fps = self.fps_counter.fps() as u32,
                particles = self.field.particles().len(),
                visible_pubs = visible,
                matching_pubs = matching,
                active_section = self.active_section.map(|i| Section::ALL[i].label()),
                "stats"
            );
            self.last_stats_tick = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_resolves_band_top_with_padding() {
        let mut layout = PageLayout {
            sections: vec![None; Section::ALL.len()],
            pub_items: vec![None, Some(Band::new(2000.0, 2080.0))],
            ..PageLayout::default()
        };
        layout.sections[Section::Skills.index()] = Some(Band::new(1200.0, 1600.0));

        assert_eq!(
            layout.resolve(ScrollTarget::Section(Section::Skills.index())),
            Some(1192.0)
        );
        assert_eq!(layout.resolve(ScrollTarget::PubEntry(1)), Some(1992.0));
    }

    #[test]
    fn missing_targets_resolve_to_nothing() {
        let layout = PageLayout {
            sections: vec![None; Section::ALL.len()],
            ..PageLayout::default()
        };
        // Never laid out → callers treat the click/deferral as a no-op
        assert_eq!(
            layout.resolve(ScrollTarget::Section(Section::About.index())),
            None
        );
        assert_eq!(layout.resolve(ScrollTarget::PubEntry(7)), None);
    }

    #[test]
    fn near_page_top_targets_clamp_to_zero() {
        let layout = PageLayout {
            sections: vec![Some(Band::new(4.0, 300.0))],
            ..PageLayout::default()
        };
        assert_eq!(layout.resolve(ScrollTarget::Section(0)), Some(0.0));
    }

    #[test]
    fn band_mapping_subtracts_the_content_origin() {
        let layout = PageLayout {
            origin: 120.0,
            ..PageLayout::default()
        };
        let band = layout.band(egui::Rect::from_min_max(
            egui::pos2(0.0, 150.0),
            egui::pos2(100.0, 250.0),
        ));
        assert_eq!(band, Band::new(30.0, 130.0));
    }

    #[test]
    fn sections_are_in_page_order() {
        assert_eq!(Section::ALL.len(), 5);
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert!(!section.label().is_empty());
        }
    }
}

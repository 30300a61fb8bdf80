//! Scroll-position observation
//!
//! Two derived facts about the page are recomputed from scroll position each
//! frame: which elements have entered view (sticky, drives the fade-in
//! animation) and which section sits in the middle of the viewport (drives
//! the active nav link).

use std::collections::HashSet;

/// Vertical extent of an element in content coordinates (independent of the
/// current scroll offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f32,
    pub bottom: f32,
}

impl Band {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }
}

/// An observable element, keyed by its rank within its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Section(usize),
    TimelineItem(usize),
    SkillCard(usize),
    PubItem(usize),
}

/// Reveal margin at the bottom of the viewport: an element must rise this far
/// above the fold before it fades in.
pub const SECTION_REVEAL_MARGIN: f32 = 50.0;
/// Publication items reveal later than the rest of the page.
pub const PUB_REVEAL_MARGIN: f32 = 100.0;

impl Element {
    fn reveal_margin(self) -> f32 {
        match self {
            Element::PubItem(_) => PUB_REVEAL_MARGIN,
            _ => SECTION_REVEAL_MARGIN,
        }
    }
}

/// true iff the band intersects the viewport shrunk by `bottom_margin`.
pub fn in_reveal_band(band: Band, scroll_top: f32, viewport_height: f32, bottom_margin: f32) -> bool {
    let visible_top = scroll_top;
    let visible_bottom = scroll_top + viewport_height - bottom_margin;
    band.top < visible_bottom && band.bottom > visible_top
}

/// true iff the band overlaps the middle fifth of the viewport.
pub fn in_middle_band(band: Band, scroll_top: f32, viewport_height: f32) -> bool {
    let mid_top = scroll_top + viewport_height * 0.4;
    let mid_bottom = scroll_top + viewport_height * 0.6;
    band.top < mid_bottom && band.bottom > mid_top
}

/// First band overlapping the middle of the viewport, if any.
pub fn active_index(bands: &[Band], scroll_top: f32, viewport_height: f32) -> Option<usize> {
    bands
        .iter()
        .position(|b| in_middle_band(*b, scroll_top, viewport_height))
}

/// Sticky per-element reveal flags. Once an element has been seen it stays
/// revealed for the lifetime of the page; it is effectively unobserved from
/// then on.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<Element>,
}

impl RevealTracker {
    /// Check an element against the current viewport, marking it revealed on
    /// first intersection. Returns the (possibly new) revealed state.
    pub fn observe(
        &mut self,
        element: Element,
        band: Band,
        scroll_top: f32,
        viewport_height: f32,
    ) -> bool {
        if self.revealed.contains(&element) {
            return true;
        }
        if in_reveal_band(band, scroll_top, viewport_height, element.reveal_margin()) {
            self.revealed.insert(element);
            return true;
        }
        false
    }

    pub fn is_revealed(&self, element: Element) -> bool {
        self.revealed.contains(&element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_below_the_fold_is_not_revealed() {
        let mut tracker = RevealTracker::default();
        // Viewport 0..800, margin 50 → visible reveal zone ends at 750
        let band = Band::new(760.0, 900.0);
        assert!(!tracker.observe(Element::Section(0), band, 0.0, 800.0));
        assert!(!tracker.is_revealed(Element::Section(0)));
    }

    #[test]
    fn scrolling_into_view_reveals_and_sticks() {
        let mut tracker = RevealTracker::default();
        let band = Band::new(760.0, 900.0);
        assert!(!tracker.observe(Element::Section(0), band, 0.0, 800.0));

        // Scroll down 100px: band top 760 < 100 + 800 - 50
        assert!(tracker.observe(Element::Section(0), band, 100.0, 800.0));

        // Scroll back to the top: stays revealed
        assert!(tracker.observe(Element::Section(0), band, 0.0, 800.0));
        assert!(tracker.is_revealed(Element::Section(0)));
    }

    #[test]
    fn pub_items_use_the_deeper_margin() {
        let mut tracker = RevealTracker::default();
        // Visible at margin 50 but not at margin 100
        let band = Band::new(720.0, 780.0);
        assert!(tracker.observe(Element::Section(1), band, 0.0, 800.0));
        assert!(!tracker.observe(Element::PubItem(1), band, 0.0, 800.0));

        // Another 60px of scroll brings the pub item in too
        assert!(tracker.observe(Element::PubItem(1), band, 60.0, 800.0));
    }

    #[test]
    fn elements_are_tracked_independently() {
        let mut tracker = RevealTracker::default();
        let visible = Band::new(100.0, 200.0);
        let hidden = Band::new(2000.0, 2200.0);
        assert!(tracker.observe(Element::TimelineItem(0), visible, 0.0, 800.0));
        assert!(!tracker.observe(Element::TimelineItem(1), hidden, 0.0, 800.0));
        assert!(tracker.is_revealed(Element::TimelineItem(0)));
        assert!(!tracker.is_revealed(Element::TimelineItem(1)));
    }

    #[test]
    fn active_section_is_the_one_in_the_middle_band() {
        // Three stacked sections of 1000px each, viewport 800px
        let bands = [
            Band::new(0.0, 1000.0),
            Band::new(1000.0, 2000.0),
            Band::new(2000.0, 3000.0),
        ];
        // Middle band at offset 0 is 320..480 → section 0
        assert_eq!(active_index(&bands, 0.0, 800.0), Some(0));
        // Offset 900 → middle band 1220..1380 → section 1
        assert_eq!(active_index(&bands, 900.0, 800.0), Some(1));
        // Offset 2600 → middle band 2920..3080 → section 2
        assert_eq!(active_index(&bands, 2600.0, 800.0), Some(2));
    }

    #[test]
    fn no_band_in_the_middle_means_no_active_section() {
        let bands = [Band::new(0.0, 100.0)];
        // Middle band at offset 0 is 320..480; the only section ends at 100
        assert_eq!(active_index(&bands, 0.0, 800.0), None);
        assert_eq!(active_index(&[], 0.0, 800.0), None);
    }

    #[test]
    fn boundary_touch_does_not_count_as_overlap() {
        // Band ending exactly at the middle band's top edge
        let band = Band::new(0.0, 320.0);
        assert!(!in_middle_band(band, 0.0, 800.0));
        // Band starting exactly at the reveal zone's bottom edge
        let band = Band::new(750.0, 900.0);
        assert!(!in_reveal_band(band, 0.0, 800.0, 50.0));
    }
}

//! Publication filter state and visibility rules
//!
//! Visibility is never stored per entry. It is recomputed from the filter
//! state as a pure function, so the list can never drift out of sync with
//! the controls.

use super::content::Publication;

/// Entries shown per filter combination before "show more" expands the list.
pub const INITIAL_VISIBLE_COUNT: usize = 4;

/// A single filter dimension: everything, or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    pub fn label(&self) -> &str {
        match self {
            FilterValue::All => "All",
            FilterValue::Only(v) => v,
        }
    }
}

/// Which filter row a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Year,
    Topic,
}

#[derive(Debug, Clone, Default)]
pub struct PubFilter {
    pub year: FilterValue,
    pub topic: FilterValue,
    pub showing_all: bool,
}

impl PubFilter {
    /// Select a filter value. Any change of either dimension collapses the
    /// list back to the initial cap, even when the same value is re-selected.
    pub fn set(&mut self, kind: FilterKind, value: FilterValue) {
        match kind {
            FilterKind::Year => self.year = value,
            FilterKind::Topic => self.topic = value,
        }
        self.showing_all = false;
    }

    pub fn selected(&self, kind: FilterKind) -> &FilterValue {
        match kind {
            FilterKind::Year => &self.year,
            FilterKind::Topic => &self.topic,
        }
    }

    /// Lift the initial-count cap until the next filter change.
    pub fn show_all(&mut self) {
        self.showing_all = true;
    }

    /// Does an entry match both active filters?
    ///
    /// Year matches exactly; topic matches by substring containment within
    /// any of the entry's tags, so a filter value that happens to be a
    /// substring of a longer tag also matches. An entry with no tags never
    /// matches a concrete topic filter.
    pub fn matches(&self, entry: &Publication) -> bool {
        let year_ok = match &self.year {
            FilterValue::All => true,
            FilterValue::Only(y) => entry.year == *y,
        };
        let topic_ok = match &self.topic {
            FilterValue::All => true,
            FilterValue::Only(t) => entry.topics.iter().any(|tag| tag.contains(t.as_str())),
        };
        year_ok && topic_ok
    }

    /// One visibility flag per entry, in entry order: an entry is visible iff
    /// it matches both filters and either the cap is lifted or its rank among
    /// the matches is within the initial count.
    pub fn visible_flags(&self, entries: &[Publication]) -> Vec<bool> {
        let mut matched = 0usize;
        entries
            .iter()
            .map(|entry| {
                if !self.matches(entry) {
                    return false;
                }
                matched += 1;
                self.showing_all || matched <= INITIAL_VISIBLE_COUNT
            })
            .collect()
    }

    pub fn matching_count(&self, entries: &[Publication]) -> usize {
        entries.iter().filter(|e| self.matches(e)).count()
    }

    pub fn visible_count(&self, entries: &[Publication]) -> usize {
        self.visible_flags(entries).iter().filter(|v| **v).count()
    }

    /// The "show more" control is displayed only while some matching entries
    /// are still hidden behind the cap.
    pub fn show_more_visible(&self, entries: &[Publication]) -> bool {
        if self.showing_all {
            return false;
        }
        self.visible_count(entries) < self.matching_count(entries)
    }

    /// Index of the first entry that lifting the cap would reveal — the
    /// scroll anchor for "show more". None when nothing is hidden.
    pub fn first_expanded_index(&self, entries: &[Publication]) -> Option<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, e)| self.matches(e))
            .nth(INITIAL_VISIBLE_COUNT)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(year: &str, topics: &[&str]) -> Publication {
        Publication {
            title: format!("{year} paper"),
            year: year.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            ..Publication::default()
        }
    }

    fn ten_entries() -> Vec<Publication> {
        // 3 entries from 2023, the rest spread across other years
        vec![
            entry("2023", &["consensus"]),
            entry("2022", &["storage"]),
            entry("2023", &["networking"]),
            entry("2021", &["consensus", "storage"]),
            entry("2020", &["formal methods"]),
            entry("2023", &["storage"]),
            entry("2022", &["consensus"]),
            entry("2021", &["networking"]),
            entry("2020", &["storage"]),
            entry("2022", &["formal methods"]),
        ]
    }

    #[test]
    fn default_filter_caps_at_initial_count() {
        let filter = PubFilter::default();
        let entries = ten_entries();
        assert_eq!(filter.visible_count(&entries), INITIAL_VISIBLE_COUNT);
        // The first four entries are the visible ones
        let flags = filter.visible_flags(&entries);
        assert_eq!(flags.iter().filter(|v| **v).count(), 4);
        assert!(flags[..4].iter().all(|v| *v));
        assert!(flags[4..].iter().all(|v| !*v));
    }

    #[test]
    fn fewer_matches_than_cap_shows_all_matches_and_hides_show_more() {
        let mut filter = PubFilter::default();
        filter.set(FilterKind::Year, FilterValue::Only("2023".into()));
        let entries = ten_entries();
        assert_eq!(filter.matching_count(&entries), 3);
        assert_eq!(filter.visible_count(&entries), 3);
        assert!(!filter.show_more_visible(&entries));
    }

    #[test]
    fn all_matching_shows_cap_then_show_all_reveals_everything() {
        let mut filter = PubFilter::default();
        let entries = ten_entries();
        assert_eq!(filter.visible_count(&entries), 4);
        assert!(filter.show_more_visible(&entries));

        filter.show_all();
        assert_eq!(filter.visible_count(&entries), 10);
        assert!(!filter.show_more_visible(&entries));
    }

    #[test]
    fn setting_a_filter_resets_showing_all() {
        let mut filter = PubFilter::default();
        filter.show_all();
        assert!(filter.showing_all);

        filter.set(FilterKind::Topic, FilterValue::Only("storage".into()));
        assert!(!filter.showing_all);

        // Re-selecting the same value still resets
        filter.show_all();
        filter.set(FilterKind::Topic, FilterValue::Only("storage".into()));
        assert!(!filter.showing_all);
    }

    #[test]
    fn topic_click_after_year_and_show_all_recomputes() {
        let mut filter = PubFilter::default();
        let entries = ten_entries();
        filter.set(FilterKind::Year, FilterValue::Only("2022".into()));
        filter.show_all();
        assert!(filter.showing_all);

        filter.set(FilterKind::Topic, FilterValue::Only("consensus".into()));
        assert!(!filter.showing_all);
        let matching = filter.matching_count(&entries);
        assert_eq!(
            filter.visible_count(&entries),
            matching.min(INITIAL_VISIBLE_COUNT)
        );
        // Year filter is still in effect alongside the new topic filter
        assert_eq!(matching, 1);
    }

    #[test]
    fn visible_count_is_min_of_cap_and_matches_for_all_combinations() {
        let entries = ten_entries();
        let years = ["2020", "2021", "2022", "2023"];
        let topics = ["consensus", "storage", "networking", "formal methods"];

        let mut filters = vec![PubFilter::default()];
        for y in years {
            for t in topics {
                filters.push(PubFilter {
                    year: FilterValue::Only(y.into()),
                    topic: FilterValue::Only(t.into()),
                    showing_all: false,
                });
            }
        }
        for filter in filters {
            let matching = filter.matching_count(&entries);
            assert_eq!(
                filter.visible_count(&entries),
                matching.min(INITIAL_VISIBLE_COUNT),
                "filter {filter:?}"
            );
        }
    }

    #[test]
    fn topic_match_is_substring_containment() {
        let filter = PubFilter {
            topic: FilterValue::Only("method".into()),
            ..PubFilter::default()
        };
        // "method" is a substring of the "formal methods" tag
        assert!(filter.matches(&entry("2020", &["formal methods"])));
        assert!(!filter.matches(&entry("2020", &["storage"])));
    }

    #[test]
    fn empty_topics_never_match_a_concrete_topic() {
        let filter = PubFilter {
            topic: FilterValue::Only("storage".into()),
            ..PubFilter::default()
        };
        assert!(!filter.matches(&entry("2024", &[])));
        // But they do match the All topic
        assert!(PubFilter::default().matches(&entry("2024", &[])));
    }

    #[test]
    fn first_expanded_index_is_the_fifth_match() {
        let filter = PubFilter::default();
        let entries = ten_entries();
        assert_eq!(filter.first_expanded_index(&entries), Some(4));

        let mut year_filter = PubFilter::default();
        year_filter.set(FilterKind::Year, FilterValue::Only("2023".into()));
        // Only 3 matches — nothing hidden, no anchor
        assert_eq!(year_filter.first_expanded_index(&entries), None);
    }

    #[test]
    fn visibility_skips_non_matching_entries_when_ranking() {
        // Matching entries interleaved with non-matching ones: the cap counts
        // match rank, not raw index
        let entries = vec![
            entry("2023", &["a"]),
            entry("1999", &["x"]),
            entry("2023", &["b"]),
            entry("1999", &["x"]),
            entry("2023", &["c"]),
            entry("2023", &["d"]),
            entry("2023", &["e"]),
        ];
        let mut filter = PubFilter::default();
        filter.set(FilterKind::Year, FilterValue::Only("2023".into()));
        let flags = filter.visible_flags(&entries);
        assert_eq!(flags, vec![true, false, true, false, true, true, false]);
    }
}

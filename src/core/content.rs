//! Site content model
//!
//! All text on the page — profile, timeline, skills, publications, contact —
//! is deserialized once at startup. The embedded JSON is the default; entry
//! points may pass an override (a file on native, a `window` global on WASM).

use serde::Deserialize;
use tracing::{info, warn};

/// Content compiled into the binary; used whenever no override is supplied.
pub const EMBEDDED_CONTENT: &str = include_str!("../../assets/content.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One entry in the publication list. Identity is its rank in the list;
/// entries are never created or removed at runtime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub year: String,
    /// Absent or malformed tags deserialize to empty, which never matches a
    /// concrete topic filter.
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The compiled-in content. A broken embedded file renders an empty page
    /// rather than aborting.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_CONTENT).unwrap_or_else(|e| {
            warn!(error = %e, "embedded content invalid, starting empty");
            Self::default()
        })
    }

    /// Resolve the content to display: a parseable override wins, anything
    /// else falls back to the embedded content.
    pub fn from_override(json: Option<&str>) -> Self {
        let content = match json {
            Some(s) => match Self::parse(s) {
                Ok(content) => {
                    info!("content override applied");
                    content
                }
                Err(e) => {
                    warn!(error = %e, "content override invalid, using embedded");
                    Self::embedded()
                }
            },
            None => Self::embedded(),
        };
        info!(
            publications = content.publications.len(),
            timeline = content.timeline.len(),
            "site content loaded"
        );
        content
    }

    /// Distinct publication years, newest first. Feeds the year filter row.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .publications
            .iter()
            .map(|p| p.year.clone())
            .filter(|y| !y.is_empty())
            .collect();
        years.sort();
        years.dedup();
        years.reverse();
        years
    }

    /// Distinct publication topic tags, alphabetical. Feeds the topic filter row.
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self
            .publications
            .iter()
            .flat_map(|p| p.topics.iter().cloned())
            .filter(|t| !t.is_empty())
            .collect();
        topics.sort();
        topics.dedup();
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::parse(EMBEDDED_CONTENT).expect("embedded content must parse");
        assert!(!content.profile.name.is_empty());
        // The show-more widget is only exercised when more entries exist than
        // the initial cap; keep the embedded list above it.
        assert!(content.publications.len() > crate::core::filter::INITIAL_VISIBLE_COUNT);
    }

    #[test]
    fn missing_topics_default_to_empty() {
        let content = SiteContent::parse(
            r#"{"publications": [{"title": "t", "year": "2024"}]}"#,
        )
        .unwrap();
        assert_eq!(content.publications.len(), 1);
        assert!(content.publications[0].topics.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let content =
            SiteContent::parse(r#"{"publications": [], "theme": "dark", "version": 3}"#).unwrap();
        assert!(content.publications.is_empty());
    }

    #[test]
    fn override_falls_back_on_garbage() {
        let content = SiteContent::from_override(Some("not json"));
        // Fallback is the embedded content, not an empty site
        assert!(!content.publications.is_empty());
    }

    #[test]
    fn years_are_distinct_and_newest_first() {
        let content = SiteContent::parse(
            r#"{"publications": [
                {"title": "a", "year": "2021"},
                {"title": "b", "year": "2023"},
                {"title": "c", "year": "2021"},
                {"title": "d", "year": ""}
            ]}"#,
        )
        .unwrap();
        assert_eq!(content.years(), vec!["2023", "2021"]);
    }

    #[test]
    fn topics_are_distinct_and_sorted() {
        let content = SiteContent::parse(
            r#"{"publications": [
                {"title": "a", "topics": ["storage", "consensus"]},
                {"title": "b", "topics": ["consensus"]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(content.topics(), vec!["consensus", "storage"]);
    }
}

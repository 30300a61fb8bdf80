//! Platform-agnostic core module - site content, filter rules, scroll observation

pub mod content;
pub mod filter;
pub mod observe;

pub use content::{Publication, SiteContent};
pub use filter::{FilterKind, FilterValue, PubFilter, INITIAL_VISIBLE_COUNT};
pub use observe::{Band, Element, RevealTracker};

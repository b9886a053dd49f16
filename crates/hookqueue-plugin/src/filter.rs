//! Event filtering for `Noun.Verb` subscription patterns.
//!
//! Subscribers (webhooks, external sinks) declare which events they care
//! about with patterns like `Listing.Created`, `Listing.*`, or
//! `*.Created`. An empty pattern list allows all events.

/// A parsed `Noun.Verb` filter pattern. Either segment may be the `*`
/// wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPattern {
    /// Entity segment.
    pub noun: String,
    /// Action segment.
    pub verb: String,
}

impl EventPattern {
    /// Parses a pattern string, requiring exactly two non-empty dot-free
    /// segments.
    pub fn parse(pattern: &str) -> Option<Self> {
        let (noun, verb) = pattern.split_once('.')?;
        if noun.is_empty() || verb.is_empty() || verb.contains('.') {
            return None;
        }

        Some(Self {
            noun: noun.to_string(),
            verb: verb.to_string(),
        })
    }

    /// Returns whether a concrete `Noun.Verb` event string matches this
    /// pattern, honoring `*` wildcards.
    pub fn matches(&self, event: &str) -> bool {
        let Some(event) = Self::parse(event) else {
            return false;
        };

        (self.noun == "*" || self.noun == event.noun)
            && (self.verb == "*" || self.verb == event.verb)
    }
}

/// Returns whether an event passes a pattern list. An empty or
/// unparseable-only list allows nothing except when the list itself is
/// empty, which allows everything.
pub fn filter_events(event: &str, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return true;
    }

    patterns
        .iter()
        .filter_map(|p| EventPattern::parse(p))
        .any(|pattern| pattern.matches(event))
}

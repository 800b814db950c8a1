use serde_json::Value;

/// Media category understood by the backend's listing and search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum MediaType {
    #[default]
    Movie,
    Tv,
    All,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
            MediaType::All => "all",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Some(MediaType::Movie),
            "tv" | "show" | "shows" => Some(MediaType::Tv),
            "all" => Some(MediaType::All),
            _ => None,
        }
    }
}

/// The two listing variants. Each maps to its own backend collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListKind {
    Available,
    Recent,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Available, ListKind::Recent];

    /// First path segment of the listing endpoint.
    pub fn collection(self) -> &'static str {
        match self {
            ListKind::Available => "jackett_available",
            ListKind::Recent => "jackett_recent",
        }
    }

    /// Only the "available" endpoint honours a `limit` query parameter.
    pub fn accepts_limit(self) -> bool {
        matches!(self, ListKind::Available)
    }

    pub fn label(self) -> &'static str {
        match self {
            ListKind::Available => "Available",
            ListKind::Recent => "Recently added",
        }
    }
}

/// One record returned by the backend.
///
/// The shape is not enforced; the accessors only read the fields the indexer
/// usually emits and fall back gracefully when they are missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaResult(Value);

impl MediaResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn clean_title(&self) -> Option<&str> {
        self.0
            .get("clean_title")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Year as the backend sent it; numbers and strings are both accepted.
    pub fn year(&self) -> Option<String> {
        match self.0.get("year")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Human-readable one-line summary, e.g. `Dune (2021)`.
    pub fn summary(&self) -> String {
        let name = self
            .clean_title()
            .or_else(|| self.title())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| self.0.to_string());
        match self.year() {
            Some(year) => format!("{name} ({year})"),
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_prefers_clean_title_and_appends_year() {
        let result = MediaResult::new(json!({
            "title": "Dune.2021.1080p.WEB-DL",
            "clean_title": "Dune",
            "year": "2021"
        }));
        assert_eq!(result.summary(), "Dune (2021)");
    }

    #[test]
    fn summary_falls_back_to_raw_json_without_title() {
        let result = MediaResult::new(json!(42));
        assert_eq!(result.summary(), "42");
        assert_eq!(result.year(), None);
    }

    #[test]
    fn media_type_parse_accepts_aliases() {
        assert_eq!(MediaType::parse(" Shows "), Some(MediaType::Tv));
        assert_eq!(MediaType::parse("movies"), Some(MediaType::Movie));
        assert_eq!(MediaType::parse("music"), None);
    }
}

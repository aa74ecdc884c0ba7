use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Bytes escaped when a decoded segment is written back into a path.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A navigation target reduced to its canonical form.
///
/// Parsing never fails: the query string and fragment are dropped, repeated
/// and trailing slashes are collapsed, and an empty input becomes `/`.
/// [`RequestPath::segments`] holds the percent-decoded values used for
/// matching and parameters; the canonical string re-encodes them, so every
/// location has exactly one spelling to compare against sidebar paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath {
    canonical: String,
    segments: Vec<String>,
}

impl RequestPath {
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let without_query = without_fragment.split('?').next().unwrap_or_default();

        let raw_segments: Vec<&str> = without_query
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let segments: Vec<String> = raw_segments
            .iter()
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();
        let encoded: Vec<String> = segments
            .iter()
            .map(|segment| utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string())
            .collect();
        let canonical = format!("/{}", encoded.join("/"));

        Self { canonical, segments }
    }

    pub fn root() -> Self {
        Self::parse("/")
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Decoded path segments; empty for the root path.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl From<&str> for RequestPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_slashes_query_and_fragment() {
        assert_eq!(RequestPath::parse("/documents/").as_str(), "/documents");
        assert_eq!(RequestPath::parse("//templates///gallery").as_str(), "/templates/gallery");
        assert_eq!(RequestPath::parse("/contacts?sort=name#top").as_str(), "/contacts");
        assert_eq!(RequestPath::parse("documents").as_str(), "/documents");
    }

    #[test]
    fn empty_input_is_root() {
        for raw in ["", "/", "///", "?tab=1", "#anchor"] {
            let path = RequestPath::parse(raw);
            assert!(path.is_root(), "{raw:?} should be root");
            assert_eq!(path.as_str(), "/");
        }
    }

    #[test]
    fn segments_are_percent_decoded() {
        let path = RequestPath::parse("/editor/Q3%20Bericht");
        assert_eq!(path.as_str(), "/editor/Q3%20Bericht");
        assert_eq!(path.segments(), ["editor", "Q3 Bericht"]);
    }

    #[test]
    fn each_location_has_one_spelling() {
        assert_eq!(RequestPath::parse("/%64ocuments").as_str(), "/documents");
        assert_eq!(RequestPath::parse("/editor/Q3 Bericht"), RequestPath::parse("/editor/Q3%20Bericht"));
        assert_eq!(RequestPath::parse("/editor/a%2Fb").as_str(), "/editor/a%2Fb");
        assert_eq!(RequestPath::parse("/editor/%c3%bc").as_str(), "/editor/%C3%BC");
    }

    #[test]
    fn invalid_utf8_escape_is_replaced_not_rejected() {
        let path = RequestPath::parse("/editor/%FF");
        assert_eq!(path.segments()[1], "\u{FFFD}");
    }
}

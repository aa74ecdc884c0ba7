//! Route patterns: `/`-separated segments where `:name` captures a value.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;

use crate::path::RequestPath;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern '{pattern}' must start with '/'")]
    MissingLeadingSlash { pattern: String },
    #[error("route pattern '{pattern}' contains an empty segment")]
    EmptySegment { pattern: String },
    #[error("route pattern '{pattern}' has a parameter without a name")]
    EmptyParamName { pattern: String },
    #[error("route pattern '{pattern}' declares parameter '{name}' more than once")]
    DuplicateParam { pattern: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// Values captured by parameter segments, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(IndexMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash {
                pattern: pattern.to_string(),
            });
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for raw in rest.split('/') {
                if raw.is_empty() {
                    return Err(PatternError::EmptySegment {
                        pattern: pattern.to_string(),
                    });
                }
                match raw.strip_prefix(':') {
                    Some("") => {
                        return Err(PatternError::EmptyParamName {
                            pattern: pattern.to_string(),
                        });
                    }
                    Some(name) => {
                        if segments.iter().any(|s| matches!(s, Segment::Param(existing) if existing == name)) {
                            return Err(PatternError::DuplicateParam {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            });
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Static(raw.to_string())),
                }
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of literal segments; higher means more specific.
    pub fn static_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Static(_))).count()
    }

    /// Two patterns with the same shape match exactly the same paths.
    pub(crate) fn shape(&self) -> Vec<Option<&str>> {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(literal) => Some(literal.as_str()),
                Segment::Param(_) => None,
            })
            .collect()
    }

    /// Matches the whole path, segment for segment. Static segments compare
    /// case-sensitively against the decoded path segments.
    pub fn matches(&self, path: &RequestPath) -> Option<RouteParams> {
        let path_segments = path.segments();
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = IndexMap::new();
        for (segment, value) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Static(literal) if literal == value => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), value.clone());
                }
            }
        }
        Some(RouteParams(params))
    }
}

impl FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_pattern_has_no_segments() {
        let pattern = RoutePattern::parse("/").expect("root pattern");
        assert!(pattern.segments().is_empty());
        assert!(pattern.matches(&RequestPath::parse("/")).is_some());
        assert!(pattern.matches(&RequestPath::parse("/documents")).is_none());
    }

    #[test]
    fn param_segment_captures_decoded_value() {
        let pattern: RoutePattern = "/editor/:id".parse().expect("editor pattern");
        let params = pattern
            .matches(&RequestPath::parse("/editor/Q3%20Bericht"))
            .expect("editor path matches");
        assert_eq!(params.get("id"), Some("Q3 Bericht"));
        assert!(pattern.matches(&RequestPath::parse("/editor")).is_none());
        assert!(pattern.matches(&RequestPath::parse("/editor/1/2")).is_none());
    }

    #[test]
    fn static_segments_are_case_sensitive() {
        let pattern = RoutePattern::parse("/templates/gallery").expect("pattern");
        assert!(pattern.matches(&RequestPath::parse("/Templates/gallery")).is_none());
        assert_eq!(pattern.static_count(), 2);
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert_eq!(
            RoutePattern::parse("editor"),
            Err(PatternError::MissingLeadingSlash {
                pattern: "editor".into()
            })
        );
        assert_eq!(
            RoutePattern::parse("/editor/"),
            Err(PatternError::EmptySegment {
                pattern: "/editor/".into()
            })
        );
        assert_eq!(
            RoutePattern::parse("/editor/:"),
            Err(PatternError::EmptyParamName {
                pattern: "/editor/:".into()
            })
        );
        assert_eq!(
            RoutePattern::parse("/:id/x/:id"),
            Err(PatternError::DuplicateParam {
                pattern: "/:id/x/:id".into(),
                name: "id".into()
            })
        );
    }
}

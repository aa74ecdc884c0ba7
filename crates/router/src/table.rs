//! Ordered `(pattern, handler)` route table.
//!
//! Resolution scans every route and keeps the most specific match (the one
//! with the most literal segments). Among equally specific matches the route
//! defined first wins. A route with an optional trailing parameter is two
//! entries that share one handler, see [`RouteTableBuilder::optional_param`].

use std::fmt;
use std::sync::Arc;

use docubuilder_types::Page;
use thiserror::Error;

use crate::path::RequestPath;
use crate::pattern::{PatternError, RouteParams, RoutePattern};

/// Builds the page for a matched route from its captured parameters.
pub type RouteHandler = Arc<dyn Fn(&RouteParams) -> Page + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("route pattern '{second}' matches the same paths as '{first}'")]
    Duplicate { first: String, second: String },
}

pub struct RouteDef {
    pattern: RoutePattern,
    handler: RouteHandler,
}

impl RouteDef {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Page this route produces for the given parameters.
    pub fn page(&self, params: &RouteParams) -> Page {
        (self.handler)(params)
    }
}

impl fmt::Debug for RouteDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDef").field("pattern", &self.pattern.as_str()).finish_non_exhaustive()
    }
}

/// A successful resolution.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDef,
    pub params: RouteParams,
}

impl RouteMatch<'_> {
    pub fn page(&self) -> Page {
        self.route.page(&self.params)
    }
}

#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn resolve(&self, path: &RequestPath) -> Option<RouteMatch<'_>> {
        let mut best: Option<RouteMatch<'_>> = None;
        for route in &self.routes {
            let Some(params) = route.pattern.matches(path) else {
                continue;
            };
            let more_specific = best
                .as_ref()
                .is_none_or(|current| route.pattern.static_count() > current.route.pattern.static_count());
            if more_specific {
                best = Some(RouteMatch { route, params });
            }
        }
        best
    }
}

/// Collects route definitions; patterns are validated in [`RouteTableBuilder::build`].
#[derive(Default)]
pub struct RouteTableBuilder {
    pending: Vec<(String, RouteHandler)>,
}

impl RouteTableBuilder {
    pub fn route<F>(self, pattern: &str, handler: F) -> Self
    where
        F: Fn(&RouteParams) -> Page + Send + Sync + 'static,
    {
        self.route_shared(pattern, Arc::new(handler))
    }

    pub fn route_shared(mut self, pattern: &str, handler: RouteHandler) -> Self {
        self.pending.push((pattern.to_string(), handler));
        self
    }

    /// Registers `base` and `base/:param` with the same handler.
    pub fn optional_param<F>(self, base: &str, param: &str, handler: F) -> Self
    where
        F: Fn(&RouteParams) -> Page + Send + Sync + 'static,
    {
        let handler: RouteHandler = Arc::new(handler);
        let with_param = format!("{}/:{param}", base.trim_end_matches('/'));
        self.route_shared(base, Arc::clone(&handler)).route_shared(&with_param, handler)
    }

    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut routes: Vec<RouteDef> = Vec::with_capacity(self.pending.len());
        for (source, handler) in self.pending {
            let pattern = RoutePattern::parse(&source)?;
            if let Some(existing) = routes.iter().find(|route| route.pattern.shape() == pattern.shape()) {
                return Err(RouteTableError::Duplicate {
                    first: existing.pattern.as_str().to_string(),
                    second: source,
                });
            }
            routes.push(RouteDef { pattern, handler });
        }
        Ok(RouteTable { routes })
    }
}

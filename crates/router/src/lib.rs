//! # DocuBuilder router
//!
//! Maps navigation paths to [`Page`](docubuilder_types::Page)s and keeps the
//! back/forward history of the shell.
//!
//! Every path resolves to exactly one page: the most specific route in the
//! table, or the not-found page when nothing matches.
//!
//! ```no_run
//! use docubuilder_router::Router;
//!
//! let router = Router::new()?;
//! let resolution = router.resolve("/editor/42");
//! assert_eq!(resolution.page.heading(), "Dokument 42");
//! # Ok::<(), docubuilder_router::RouteTableError>(())
//! ```

pub mod history;
pub mod path;
pub mod pattern;
mod routes;
pub mod table;

pub use history::NavigationHistory;
pub use path::RequestPath;
pub use pattern::{PatternError, RouteParams, RoutePattern, Segment};
pub use routes::{PLACEHOLDER_ROUTES, Resolution, Router, app_routes};
pub use table::{RouteDef, RouteHandler, RouteMatch, RouteTable, RouteTableBuilder, RouteTableError};

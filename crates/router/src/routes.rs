use docubuilder_types::Page;
use tracing::debug;

use crate::path::RequestPath;
use crate::pattern::RouteParams;
use crate::table::{RouteTable, RouteTableError};

/// Features that exist in the navigation but only render a placeholder page,
/// as `(path, title)`.
pub const PLACEHOLDER_ROUTES: &[(&str, &str)] = &[
    ("/payments", "Zahlungen"),
    ("/catalog", "Katalog"),
    ("/forms", "Formulare"),
    ("/automations", "Automatisierungen"),
    ("/reports", "Berichte"),
    ("/developer", "Entwickler-Center"),
    ("/extensions", "Erweiterungen"),
    ("/discover", "Entdecken"),
    ("/invite", "Benutzer einladen"),
    ("/settings", "Einstellungen"),
];

/// The application's fixed route table.
pub fn app_routes() -> Result<RouteTable, RouteTableError> {
    let mut builder = RouteTable::builder()
        .route("/", |_| Page::Home)
        .route("/documents", |_| Page::Documents)
        .route("/templates", |_| Page::Templates)
        .route("/templates/gallery", |_| Page::Templates)
        .route("/contacts", |_| Page::Contacts)
        .optional_param("/editor", "id", editor_page);

    for &(path, title) in PLACEHOLDER_ROUTES {
        builder = builder.route(path, move |_| Page::placeholder(title));
    }
    builder.build()
}

fn editor_page(params: &RouteParams) -> Page {
    Page::Editor {
        id: params.get("id").map(str::to_string),
    }
}

/// Outcome of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical form of the requested path.
    pub path: RequestPath,
    /// Pattern that matched, `None` when the not-found page was selected.
    pub pattern: Option<String>,
    pub page: Page,
}

/// Maps paths to pages. Paths outside the table select [`Page::NotFound`].
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    pub fn new() -> Result<Self, RouteTableError> {
        Ok(Self { table: app_routes()? })
    }

    pub fn with_table(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn resolve(&self, raw: &str) -> Resolution {
        let path = RequestPath::parse(raw);
        match self.table.resolve(&path) {
            Some(matched) => Resolution {
                pattern: Some(matched.route.pattern().as_str().to_string()),
                page: matched.page(),
                path,
            },
            None => {
                debug!(path = %path, "no route matched; selecting not-found page");
                Resolution {
                    pattern: None,
                    page: Page::NotFound {
                        path: path.as_str().to_string(),
                    },
                    path,
                }
            }
        }
    }
}

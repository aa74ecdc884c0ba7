//! Page components, one per [`Page`] variant.
//!
//! A fresh component is created for every navigation, so page-local state
//! (search text, view mode, editor title) never survives a route change.

mod contacts;
mod documents;
mod editor;
mod home;
mod not_found;
mod placeholder;
mod templates;
pub mod widgets;

pub use contacts::ContactsPage;
pub use documents::DocumentsPage;
pub use editor::EditorPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use placeholder::PlaceholderPage;
pub use templates::TemplatesPage;

use docubuilder_types::Page;

use super::component::Component;

/// The component that renders `page`.
pub(crate) fn page_component(page: &Page) -> Box<dyn Component> {
    match page {
        Page::Home => Box::new(HomePage::default()),
        Page::Documents => Box::new(DocumentsPage::default()),
        Page::Templates => Box::new(TemplatesPage::default()),
        Page::Contacts => Box::new(ContactsPage::default()),
        Page::Editor { id } => Box::new(EditorPage::new(id.as_deref())),
        Page::Placeholder { title } => Box::new(PlaceholderPage::new(title.clone())),
        Page::NotFound { path } => Box::new(NotFoundPage::new(path.clone())),
    }
}

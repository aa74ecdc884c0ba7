//! Shared types for the DocuBuilder shell: the navigation model, the pages a
//! route can select, and the message/effect vocabulary used by the TUI.

pub mod nav;
pub mod page;

pub use nav::{Icon, NavChild, NavEntry, NavModel, NavModelError, NavSection, NavTarget};
pub use page::{PLACEHOLDER_NOTICE, Page, UNTITLED_DOCUMENT, editor_title};

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Flip the sidebar between icon-only and full width
    ToggleSidebar,
    /// Show or hide the activity log panel
    ToggleLogs,
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to a path; the router decides which page it shows
    Navigate(String),
    /// Step back in navigation history
    NavigateBack,
    /// Step forward in navigation history
    NavigateForward,
    /// Leave the application
    Quit,
}

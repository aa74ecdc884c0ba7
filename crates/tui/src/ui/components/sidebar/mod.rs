//! Collapsible navigation sidebar.
//!
//! - `NavState` holds the collapse flag and the open groups.
//! - `sidebar_view` derives the rows to show for the current path.
//! - [`SidebarState`] adds the keyboard cursor, focus, and hit-test areas.
//! - [`SidebarComponent`] draws the view and maps input to effects.

pub mod icons;
mod sidebar_component;
mod state;
mod view;

pub use sidebar_component::SidebarComponent;
pub use state::SidebarState;
#[cfg(test)]
pub use view::{COLLAPSED_WIDTH, EXPANDED_WIDTH};

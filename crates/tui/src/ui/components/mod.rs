//! UI components: sidebar, pages, activity log.

pub mod common;
pub mod component;
pub mod logs;
pub mod pages;
pub mod sidebar;

pub use component::*;
pub use logs::LogsComponent;
pub use sidebar::SidebarComponent;

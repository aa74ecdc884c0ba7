//! UI for the shell: the shared layout, its components, theming, and the
//! runtime that drives them.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;

//! Core, DOM-free primitives and helpers for the Web UI.
pub mod breakpoints;
pub mod chat;
pub mod config;
pub mod fixtures;
pub mod glyph;
pub mod motion;
pub mod nav;
pub mod sidebar;
pub mod style;
pub mod theme;
pub mod transition;
pub mod trend;

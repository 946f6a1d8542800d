//! Dashboard feature slice.
//!
//! # Design
//! - KPI, chart and feed content comes from `core::fixtures`.
//! - Entrance timing comes from `core::motion`; the view only sequences it.

mod activity;
mod chart_card;
mod view;

pub(crate) use view::DashboardPage;

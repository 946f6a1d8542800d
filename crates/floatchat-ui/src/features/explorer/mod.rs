//! Data explorer feature slice.
//!
//! # Design
//! - Rows come from `core::fixtures::explorer_rows`.
//! - The search box narrows rows locally; filter buttons are inert.

mod view;

pub(crate) use view::ExplorerPage;

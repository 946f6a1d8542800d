//! Shared UI atoms used across the shell and views.

pub(crate) mod button;
pub(crate) mod glass_panel;
pub(crate) mod icons;
pub(crate) mod page_header;
pub(crate) mod stat_card;

pub(crate) use button::{ActionButton, ButtonTone, IconButton};
pub(crate) use glass_panel::GlassPanel;
pub(crate) use icons::Icon;
pub(crate) use page_header::PageHeader;
pub(crate) use stat_card::StatCard;

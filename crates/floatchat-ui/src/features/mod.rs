//! Page views, one slice per route.

pub(crate) mod analytics;
pub(crate) mod chat;
pub(crate) mod dashboard;
pub(crate) mod explorer;
pub(crate) mod floats;
pub(crate) mod map;
pub(crate) mod not_found;
pub(crate) mod reports;
pub(crate) mod settings;

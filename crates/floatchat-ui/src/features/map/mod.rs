//! Map feature slice; a placeholder until a map renderer lands.

mod view;

pub(crate) use view::MapPage;

//! Float management feature slice.

mod view;

pub(crate) use view::FloatsPage;

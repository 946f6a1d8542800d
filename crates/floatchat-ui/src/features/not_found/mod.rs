//! Fallback page for paths outside the route table.

mod view;

pub(crate) use view::NotFoundPage;

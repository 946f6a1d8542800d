//! Reports feature slice.

mod view;

pub(crate) use view::ReportsPage;

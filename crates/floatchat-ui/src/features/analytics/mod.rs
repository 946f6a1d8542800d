//! Analytics feature slice.

mod view;

pub(crate) use view::AnalyticsPage;

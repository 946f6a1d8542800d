//! Settings feature slice. Sections are listed but not yet editable.

mod view;

pub(crate) use view::SettingsPage;

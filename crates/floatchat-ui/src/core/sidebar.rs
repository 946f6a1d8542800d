//! Layout shell state: sidebar collapse and the mobile navigation drawer.
//!
//! Owned by a single shell instance through `use_reducer` and handed to
//! children as props. It resets on every mount and is never persisted.

use crate::core::breakpoints::Breakpoint;
use crate::core::nav::NavEntry;
use std::rc::Rc;
use yew::Reducible;

/// Desktop sidebar presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    /// Labels, brand title and profile text visible.
    #[default]
    Expanded,
    /// Icon-only rail.
    Collapsed,
}

impl SidebarState {
    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Whether text (entry labels, brand, profile) renders.
    #[must_use]
    pub const fn shows_labels(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Label to render next to an entry's icon, if any.
    #[must_use]
    pub const fn label_for(self, entry: &NavEntry) -> Option<&'static str> {
        if self.shows_labels() {
            Some(entry.label)
        } else {
            None
        }
    }

    /// Rail width for the state.
    #[must_use]
    pub const fn width_px(self, expanded: u16, collapsed: u16) -> u16 {
        match self {
            Self::Expanded => expanded,
            Self::Collapsed => collapsed,
        }
    }
}

/// Drawer used below the `md` breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileMenu {
    /// Hidden.
    #[default]
    Closed,
    /// Covering the content.
    Open,
}

impl MobileMenu {
    /// Whether the drawer is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Everything the shell tracks across page changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    /// Desktop sidebar.
    pub sidebar: SidebarState,
    /// Mobile drawer.
    pub mobile_menu: MobileMenu,
}

/// User and environment events the shell reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// Collapse or expand the sidebar.
    ToggleSidebar,
    /// Menu button in the top bar.
    OpenMobileMenu,
    /// Close button or backdrop.
    CloseMobileMenu,
    /// Viewport crossed into a new breakpoint.
    Viewport(Breakpoint),
    /// Router displayed a different path.
    RouteChanged,
    /// An entry in the drawer was tapped, even the one already shown.
    NavSelected,
}

impl ShellState {
    /// Apply one action.
    #[must_use]
    pub const fn apply(self, action: ShellAction) -> Self {
        match action {
            ShellAction::ToggleSidebar => Self {
                sidebar: self.sidebar.toggled(),
                ..self
            },
            ShellAction::OpenMobileMenu => Self {
                mobile_menu: MobileMenu::Open,
                ..self
            },
            ShellAction::CloseMobileMenu
            | ShellAction::RouteChanged
            | ShellAction::NavSelected => Self {
                mobile_menu: MobileMenu::Closed,
                ..self
            },
            ShellAction::Viewport(bp) => {
                if bp.is_desktop() {
                    Self {
                        mobile_menu: MobileMenu::Closed,
                        ..self
                    }
                } else {
                    self
                }
            }
        }
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::breakpoints::{LG, SM};
    use crate::core::nav::NAVIGATION;

    #[test]
    fn mounts_expanded_with_drawer_closed() {
        let state = ShellState::default();
        assert_eq!(state.sidebar, SidebarState::Expanded);
        assert!(!state.mobile_menu.is_open());
    }

    #[test]
    fn double_toggle_restores_starting_state() {
        for start in [SidebarState::Expanded, SidebarState::Collapsed] {
            assert_eq!(start.toggled().toggled(), start);
        }
        let state = ShellState::default()
            .apply(ShellAction::ToggleSidebar)
            .apply(ShellAction::ToggleSidebar);
        assert_eq!(state, ShellState::default());
    }

    #[test]
    fn collapse_hides_text_but_keeps_entries() {
        let collapsed = SidebarState::Expanded.toggled();
        assert!(!collapsed.shows_labels());
        assert!(SidebarState::Expanded.shows_labels());
        let rendered: Vec<_> = NAVIGATION
            .iter()
            .map(|entry| (entry.icon, collapsed.label_for(entry)))
            .collect();
        assert_eq!(rendered.len(), NAVIGATION.len());
        assert!(rendered.iter().all(|(_, label)| label.is_none()));
        assert!(
            rendered
                .iter()
                .zip(NAVIGATION.iter())
                .all(|((icon, _), entry)| *icon == entry.icon)
        );
        assert_eq!(
            SidebarState::Expanded.label_for(&NAVIGATION[1]),
            Some("AI Chat")
        );
        assert_eq!(collapsed.width_px(280, 80), 80);
        assert_eq!(SidebarState::Expanded.width_px(280, 80), 280);
    }

    #[test]
    fn drawer_closes_on_navigation_and_desktop_viewport() {
        let open = ShellState::default().apply(ShellAction::OpenMobileMenu);
        assert!(open.mobile_menu.is_open());
        assert!(!open.apply(ShellAction::RouteChanged).mobile_menu.is_open());
        assert!(!open.apply(ShellAction::Viewport(LG)).mobile_menu.is_open());
        assert!(open.apply(ShellAction::Viewport(SM)).mobile_menu.is_open());
        assert!(!open.apply(ShellAction::CloseMobileMenu).mobile_menu.is_open());
    }

    #[test]
    fn tapping_current_entry_still_closes_drawer() {
        let collapsed_and_open = ShellState::default()
            .apply(ShellAction::ToggleSidebar)
            .apply(ShellAction::OpenMobileMenu);
        let after = collapsed_and_open.apply(ShellAction::NavSelected);
        assert!(!after.mobile_menu.is_open());
        assert_eq!(after.sidebar, SidebarState::Collapsed);

        let closed = ShellState::default();
        assert_eq!(closed.apply(ShellAction::NavSelected), closed);
    }

    #[test]
    fn sidebar_state_ignores_drawer_actions() {
        let collapsed = ShellState::default().apply(ShellAction::ToggleSidebar);
        let after = collapsed
            .apply(ShellAction::OpenMobileMenu)
            .apply(ShellAction::RouteChanged);
        assert_eq!(after.sidebar, SidebarState::Collapsed);
    }

    #[test]
    fn reducer_reuses_allocation_when_nothing_changes() {
        let state = Rc::new(ShellState::default());
        let same = Rc::clone(&state).reduce(ShellAction::CloseMobileMenu);
        assert!(Rc::ptr_eq(&state, &same));
        let toggled = state.reduce(ShellAction::ToggleSidebar);
        assert_eq!(toggled.sidebar, SidebarState::Collapsed);
    }
}

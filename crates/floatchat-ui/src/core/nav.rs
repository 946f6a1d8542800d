//! Static navigation table and the active-route resolver.
//!
//! The resolver is a pure function of `(path, entries)`. The root route only
//! matches exactly; every other route also matches its sub-paths, so a parent
//! entry stays highlighted while one of its children is displayed.

use thiserror::Error;

/// Root route; never matches by prefix.
pub const ROOT: &str = "/";

/// Identity of a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavId {
    /// Dashboard home.
    Dashboard,
    /// AI chat.
    Chat,
    /// Ocean map.
    Map,
    /// Data explorer.
    Explorer,
    /// Analytics.
    Analytics,
    /// Float management.
    Floats,
    /// Reports.
    Reports,
    /// Settings.
    Settings,
}

/// Glyph shown for a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    /// Four-tile dashboard glyph.
    LayoutDashboard,
    /// Speech bubble.
    MessageSquare,
    /// Globe.
    Globe2,
    /// Database cylinder.
    Database,
    /// Bar chart.
    BarChart3,
    /// Waves.
    Waves,
    /// Document with lines.
    FileText,
    /// Cog.
    Settings,
}

/// Gradient used behind the active entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientPair {
    /// Starting colour class.
    pub from: &'static str,
    /// Ending colour class.
    pub to: &'static str,
}

impl GradientPair {
    /// `from-* to-*` classes for a Tailwind gradient.
    #[must_use]
    pub fn classes(self) -> String {
        format!("{} {}", self.from, self.to)
    }
}

/// One item of the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Stable identity.
    pub id: NavId,
    /// Visible label.
    pub label: &'static str,
    /// Route path the entry links to.
    pub route: &'static str,
    /// Glyph.
    pub icon: NavIcon,
    /// Active highlight gradient.
    pub gradient: GradientPair,
}

const fn entry(
    id: NavId,
    label: &'static str,
    route: &'static str,
    icon: NavIcon,
    from: &'static str,
    to: &'static str,
) -> NavEntry {
    NavEntry {
        id,
        label,
        route,
        icon,
        gradient: GradientPair { from, to },
    }
}

/// Sidebar entries in display order.
pub const NAVIGATION: [NavEntry; 8] = [
    entry(
        NavId::Dashboard,
        "Dashboard",
        "/",
        NavIcon::LayoutDashboard,
        "from-blue-500",
        "to-cyan-500",
    ),
    entry(
        NavId::Chat,
        "AI Chat",
        "/chat",
        NavIcon::MessageSquare,
        "from-purple-500",
        "to-pink-500",
    ),
    entry(
        NavId::Map,
        "Ocean Map",
        "/map",
        NavIcon::Globe2,
        "from-cyan-500",
        "to-teal-500",
    ),
    entry(
        NavId::Explorer,
        "Data Explorer",
        "/explorer",
        NavIcon::Database,
        "from-indigo-500",
        "to-blue-500",
    ),
    entry(
        NavId::Analytics,
        "Analytics",
        "/analytics",
        NavIcon::BarChart3,
        "from-violet-500",
        "to-purple-500",
    ),
    entry(
        NavId::Floats,
        "Float Management",
        "/floats",
        NavIcon::Waves,
        "from-teal-500",
        "to-emerald-500",
    ),
    entry(
        NavId::Reports,
        "Reports",
        "/reports",
        NavIcon::FileText,
        "from-orange-500",
        "to-red-500",
    ),
    entry(
        NavId::Settings,
        "Settings",
        "/settings",
        NavIcon::Settings,
        "from-gray-500",
        "to-slate-500",
    ),
];

/// Whether an entry routed at `route` is active for the current `path`.
#[must_use]
pub fn is_active(route: &str, path: &str) -> bool {
    if path == route {
        return true;
    }
    if route == ROOT {
        return false;
    }
    path.strip_prefix(route)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// The entry to highlight for `path`, if any.
#[must_use]
pub fn resolve_active<'a>(path: &str, entries: &'a [NavEntry]) -> Option<&'a NavEntry> {
    entries.iter().find(|entry| is_active(entry.route, path))
}

/// Defects in a navigation table that would make highlighting ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavConfigError {
    /// Two entries share a route.
    #[error("duplicate navigation route `{route}`")]
    DuplicateRoute {
        /// Offending route.
        route: &'static str,
    },
    /// One entry's route is an ancestor of another's.
    #[error("navigation route `{child}` is nested under `{parent}`")]
    OverlappingRoute {
        /// Ancestor route.
        parent: &'static str,
        /// Descendant route.
        child: &'static str,
    },
}

/// Check that every route is unique and none is nested under another.
///
/// # Errors
///
/// Returns the first [`NavConfigError`] found in table order.
pub fn validate(entries: &[NavEntry]) -> Result<(), NavConfigError> {
    for (index, first) in entries.iter().enumerate() {
        for second in &entries[index + 1..] {
            if first.route == second.route {
                return Err(NavConfigError::DuplicateRoute {
                    route: first.route,
                });
            }
            if is_active(first.route, second.route) {
                return Err(NavConfigError::OverlappingRoute {
                    parent: first.route,
                    child: second.route,
                });
            }
            if is_active(second.route, first.route) {
                return Err(NavConfigError::OverlappingRoute {
                    parent: second.route,
                    child: first.route,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_ids(path: &str) -> Vec<NavId> {
        NAVIGATION
            .iter()
            .filter(|entry| is_active(entry.route, path))
            .map(|entry| entry.id)
            .collect()
    }

    #[test]
    fn sub_route_keeps_parent_highlighted() {
        assert_eq!(active_ids("/chat/old-session"), vec![NavId::Chat]);
        assert_eq!(
            resolve_active("/chat/old-session", &NAVIGATION).map(|e| e.id),
            Some(NavId::Chat)
        );
    }

    #[test]
    fn root_matches_only_exactly() {
        assert_eq!(active_ids("/"), vec![NavId::Dashboard]);
        assert!(!is_active(ROOT, "/map"));
    }

    #[test]
    fn unknown_path_highlights_nothing() {
        assert!(resolve_active("/unknown", &NAVIGATION).is_none());
        assert!(resolve_active("", &NAVIGATION).is_none());
    }

    #[test]
    fn prefix_must_end_on_segment_boundary() {
        assert!(!is_active("/chat", "/chatter"));
        assert!(is_active("/chat", "/chat/"));
        assert!(is_active("/floats", "/floats/5906970/profiles"));
    }

    #[test]
    fn every_path_resolves_to_at_most_one_entry() {
        for path in ["/", "/chat", "/chat/a", "/map", "/reports/x", "/nope"] {
            assert!(active_ids(path).len() <= 1, "{path}");
        }
    }

    #[test]
    fn shipped_table_is_valid() {
        assert_eq!(validate(&NAVIGATION), Ok(()));
    }

    #[test]
    fn validate_reports_duplicates_and_nesting() {
        let duplicate = [NAVIGATION[1], NAVIGATION[1]];
        assert_eq!(
            validate(&duplicate),
            Err(NavConfigError::DuplicateRoute { route: "/chat" })
        );

        let nested = [
            NAVIGATION[1],
            NavEntry {
                route: "/chat/archive",
                ..NAVIGATION[2]
            },
        ];
        assert_eq!(
            validate(&nested),
            Err(NavConfigError::OverlappingRoute {
                parent: "/chat",
                child: "/chat/archive",
            })
        );
    }

    #[test]
    fn gradient_pair_renders_both_stops() {
        assert_eq!(NAVIGATION[0].gradient.classes(), "from-blue-500 to-cyan-500");
    }
}

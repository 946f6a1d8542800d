//! Closed set of icon glyphs referenced by the views and fixtures.

use crate::core::nav::NavIcon;

/// An icon glyph; the wasm `Icon` component owns the SVG paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Pulse line for live activity.
    Activity,
    /// Outbound link arrow.
    ArrowUpRight,
    /// Vertical bar chart.
    BarChart3,
    /// Float battery level.
    Battery,
    /// Notifications.
    Bell,
    /// Date range picker.
    Calendar,
    /// Dropdown affordance.
    ChevronDown,
    /// Timestamps and recency.
    Clock,
    /// Profile archive.
    Database,
    /// Export action.
    Download,
    /// Salinity.
    Droplets,
    /// Generated report.
    FileText,
    /// Query filters.
    Filter,
    /// Global coverage.
    Globe,
    /// Ocean map.
    Globe2,
    /// Dashboard overview.
    LayoutDashboard,
    /// Map layers.
    Layers,
    /// Security settings.
    Lock,
    /// Regional map.
    Map,
    /// Float position.
    MapPin,
    /// Sidebar and drawer toggle.
    Menu,
    /// Chat conversation.
    MessageSquare,
    /// Appearance settings.
    Palette,
    /// Distribution chart.
    PieChart,
    /// New item.
    Plus,
    /// Reload data.
    RefreshCw,
    /// Search field.
    Search,
    /// Submit a chat message.
    Send,
    /// Settings gear.
    Settings,
    /// AI assistance and active highlight.
    Sparkles,
    /// Temperature.
    Thermometer,
    /// Delete.
    Trash2,
    /// Upward trend.
    TrendingUp,
    /// Profile.
    User,
    /// Brand mark and float fleet.
    Waves,
    /// Close.
    X,
    /// Plan tier badge.
    Zap,
    /// Map zoom in.
    ZoomIn,
    /// Map zoom out.
    ZoomOut,
}

impl From<NavIcon> for Glyph {
    fn from(icon: NavIcon) -> Self {
        match icon {
            NavIcon::LayoutDashboard => Self::LayoutDashboard,
            NavIcon::MessageSquare => Self::MessageSquare,
            NavIcon::Globe2 => Self::Globe2,
            NavIcon::Database => Self::Database,
            NavIcon::BarChart3 => Self::BarChart3,
            NavIcon::Waves => Self::Waves,
            NavIcon::FileText => Self::FileText,
            NavIcon::Settings => Self::Settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::NAVIGATION;
    use std::collections::HashSet;

    #[test]
    fn every_nav_entry_gets_its_own_glyph() {
        let glyphs: HashSet<Glyph> = NAVIGATION
            .iter()
            .map(|entry| Glyph::from(entry.icon))
            .collect();
        assert_eq!(glyphs.len(), NAVIGATION.len());
        assert!(glyphs.contains(&Glyph::MessageSquare));
    }
}

//! Literal placeholder data rendered by the page views.
//!
//! Nothing here is fetched or computed from measurements; the values stand in
//! for what a backend would eventually provide.

use crate::core::glyph::Glyph;
use crate::core::trend::Trend;

/// Headline metric on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    /// Caption.
    pub title: &'static str,
    /// Formatted value.
    pub value: &'static str,
    /// Delta text, if any.
    pub change: Option<&'static str>,
    /// Pre-classified trend of the delta.
    pub trend: Trend,
    /// Icon tile glyph.
    pub glyph: Glyph,
    /// Entrance delay.
    pub delay_ms: u32,
}

/// Dashboard KPI strip.
pub const KPIS: [Kpi; 4] = [
    Kpi {
        title: "Total Profiles",
        value: "847,293",
        change: Some("+12.5% this month"),
        trend: Trend::Positive,
        glyph: Glyph::Database,
        delay_ms: 0,
    },
    Kpi {
        title: "Active Floats",
        value: "1,247",
        change: Some("98.2% operational"),
        trend: Trend::Positive,
        glyph: Glyph::Waves,
        delay_ms: 100,
    },
    Kpi {
        title: "Avg Temperature",
        value: "18.4°C",
        change: Some("+0.3°C vs last year"),
        trend: Trend::Neutral,
        glyph: Glyph::Thermometer,
        delay_ms: 200,
    },
    Kpi {
        title: "Avg Salinity",
        value: "35.1 PSU",
        change: Some("Within normal range"),
        trend: Trend::Neutral,
        glyph: Glyph::Droplets,
        delay_ms: 300,
    },
];

/// Empty chart area with a caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartPlaceholder {
    /// Heading.
    pub title: &'static str,
    /// Secondary caption.
    pub subtitle: &'static str,
    /// Badge glyph.
    pub glyph: Glyph,
    /// Badge gradient classes; `None` for the plain analytics treatment.
    pub gradient: Option<&'static str>,
    /// Entrance delay.
    pub delay_ms: u32,
}

/// Chart cards on the dashboard.
pub const DASHBOARD_CHARTS: [ChartPlaceholder; 2] = [
    ChartPlaceholder {
        title: "Temperature Trends",
        subtitle: "Last 6 months",
        glyph: Glyph::TrendingUp,
        gradient: Some("from-orange-500 to-red-500"),
        delay_ms: 400,
    },
    ChartPlaceholder {
        title: "Salinity Distribution",
        subtitle: "By ocean region",
        glyph: Glyph::BarChart3,
        gradient: Some("from-cyan-500 to-blue-500"),
        delay_ms: 500,
    },
];

/// Cards on the analytics page.
pub const ANALYTICS_PANELS: [ChartPlaceholder; 4] = [
    ChartPlaceholder {
        title: "Trend Analysis",
        subtitle: "Time series patterns",
        glyph: Glyph::TrendingUp,
        gradient: None,
        delay_ms: 0,
    },
    ChartPlaceholder {
        title: "Distribution Analysis",
        subtitle: "Statistical breakdown",
        glyph: Glyph::PieChart,
        gradient: None,
        delay_ms: 0,
    },
    ChartPlaceholder {
        title: "Correlation Study",
        subtitle: "Parameter relationships",
        glyph: Glyph::Activity,
        gradient: None,
        delay_ms: 0,
    },
    ChartPlaceholder {
        title: "Regional Comparison",
        subtitle: "Ocean basin analysis",
        glyph: Glyph::BarChart3,
        gradient: None,
        delay_ms: 0,
    },
];

/// Entry in the dashboard activity feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// WMO float number.
    pub float_id: &'static str,
    /// Ocean basin.
    pub location: &'static str,
    /// Relative timestamp.
    pub time: &'static str,
    /// Surface temperature.
    pub temperature: &'static str,
}

/// Recent measurements feed.
pub const RECENT_MEASUREMENTS: [Measurement; 4] = [
    Measurement {
        float_id: "5906970",
        location: "Pacific Ocean",
        time: "2 minutes ago",
        temperature: "18.4°C",
    },
    Measurement {
        float_id: "5906971",
        location: "Atlantic Ocean",
        time: "5 minutes ago",
        temperature: "19.1°C",
    },
    Measurement {
        float_id: "5906972",
        location: "Indian Ocean",
        time: "12 minutes ago",
        temperature: "22.3°C",
    },
    Measurement {
        float_id: "5906973",
        location: "Southern Ocean",
        time: "18 minutes ago",
        temperature: "15.7°C",
    },
];

/// Prompt chip under the chat hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Chip glyph.
    pub glyph: Glyph,
    /// Prompt text.
    pub text: &'static str,
}

/// Chat suggestions.
pub const CHAT_SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        glyph: Glyph::Globe2,
        text: "Show Pacific Ocean temperature data",
    },
    Suggestion {
        glyph: Glyph::Thermometer,
        text: "Find temperature anomalies in 2024",
    },
    Suggestion {
        glyph: Glyph::TrendingUp,
        text: "Analyze salinity trends last 6 months",
    },
];

/// Previous conversation listed beside the chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatHistoryItem {
    /// Path segment under `/chat/`.
    pub slug: &'static str,
    /// Conversation title.
    pub title: &'static str,
    /// Relative timestamp.
    pub time: &'static str,
}

/// Chat history sidebar.
pub const CHAT_HISTORY: [ChatHistoryItem; 3] = [
    ChatHistoryItem {
        slug: "pacific-ocean-analysis",
        title: "Pacific Ocean Analysis",
        time: "2 hours ago",
    },
    ChatHistoryItem {
        slug: "salinity-trends-2024",
        title: "Salinity Trends 2024",
        time: "Yesterday",
    },
    ChatHistoryItem {
        slug: "float-5906970-data",
        title: "Float #5906970 Data",
        time: "2 days ago",
    },
];

/// Look up a history entry by its slug.
#[must_use]
pub fn chat_history_item(slug: &str) -> Option<&'static ChatHistoryItem> {
    CHAT_HISTORY.iter().find(|item| item.slug == slug)
}

/// Row of the explorer table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRow {
    /// WMO float number.
    pub float_id: String,
    /// Ocean basin.
    pub location: &'static str,
    /// Temperature reading.
    pub temperature: String,
    /// Salinity reading.
    pub salinity: String,
    /// Sample depth.
    pub depth: String,
    /// Profile date.
    pub date: String,
}

/// Number of synthetic explorer rows.
pub const EXPLORER_ROW_COUNT: usize = 10;

/// Synthetic explorer table, one row per index.
#[must_use]
pub fn explorer_rows() -> Vec<ProfileRow> {
    (0..EXPLORER_ROW_COUNT)
        .map(|i| ProfileRow {
            float_id: format!("590697{i}"),
            location: "Pacific Ocean",
            temperature: format!("18.{i}°C"),
            salinity: format!("35.{i} PSU"),
            depth: format!("{}m", 100 + i * 10),
            date: format!("2024-02-{:02}", i + 1),
        })
        .collect()
}

/// Card on the float management page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloatSummary {
    /// WMO float number.
    pub id: String,
    /// Ocean basin.
    pub region: &'static str,
    /// Battery charge.
    pub battery_pct: u8,
    /// Relative timestamp of the last surfacing.
    pub last_update: &'static str,
    /// Reporting normally.
    pub active: bool,
}

/// Number of float cards.
pub const FLOAT_COUNT: usize = 9;

/// Synthetic float fleet.
#[must_use]
pub fn floats() -> Vec<FloatSummary> {
    (0..FLOAT_COUNT)
        .map(|i| FloatSummary {
            id: format!("590697{i}"),
            region: "Pacific Ocean",
            battery_pct: 87,
            last_update: "2 hours ago",
            active: true,
        })
        .collect()
}

/// Report template tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportTemplate {
    /// Template name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Report templates.
pub const REPORT_TEMPLATES: [ReportTemplate; 6] = [
    ReportTemplate {
        name: "Monthly Summary",
        description: "Comprehensive monthly overview",
    },
    ReportTemplate {
        name: "Regional Analysis",
        description: "Ocean basin comparison",
    },
    ReportTemplate {
        name: "Float Performance",
        description: "Individual float metrics",
    },
    ReportTemplate {
        name: "Data Quality Report",
        description: "QC flags and validation",
    },
    ReportTemplate {
        name: "Temperature Trends",
        description: "Long-term temperature analysis",
    },
    ReportTemplate {
        name: "Custom Report",
        description: "Build your own template",
    },
];

/// Row on the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsSection {
    /// Leading glyph.
    pub glyph: Glyph,
    /// Section name.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// Settings sections.
pub const SETTINGS_SECTIONS: [SettingsSection; 6] = [
    SettingsSection {
        glyph: Glyph::User,
        title: "Profile",
        description: "Update your personal information",
    },
    SettingsSection {
        glyph: Glyph::Bell,
        title: "Notifications",
        description: "Configure email and push notifications",
    },
    SettingsSection {
        glyph: Glyph::Palette,
        title: "Appearance",
        description: "Theme and display preferences",
    },
    SettingsSection {
        glyph: Glyph::Globe,
        title: "Language & Region",
        description: "Set your language and units",
    },
    SettingsSection {
        glyph: Glyph::Database,
        title: "Data Sources",
        description: "Configure GDAC endpoints",
    },
    SettingsSection {
        glyph: Glyph::Lock,
        title: "Privacy & Security",
        description: "Manage your data and security settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn explorer_rows_follow_index_pattern() {
        let rows = explorer_rows();
        assert_eq!(rows.len(), EXPLORER_ROW_COUNT);
        assert_eq!(rows[0].float_id, "5906970");
        assert_eq!(rows[3].temperature, "18.3°C");
        assert_eq!(rows[3].salinity, "35.3 PSU");
        assert_eq!(rows[3].depth, "130m");
        assert_eq!(rows[9].date, "2024-02-10");
    }

    #[test]
    fn float_ids_are_unique() {
        let fleet = floats();
        assert_eq!(fleet.len(), FLOAT_COUNT);
        let ids: HashSet<&str> = fleet.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), FLOAT_COUNT);

        let rows = explorer_rows();
        let row_ids: HashSet<&str> = rows.iter().map(|row| row.float_id.as_str()).collect();
        assert_eq!(row_ids.len(), EXPLORER_ROW_COUNT);
    }

    #[test]
    fn history_slugs_resolve() {
        for item in &CHAT_HISTORY {
            assert_eq!(chat_history_item(item.slug), Some(item));
        }
        assert!(chat_history_item("missing").is_none());
    }

    #[test]
    fn kpi_delays_increase_in_display_order() {
        assert!(KPIS.windows(2).all(|pair| pair[0].delay_ms < pair[1].delay_ms));
    }
}

//! Trend classification for metric deltas.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction of a metric's change, supplied pre-classified by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Improvement or growth.
    Positive,
    /// Decline or degradation.
    Negative,
    /// No meaningful movement.
    #[default]
    Neutral,
}

/// Raised when a trend label is not one of `positive`, `negative`, `neutral`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trend classification `{0}`")]
pub struct ParseTrendError(
    /// The rejected label.
    pub String,
);

impl Trend {
    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Gradient used for the icon tile of a stat card.
    #[must_use]
    pub const fn icon_gradient(self) -> &'static str {
        match self {
            Self::Positive => "from-emerald-500 to-teal-500",
            Self::Negative => "from-red-500 to-orange-500",
            Self::Neutral => "from-blue-500 to-cyan-500",
        }
    }

    /// Badge colours for the delta text.
    #[must_use]
    pub const fn badge_classes(self) -> &'static str {
        match self {
            Self::Positive => "bg-emerald-500/20 text-emerald-400",
            Self::Negative => "bg-red-500/20 text-red-400",
            Self::Neutral => "bg-blue-500/20 text-blue-400",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trend {
    type Err = ParseTrendError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => Err(ParseTrendError(value.to_string())),
        }
    }
}

/// A delta badge ready to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeltaBadge<'a> {
    /// Text shown inside the badge.
    pub text: &'a str,
    /// Colour treatment for the badge.
    pub classes: &'static str,
}

/// The delta badge for a change text, or `None` when there is no text to show.
#[must_use]
pub fn delta_badge(change: Option<&str>, trend: Trend) -> Option<DeltaBadge<'_>> {
    change
        .filter(|text| !text.trim().is_empty())
        .map(|text| DeltaBadge {
            text,
            classes: trend.badge_classes(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_and_negative_use_their_own_treatment() {
        let up = delta_badge(Some("+12.5%"), Trend::Positive).map(|b| b.classes);
        let down = delta_badge(Some("-3%"), Trend::Negative).map(|b| b.classes);
        assert_eq!(up, Some("bg-emerald-500/20 text-emerald-400"));
        assert_eq!(down, Some("bg-red-500/20 text-red-400"));
    }

    #[test]
    fn neutral_change_uses_blue_treatment() {
        let badge = delta_badge(Some("Within normal range"), Trend::Neutral);
        assert_eq!(
            badge,
            Some(DeltaBadge {
                text: "Within normal range",
                classes: "bg-blue-500/20 text-blue-400",
            })
        );
    }

    #[test]
    fn missing_or_blank_change_renders_no_badge() {
        assert_eq!(delta_badge(None, Trend::Positive), None);
        assert_eq!(delta_badge(None, Trend::Neutral), None);
        assert_eq!(delta_badge(Some("   "), Trend::Negative), None);
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("Positive".parse::<Trend>(), Ok(Trend::Positive));
        assert_eq!(" neutral ".parse::<Trend>(), Ok(Trend::Neutral));
        assert_eq!(
            "sideways".parse::<Trend>(),
            Err(ParseTrendError("sideways".to_string()))
        );
    }

    #[test]
    fn icon_gradient_follows_trend() {
        assert_eq!(Trend::default(), Trend::Neutral);
        assert_eq!(Trend::Neutral.icon_gradient(), "from-blue-500 to-cyan-500");
        assert_eq!(Trend::Negative.to_string(), "negative");
    }
}

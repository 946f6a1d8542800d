//! Glass panel container treatments, composed as [`yew::Classes`].

use yew::{Classes, classes};

/// Visual treatment for a glass panel container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVariant {
    /// Opaque, blurred glass with a drop shadow.
    #[default]
    Base,
    /// Barely-there outline for nested grouping.
    Subtle,
}

impl PanelVariant {
    /// Classes specific to the variant.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Base => {
                "border border-white/[0.08] bg-black/40 backdrop-blur-xl shadow-[0_4px_24px_-1px_rgba(0,0,0,0.2)]"
            }
            Self::Subtle => "border border-white/[0.04] bg-white/[0.02]",
        }
    }
}

const PANEL_BASE: &str = "rounded-xl transition-all duration-300";
const PANEL_HOVER: &str =
    "hover:bg-white/[0.04] hover:border-white/[0.12] hover:shadow-[0_8px_32px_-4px_rgba(0,0,0,0.3)] cursor-pointer group";

/// Full class list for a panel; caller classes come last so they can override.
#[must_use]
pub fn panel_classes(variant: PanelVariant, hover_effect: bool, extra: &Classes) -> Classes {
    let mut classes = classes!(PANEL_BASE, variant.classes(), hover_effect.then_some(PANEL_HOVER));
    if !extra.is_empty() {
        classes.push(extra.clone());
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_variants_apply_distinct_treatments() {
        let base = panel_classes(PanelVariant::Base, false, &Classes::new());
        let subtle = panel_classes(PanelVariant::Subtle, false, &Classes::new());
        assert!(base.contains("backdrop-blur-xl"));
        assert!(!subtle.contains("backdrop-blur-xl"));
        assert!(subtle.contains("bg-white/[0.02]"));
    }

    #[test]
    fn hover_effect_and_extra_classes_are_appended() {
        let classes = panel_classes(PanelVariant::Subtle, true, &classes!("p-6"));
        assert!(classes.contains("cursor-pointer"));
        assert!(classes.to_string().ends_with("p-6"));
        let plain = panel_classes(PanelVariant::Base, false, &Classes::new());
        assert!(!plain.contains("cursor-pointer"));
    }

    #[test]
    fn blank_extra_adds_nothing() {
        let plain = panel_classes(PanelVariant::Base, false, &Classes::new());
        let blank = panel_classes(PanelVariant::Base, false, &Classes::from(""));
        assert_eq!(plain, blank);
        assert!(!plain.to_string().contains("  "));
    }
}

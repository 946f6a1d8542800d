//! Responsive breakpoints aligned with the Tailwind screens used by the markup.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Tailwind screen prefix.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound, `None` for the widest screen.
    pub max_width: Option<u16>,
}

/// Below every named screen.
pub const BASE: Breakpoint = Breakpoint {
    name: "base",
    min_width: 0,
    max_width: Some(639),
};
/// `sm:` screen.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 640,
    max_width: Some(767),
};
/// `md:` screen; the sidebar replaces the mobile drawer from here up.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(1023),
};
/// `lg:` screen.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: Some(1279),
};
/// `xl:` screen.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1280,
    max_width: Some(1535),
};
/// `2xl:` screen.
pub const XXL: Breakpoint = Breakpoint {
    name: "2xl",
    min_width: 1536,
    max_width: None,
};

/// Ordered breakpoints used for layout decisions.
pub const BREAKPOINTS: [Breakpoint; 6] = [BASE, SM, MD, LG, XL, XXL];

impl Breakpoint {
    /// Whether the persistent sidebar is shown at this width.
    #[must_use]
    pub const fn is_desktop(self) -> bool {
        self.min_width >= MD.min_width
    }
}

/// Find the first breakpoint matching the supplied width.
#[must_use]
pub fn for_width(width: u16) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(XXL)
}

/// Same as [`for_width`] for a fractional viewport width as reported by the DOM.
#[must_use]
pub fn for_viewport(width: f64) -> Breakpoint {
    if !width.is_finite() || width <= 0.0 {
        return BASE;
    }
    let clamped = width.min(f64::from(u16::MAX));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let px = clamped as u16;
    for_width(px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(for_width(0).name, BASE.name);
        assert_eq!(for_width(640).name, SM.name);
        assert_eq!(for_width(767).name, SM.name);
        assert_eq!(for_width(768).name, MD.name);
        assert_eq!(for_width(4000).name, XXL.name);
    }

    #[test]
    fn desktop_starts_at_md() {
        assert!(!SM.is_desktop());
        assert!(MD.is_desktop());
        assert!(XXL.is_desktop());
    }

    #[test]
    fn viewport_width_handles_odd_values() {
        assert_eq!(for_viewport(f64::NAN), BASE);
        assert_eq!(for_viewport(-3.0), BASE);
        assert_eq!(for_viewport(1024.7), LG);
        assert_eq!(for_viewport(1.0e9), XXL);
    }
}

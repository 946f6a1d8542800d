//! Declarative animation timelines expressed as plain configuration data.
//!
//! A [`Motion`] never runs anything itself: it renders to an inline CSS
//! `animation` declaration whose keyframes live in `static/floatchat.css`.
//! Every atom owns its own timeline, so there is no coordination between them.

/// Named keyframe set (see the stylesheet for the transforms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPreset {
    /// Opacity only.
    Fade,
    /// Rise from 20px below while fading in.
    FadeUp,
    /// Drop from 20px above while fading in.
    FadeDown,
    /// Rise 20px while fading out (page exit).
    FadeOutUp,
    /// Slide in from 20px to the left.
    SlideRight,
    /// Grow from 95% while rising and fading in.
    ScaleIn,
    /// Pop from 50% scale.
    PopIn,
    /// Continuous rotation.
    Spin,
}

impl MotionPreset {
    /// Keyframes name in the stylesheet.
    #[must_use]
    pub const fn keyframes(self) -> &'static str {
        match self {
            Self::Fade => "fc-fade",
            Self::FadeUp => "fc-fade-up",
            Self::FadeDown => "fc-fade-down",
            Self::FadeOutUp => "fc-fade-out-up",
            Self::SlideRight => "fc-slide-right",
            Self::ScaleIn => "fc-scale-in",
            Self::PopIn => "fc-pop-in",
            Self::Spin => "fc-spin",
        }
    }
}

/// Timing curve for a motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, gentle landing.
    EaseOut,
    /// Slight overshoot approximating a bouncy spring.
    Spring,
}

impl Easing {
    /// CSS timing function.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// One animation timeline applied on mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    /// Keyframe set.
    pub preset: MotionPreset,
    /// Duration of one iteration.
    pub duration_ms: u32,
    /// Delay before the first frame.
    pub delay_ms: u32,
    /// Timing curve.
    pub easing: Easing,
    /// Loop forever instead of holding the last frame.
    pub repeat: bool,
}

impl Motion {
    /// A 400ms ease-out timeline with no delay.
    #[must_use]
    pub const fn new(preset: MotionPreset) -> Self {
        Self {
            preset,
            duration_ms: 400,
            delay_ms: 0,
            easing: Easing::EaseOut,
            repeat: false,
        }
    }

    /// Override the duration.
    #[must_use]
    pub const fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Override the delay.
    #[must_use]
    pub const fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Override the timing curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Loop the timeline.
    #[must_use]
    pub const fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Delay the `index`-th item of a list by `step_ms` per preceding item.
    #[must_use]
    pub fn staggered(self, step_ms: u32, index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay(
            self.delay_ms
                .saturating_add(step_ms.saturating_mul(index)),
        )
    }

    /// Inline style declaration for the element.
    #[must_use]
    pub fn style(&self) -> String {
        let iterations = if self.repeat { "infinite" } else { "1" };
        format!(
            "animation: {} {}ms {} {}ms {} both;",
            self.preset.keyframes(),
            self.duration_ms,
            self.easing.css(),
            self.delay_ms,
            iterations,
        )
    }
}

/// Stat card entrance.
pub const CARD_ENTER: Motion = Motion::new(MotionPreset::ScaleIn)
    .duration(500)
    .easing(Easing::Spring);
/// Stat card value pop, offset from the card's own delay.
pub const VALUE_POP: Motion = Motion::new(MotionPreset::PopIn).easing(Easing::Spring);
/// Extra delay between a card and its value pop.
pub const VALUE_POP_OFFSET_MS: u32 = 200;
/// Page content entrance.
pub const PAGE_ENTER: Motion = Motion::new(MotionPreset::FadeUp).duration(300);
/// Page content exit; the next page mounts once this has finished.
pub const PAGE_EXIT: Motion = Motion::new(MotionPreset::FadeOutUp).duration(300);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_renders_full_animation_shorthand() {
        let motion = Motion::new(MotionPreset::FadeUp).delay(100);
        assert_eq!(
            motion.style(),
            "animation: fc-fade-up 400ms cubic-bezier(0.16, 1, 0.3, 1) 100ms 1 both;"
        );
    }

    #[test]
    fn staggered_adds_step_per_index() {
        let base = Motion::new(MotionPreset::SlideRight).delay(700);
        assert_eq!(base.staggered(50, 0).delay_ms, 700);
        assert_eq!(base.staggered(50, 3).delay_ms, 850);
    }

    #[test]
    fn repeating_spin_loops_forever() {
        let spin = Motion::new(MotionPreset::Spin)
            .duration(20_000)
            .easing(Easing::Linear)
            .repeating();
        assert!(spin.style().contains("infinite"));
        assert!(spin.style().starts_with("animation: fc-spin 20000ms linear"));
    }

    #[test]
    fn every_preset_has_keyframes_in_the_stylesheet() {
        let stylesheet = include_str!("../../static/floatchat.css");
        for preset in [
            MotionPreset::Fade,
            MotionPreset::FadeUp,
            MotionPreset::FadeDown,
            MotionPreset::FadeOutUp,
            MotionPreset::SlideRight,
            MotionPreset::ScaleIn,
            MotionPreset::PopIn,
            MotionPreset::Spin,
        ] {
            let rule = format!("@keyframes {} {{", preset.keyframes());
            assert!(stylesheet.contains(&rule), "missing {rule}");
        }
    }

    #[test]
    fn page_exit_and_enter_share_duration() {
        assert_eq!(PAGE_ENTER.duration_ms, PAGE_EXIT.duration_ms);
        assert_eq!(CARD_ENTER.easing, Easing::Spring);
    }
}

//! Keyed enter/exit sequencing for page content.
//!
//! The key is the route path. Re-navigating to the key that is already
//! displayed (or already queued) is a no-op; any other key retires the current
//! content first and only then enters the new one, so exactly one page is
//! displayed at any time.

use crate::core::motion::{Motion, PAGE_ENTER, PAGE_EXIT};
use std::rc::Rc;
use yew::Reducible;

/// Where the displayed page is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Enter animation running.
    Entering,
    /// Idle.
    Settled,
    /// Exit animation running; `next` mounts when it finishes.
    Exiting {
        /// Key queued to replace the displayed one.
        next: String,
    },
}

/// [`Phase`] without its payload, for keying timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    /// See [`Phase::Entering`].
    Entering,
    /// See [`Phase::Settled`].
    Settled,
    /// See [`Phase::Exiting`].
    Exiting,
}

impl Phase {
    /// Payload-free kind of the phase.
    #[must_use]
    pub const fn kind(&self) -> PhaseKind {
        match self {
            Self::Entering => PhaseKind::Entering,
            Self::Settled => PhaseKind::Settled,
            Self::Exiting { .. } => PhaseKind::Exiting,
        }
    }
}

/// What a transition call asked the host to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Nothing changed.
    None,
    /// Start the exit animation of the displayed page.
    Exit,
    /// An exit is already running; only its destination changed.
    Retarget,
    /// The queued page is now displayed and entering.
    Enter,
    /// The enter animation finished.
    Settle,
}

/// Transition state machine for the content area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTransition {
    displayed: String,
    phase: Phase,
    enters: u32,
    exits: u32,
}

impl PageTransition {
    /// Mount with `key` displayed and entering.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            displayed: key.into(),
            phase: Phase::Entering,
            enters: 1,
            exits: 0,
        }
    }

    /// Key of the page currently on screen.
    #[must_use]
    pub const fn displayed(&self) -> &str {
        self.displayed.as_str()
    }

    /// Key the machine is heading to.
    #[must_use]
    pub const fn target(&self) -> &str {
        match &self.phase {
            Phase::Exiting { next } => next.as_str(),
            Phase::Entering | Phase::Settled => self.displayed.as_str(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Enter animations started so far, including the initial mount.
    #[must_use]
    pub const fn enters(&self) -> u32 {
        self.enters
    }

    /// Exit animations started so far.
    #[must_use]
    pub const fn exits(&self) -> u32 {
        self.exits
    }

    /// Timeline for the displayed page in the current phase.
    #[must_use]
    pub const fn motion(&self) -> Motion {
        match self.phase {
            Phase::Exiting { .. } => PAGE_EXIT,
            Phase::Entering | Phase::Settled => PAGE_ENTER,
        }
    }

    /// The router now shows `key`.
    pub fn navigate(&mut self, key: &str) -> TransitionEffect {
        if key == self.target() {
            return TransitionEffect::None;
        }
        if let Phase::Exiting { next } = &mut self.phase {
            key.clone_into(next);
            return TransitionEffect::Retarget;
        }
        self.phase = Phase::Exiting {
            next: key.to_string(),
        };
        self.exits += 1;
        TransitionEffect::Exit
    }

    /// The exit animation completed.
    pub fn exit_finished(&mut self) -> TransitionEffect {
        let Phase::Exiting { next } = &mut self.phase else {
            return TransitionEffect::None;
        };
        self.displayed = std::mem::take(next);
        self.phase = Phase::Entering;
        self.enters += 1;
        TransitionEffect::Enter
    }

    /// The enter animation completed.
    pub fn enter_finished(&mut self) -> TransitionEffect {
        if self.phase == Phase::Entering {
            self.phase = Phase::Settled;
            TransitionEffect::Settle
        } else {
            TransitionEffect::None
        }
    }
}

/// Reducer actions mirroring the [`PageTransition`] methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionAction {
    /// See [`PageTransition::navigate`].
    Navigate(String),
    /// See [`PageTransition::exit_finished`].
    ExitFinished,
    /// See [`PageTransition::enter_finished`].
    EnterFinished,
}

impl Reducible for PageTransition {
    type Action = TransitionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let effect = match action {
            TransitionAction::Navigate(key) => next.navigate(&key),
            TransitionAction::ExitFinished => next.exit_finished(),
            TransitionAction::EnterFinished => next.enter_finished(),
        };
        if effect == TransitionEffect::None {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(key: &str) -> PageTransition {
        let mut transition = PageTransition::new(key);
        transition.enter_finished();
        transition
    }

    #[test]
    fn same_path_does_not_retrigger() {
        let mut transition = settled("/chat");
        let (enters, exits) = (transition.enters(), transition.exits());
        assert_eq!(transition.navigate("/chat"), TransitionEffect::None);
        assert_eq!(transition.enters(), enters);
        assert_eq!(transition.exits(), exits);
        assert_eq!(transition.phase(), &Phase::Settled);
    }

    #[test]
    fn different_path_exits_once_then_enters_once() {
        let mut transition = settled("/chat");
        let (enters, exits) = (transition.enters(), transition.exits());

        assert_eq!(transition.navigate("/map"), TransitionEffect::Exit);
        assert_eq!(transition.displayed(), "/chat");
        assert_eq!(transition.motion(), PAGE_EXIT);

        assert_eq!(transition.exit_finished(), TransitionEffect::Enter);
        assert_eq!(transition.displayed(), "/map");
        assert_eq!(transition.motion(), PAGE_ENTER);
        assert_eq!(transition.enter_finished(), TransitionEffect::Settle);

        assert_eq!(transition.exits(), exits + 1);
        assert_eq!(transition.enters(), enters + 1);
    }

    #[test]
    fn navigating_during_exit_retargets_without_second_exit() {
        let mut transition = settled("/");
        transition.navigate("/map");
        assert_eq!(transition.navigate("/reports"), TransitionEffect::Retarget);
        assert_eq!(transition.navigate("/reports"), TransitionEffect::None);
        assert_eq!(transition.exits(), 1);
        assert_eq!(transition.phase().kind(), PhaseKind::Exiting);
        transition.exit_finished();
        assert_eq!(transition.displayed(), "/reports");
    }

    #[test]
    fn navigating_while_entering_starts_exit() {
        let mut transition = PageTransition::new("/");
        assert_eq!(transition.navigate("/floats"), TransitionEffect::Exit);
        assert_eq!(transition.target(), "/floats");
    }

    #[test]
    fn stray_timer_callbacks_are_ignored() {
        let mut transition = settled("/");
        assert_eq!(transition.exit_finished(), TransitionEffect::None);
        assert_eq!(transition.enter_finished(), TransitionEffect::None);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_happens() {
        let state = Rc::new(settled("/chat"));
        let same = Rc::clone(&state).reduce(TransitionAction::Navigate("/chat".into()));
        assert!(Rc::ptr_eq(&state, &same));
        let moved = state.reduce(TransitionAction::Navigate("/map".into()));
        assert_eq!(moved.target(), "/map");
    }
}

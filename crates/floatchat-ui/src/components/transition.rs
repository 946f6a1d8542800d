//! Content area that retires the previous page before entering the next one.

use crate::core::motion::{PAGE_ENTER, PAGE_EXIT};
use crate::core::transition::{PageTransition, PhaseKind, TransitionAction};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageTransitionHostProps {
    /// Path the router currently shows; also the transition key.
    pub path: AttrValue,
    /// Renders the page for a path.
    pub render: Callback<String, Html>,
}

#[function_component(PageTransitionHost)]
pub(crate) fn page_transition_host(props: &PageTransitionHostProps) -> Html {
    let transition = {
        let path = props.path.to_string();
        use_reducer(move || PageTransition::new(path))
    };

    {
        let dispatcher = transition.dispatcher();
        use_effect_with_deps(
            move |path: &AttrValue| {
                dispatcher.dispatch(TransitionAction::Navigate(path.to_string()));
                || ()
            },
            props.path.clone(),
        );
    }

    {
        let dispatcher = transition.dispatcher();
        let key = (
            transition.displayed().to_string(),
            transition.phase().kind(),
        );
        use_effect_with_deps(
            move |(_, phase): &(String, PhaseKind)| {
                let timer = match phase {
                    PhaseKind::Exiting => Some(Timeout::new(PAGE_EXIT.duration_ms, move || {
                        dispatcher.dispatch(TransitionAction::ExitFinished);
                    })),
                    PhaseKind::Entering => Some(Timeout::new(PAGE_ENTER.duration_ms, move || {
                        dispatcher.dispatch(TransitionAction::EnterFinished);
                    })),
                    PhaseKind::Settled => None,
                };
                move || drop(timer)
            },
            key,
        );
    }

    let displayed = transition.displayed().to_string();
    let exiting = transition.phase().kind() == PhaseKind::Exiting;
    html! {
        <div
            key={displayed.clone()}
            class={classes!("h-full", exiting.then_some("pointer-events-none"))}
            style={transition.motion().style()}
        >
            {props.render.emit(displayed)}
        </div>
    }
}

use crate::components::atoms::icons::Icon;
use crate::core::glyph::Glyph;
use yew::prelude::*;

/// Visual weight of an [`ActionButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ButtonTone {
    /// Indigo-to-cyan gradient call to action.
    Primary,
    /// Outlined glass button.
    #[default]
    Ghost,
}

impl ButtonTone {
    const fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-gradient-to-r from-indigo-500 to-cyan-500 text-white font-medium hover:shadow-lg hover:shadow-indigo-500/25 transition-all"
            }
            Self::Ghost => {
                "border border-white/[0.08] bg-white/[0.02] hover:bg-white/[0.06] transition-colors font-medium text-zinc-300"
            }
        }
    }
}

const BUTTON_BASE: &str = "flex items-center gap-2 px-4 py-2 rounded-xl text-sm";

#[derive(Properties, PartialEq)]
pub(crate) struct ActionButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub glyph: Option<Glyph>,
    /// Glyph rendered after the label (dropdown chevrons).
    #[prop_or_default]
    pub trailing: Option<Glyph>,
    #[prop_or_default]
    pub tone: ButtonTone,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Labelled button with an optional leading glyph.
#[function_component(ActionButton)]
pub(crate) fn action_button(props: &ActionButtonProps) -> Html {
    let classes = classes!(
        BUTTON_BASE,
        props.tone.classes(),
        props.class.clone(),
    );
    html! {
        <button
            type="button"
            class={classes}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            {props.glyph.map(|glyph| html! { <Icon {glyph} size={16} /> }).unwrap_or_default()}
            {props.label.clone()}
            {props.trailing.map(|glyph| html! { <Icon {glyph} size={14} /> }).unwrap_or_default()}
        </button>
    }
}

/// Props for icon-only buttons.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    pub glyph: Glyph,
    #[prop_or(20)]
    pub size: u16,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub icon_class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Extra decoration layered over the glyph (status dots).
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
            onclick={props.onclick.clone()}
        >
            <Icon glyph={props.glyph} size={props.size} class={props.icon_class.clone()} />
            {for props.children.iter()}
        </button>
    }
}

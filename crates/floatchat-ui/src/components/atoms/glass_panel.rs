use crate::core::style::{PanelVariant, panel_classes};
use yew::prelude::*;

/// Props for the glass panel container.
#[derive(Properties, PartialEq)]
pub(crate) struct GlassPanelProps {
    #[prop_or_default]
    pub variant: PanelVariant,
    /// Brighten the border and background on hover.
    #[prop_or_default]
    pub hover_effect: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GlassPanel)]
pub(crate) fn glass_panel(props: &GlassPanelProps) -> Html {
    let classes = panel_classes(props.variant, props.hover_effect, &props.class);
    html! {
        <div class={classes}>
            {for props.children.iter()}
        </div>
    }
}

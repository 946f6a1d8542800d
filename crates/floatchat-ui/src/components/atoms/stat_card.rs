use crate::components::atoms::icons::Icon;
use crate::core::glyph::Glyph;
use crate::core::motion::{CARD_ENTER, VALUE_POP, VALUE_POP_OFFSET_MS};
use crate::core::trend::{Trend, delta_badge};
use yew::prelude::*;

const ICON_TILE: &str = "p-3 rounded-2xl bg-gradient-to-br shadow-lg hover-spin";
const BADGE: &str = "text-sm font-bold px-3 py-1.5 rounded-full";

/// Props for a headline metric.
#[derive(Properties, PartialEq)]
pub(crate) struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    /// Delta text; no badge renders without it.
    #[prop_or_default]
    pub change: Option<AttrValue>,
    #[prop_or_default]
    pub trend: Trend,
    #[prop_or_default]
    pub glyph: Option<Glyph>,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(StatCard)]
pub(crate) fn stat_card(props: &StatCardProps) -> Html {
    let card_motion = CARD_ENTER.delay(props.delay_ms);
    let value_motion = VALUE_POP.delay(props.delay_ms.saturating_add(VALUE_POP_OFFSET_MS));
    let badge = delta_badge(props.change.as_deref(), props.trend);
    let icon_tile = props.glyph.map(|glyph| {
        let classes = classes!(
            ICON_TILE,
            props.trend.icon_gradient(),
        );
        html! {
            <div class={classes}>
                <Icon {glyph} size={22} stroke_width="2.5" class="text-white" />
            </div>
        }
    });

    html! {
        <div class="group relative hover-lift" style={card_motion.style()}>
            <div class="absolute -inset-0.5 bg-gradient-to-r from-primary to-secondary rounded-3xl blur-lg opacity-30 group-hover:opacity-60 transition-opacity" />
            <div class="relative h-full glass-panel rounded-3xl p-8 transition-all duration-300 hover:shadow-2xl">
                <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-secondary/10 rounded-3xl opacity-0 group-hover:opacity-100 transition-opacity" />
                <div class="relative z-10 flex flex-col h-full">
                    <div class="flex items-start justify-between mb-6">
                        <p class="text-sm font-bold text-muted-foreground tracking-wider uppercase">{props.title.clone()}</p>
                        {icon_tile.unwrap_or_default()}
                    </div>
                    <div class="mt-auto">
                        <p class="text-4xl md:text-5xl font-bold text-gradient mb-3" style={value_motion.style()}>
                            {props.value.clone()}
                        </p>
                        {badge.map(|badge| html! {
                            <div class="flex items-center gap-2">
                                <span class={classes!(BADGE, badge.classes)}>
                                    {badge.text.to_string()}
                                </span>
                            </div>
                        }).unwrap_or_default()}
                    </div>
                </div>
            </div>
        </div>
    }
}

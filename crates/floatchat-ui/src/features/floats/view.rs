use crate::components::atoms::{GlassPanel, Icon, PageHeader};
use crate::core::fixtures::{FloatSummary, floats};
use crate::core::glyph::Glyph;
use yew::prelude::*;

#[function_component(FloatsPage)]
pub(crate) fn floats_page() -> Html {
    let fleet = use_memo(|_| floats(), ());
    html! {
        <div class="p-6 md:p-8 space-y-6">
            <PageHeader title="Float Management" subtitle="Track and monitor individual Argo floats" />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {for fleet.iter().map(|float| html! {
                    <FloatCard key={float.id.clone()} float={float.clone()} />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FloatCardProps {
    float: FloatSummary,
}

#[function_component(FloatCard)]
fn float_card(props: &FloatCardProps) -> Html {
    let float = &props.float;
    let (status, dot) = if float.active {
        ("Active", "bg-emerald-400")
    } else {
        ("Inactive", "bg-zinc-500")
    };
    html! {
        <GlassPanel hover_effect={true} class="rounded-2xl p-5 hover:scale-[1.02]">
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-3">
                    <div class="p-2.5 rounded-lg bg-indigo-500/10 text-indigo-400">
                        <Icon glyph={Glyph::Waves} size={18} />
                    </div>
                    <div>
                        <h3 class="text-sm font-semibold text-white">{format!("Float #{}", float.id)}</h3>
                        <p class="text-xs text-zinc-500">{status}</p>
                    </div>
                </div>
                <div class={classes!("h-2", "w-2", "rounded-full", dot)} />
            </div>
            <div class="space-y-2">
                {detail(Glyph::MapPin, float.region.to_string())}
                {detail(Glyph::Battery, format!("Battery: {}%", float.battery_pct))}
                {detail(Glyph::Calendar, format!("Last update: {}", float.last_update))}
            </div>
        </GlassPanel>
    }
}

fn detail(glyph: Glyph, text: String) -> Html {
    html! {
        <div class="flex items-center gap-2 text-xs text-zinc-400">
            <Icon {glyph} size={12} />
            <span>{text}</span>
        </div>
    }
}

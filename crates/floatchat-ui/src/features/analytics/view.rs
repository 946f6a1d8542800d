use crate::components::atoms::{ActionButton, ButtonTone, GlassPanel, Icon, PageHeader};
use crate::core::fixtures::{ANALYTICS_PANELS, ChartPlaceholder};
use crate::core::glyph::Glyph;
use yew::prelude::*;

#[function_component(AnalyticsPage)]
pub(crate) fn analytics_page() -> Html {
    html! {
        <div class="p-6 md:p-8 space-y-6">
            <PageHeader title="Advanced Analytics" subtitle="Deep statistical analysis and visualizations">
                <ActionButton label="Export Report" glyph={Some(Glyph::Download)} tone={ButtonTone::Primary} />
            </PageHeader>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {for ANALYTICS_PANELS.iter().map(|panel| html! {
                    <AnalyticsCard key={panel.title} panel={*panel} />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AnalyticsCardProps {
    panel: ChartPlaceholder,
}

#[function_component(AnalyticsCard)]
fn analytics_card(props: &AnalyticsCardProps) -> Html {
    let panel = props.panel;
    html! {
        <GlassPanel hover_effect={true} class="rounded-2xl p-6">
            <div class="flex items-start justify-between mb-6">
                <div>
                    <h3 class="text-base font-semibold text-white mb-1">{panel.title}</h3>
                    <p class="text-sm text-zinc-500">{panel.subtitle}</p>
                </div>
                <div class="p-2 rounded-lg bg-white/[0.05] text-zinc-400 group-hover:text-zinc-200 transition-colors">
                    <Icon glyph={panel.glyph} size={18} />
                </div>
            </div>
            <div class="h-64 rounded-xl bg-white/[0.02] border border-white/[0.04] flex items-center justify-center">
                <div class="text-center">
                    <Icon glyph={Glyph::Activity} size={32} class="text-zinc-700 mx-auto mb-2" />
                    <p class="text-zinc-600 text-sm">{"Chart visualization"}</p>
                </div>
            </div>
        </GlassPanel>
    }
}

use crate::components::atoms::Icon;
use crate::core::fixtures::ChartPlaceholder;
use crate::core::glyph::Glyph;
use crate::core::motion::{Motion, MotionPreset};
use yew::prelude::*;

const BADGE: &str = "p-3 rounded-2xl bg-gradient-to-br text-white shadow-lg";

#[derive(Properties, PartialEq)]
pub(crate) struct ChartCardProps {
    pub chart: ChartPlaceholder,
}

#[function_component(ChartCard)]
pub(crate) fn chart_card(props: &ChartCardProps) -> Html {
    let chart = props.chart;
    let motion = Motion::new(MotionPreset::FadeUp).delay(chart.delay_ms);
    let badge = classes!(
        BADGE,
        chart.gradient,
    );
    html! {
        <div
            class="glass-panel rounded-3xl p-8 hover:shadow-2xl transition-all group cursor-pointer hover-lift"
            style={motion.style()}
        >
            <div class="flex items-start justify-between mb-8">
                <div>
                    <h3 class="text-xl font-bold text-foreground mb-2">{chart.title}</h3>
                    <p class="text-sm text-muted-foreground">{chart.subtitle}</p>
                </div>
                <div class={badge}>
                    <Icon glyph={chart.glyph} size={20} />
                </div>
            </div>
            <div class="h-64 rounded-2xl bg-gradient-to-br from-white/5 to-white/[0.02] border border-white/10 flex items-center justify-center relative overflow-hidden group-hover:border-white/20 transition-all">
                <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-secondary/10 opacity-0 group-hover:opacity-100 transition-opacity" />
                <div class="text-center relative z-10">
                    <Icon glyph={Glyph::Activity} size={48} class="text-muted-foreground/30 mx-auto mb-4" />
                    <p class="text-muted-foreground text-sm font-medium">{"Chart visualization"}</p>
                    <p class="text-muted-foreground/50 text-xs mt-2">{"Coming soon with real data"}</p>
                </div>
            </div>
        </div>
    }
}

use crate::components::atoms::{Icon, StatCard};
use crate::core::fixtures::{DASHBOARD_CHARTS, KPIS};
use crate::core::glyph::Glyph;
use crate::core::motion::{Easing, Motion, MotionPreset};
use yew::prelude::*;

use super::activity::RecentMeasurements;
use super::chart_card::ChartCard;

const SPARKLE_TURN_MS: u32 = 20_000;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let header = Motion::new(MotionPreset::FadeDown);
    let sparkle = Motion::new(MotionPreset::Spin)
        .duration(SPARKLE_TURN_MS)
        .easing(Easing::Linear)
        .repeating();

    html! {
        <div class="p-8 md:p-12 space-y-10">
            <div class="flex items-center justify-between" style={header.style()}>
                <div class="space-y-2">
                    <div class="flex items-center gap-3">
                        <h1 class="text-4xl md:text-5xl font-bold text-gradient">{"Ocean Analytics"}</h1>
                        <div style={sparkle.style()}>
                            <Icon glyph={Glyph::Sparkles} size={32} class="text-primary" />
                        </div>
                    </div>
                    <p class="text-muted-foreground text-lg flex items-center gap-2">
                        <Icon glyph={Glyph::Zap} size={18} class="text-yellow-500" />
                        {"Real-time insights from 800,000+ Argo ocean profiles"}
                    </p>
                </div>
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class="flex items-center gap-2 px-6 py-3.5 rounded-2xl glass-panel hover:bg-white/10 transition-all text-sm font-semibold press-shrink"
                    >
                        <Icon glyph={Glyph::RefreshCw} size={18} />
                        <span class="hidden md:inline">{"Refresh"}</span>
                    </button>
                    <button
                        type="button"
                        class="flex items-center gap-2 px-6 py-3.5 rounded-2xl bg-gradient-to-r from-primary to-secondary text-white font-semibold shadow-2xl glow-primary transition-all text-sm press-shrink"
                    >
                        <Icon glyph={Glyph::Download} size={18} />
                        <span class="hidden md:inline">{"Export Data"}</span>
                    </button>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {for KPIS.iter().map(|kpi| html! {
                    <StatCard
                        key={kpi.title}
                        title={kpi.title}
                        value={kpi.value}
                        change={kpi.change.map(AttrValue::from)}
                        trend={kpi.trend}
                        glyph={Some(kpi.glyph)}
                        delay_ms={kpi.delay_ms}
                    />
                })}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {for DASHBOARD_CHARTS.iter().map(|chart| html! {
                    <ChartCard key={chart.title} chart={*chart} />
                })}
            </div>

            <RecentMeasurements />
        </div>
    }
}

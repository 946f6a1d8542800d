use crate::components::atoms::Icon;
use crate::core::fixtures::{Measurement, RECENT_MEASUREMENTS};
use crate::core::glyph::Glyph;
use crate::core::motion::{Motion, MotionPreset};
use yew::prelude::*;

const PANEL_DELAY_MS: u32 = 600;
const FEED_START_MS: u32 = 700;
const FEED_STEP_MS: u32 = 50;

#[function_component(RecentMeasurements)]
pub(crate) fn recent_measurements() -> Html {
    let panel = Motion::new(MotionPreset::FadeUp).delay(PANEL_DELAY_MS);
    html! {
        <div class="glass-panel rounded-3xl p-8" style={panel.style()}>
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h3 class="text-2xl font-bold text-foreground mb-1">{"Recent Measurements"}</h3>
                    <p class="text-sm text-muted-foreground">{"Live updates from ocean floats"}</p>
                </div>
                <button type="button" class="text-sm text-primary hover:text-secondary transition-colors font-semibold flex items-center gap-1">
                    {"View All"}
                    <Icon glyph={Glyph::ArrowUpRight} size={16} />
                </button>
            </div>
            <div class="space-y-4">
                {for RECENT_MEASUREMENTS.iter().enumerate().map(|(index, item)| html! {
                    <ActivityItem key={item.float_id} item={*item} {index} />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityItemProps {
    item: Measurement,
    /// Position in the feed; drives the stagger.
    index: usize,
}

#[function_component(ActivityItem)]
fn activity_item(props: &ActivityItemProps) -> Html {
    let item = props.item;
    let motion = Motion::new(MotionPreset::SlideRight)
        .delay(FEED_START_MS)
        .staggered(FEED_STEP_MS, props.index);
    html! {
        <div
            class="flex items-center gap-4 p-5 rounded-2xl hover:bg-white/5 transition-all cursor-pointer group border border-transparent hover:border-white/10"
            style={motion.style()}
        >
            <div class="relative">
                <div class="absolute inset-0 bg-gradient-to-br from-primary to-secondary rounded-full blur-md opacity-50 group-hover:opacity-75 transition-opacity" />
                <div class="relative h-12 w-12 rounded-full bg-gradient-to-br from-primary to-secondary flex items-center justify-center shadow-lg">
                    <Icon glyph={Glyph::Waves} size={20} class="text-white" />
                </div>
            </div>
            <div class="flex-1 min-w-0">
                <p class="text-sm font-bold text-foreground group-hover:text-primary transition-colors">
                    {format!("New profile from Float #{}", item.float_id)}
                </p>
                <p class="text-xs text-muted-foreground mt-1">{format!("{} • {}", item.location, item.time)}</p>
            </div>
            <div class="text-right">
                <p class="text-lg font-bold text-gradient">{item.temperature}</p>
                <p class="text-xs text-muted-foreground">{"Temperature"}</p>
            </div>
            <Icon glyph={Glyph::ArrowUpRight} size={18} class="text-muted-foreground opacity-0 group-hover:opacity-100 transition-opacity" />
        </div>
    }
}

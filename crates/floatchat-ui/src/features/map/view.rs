use crate::components::atoms::{ActionButton, ButtonTone, Icon, IconButton, PageHeader};
use crate::core::glyph::Glyph;
use yew::prelude::*;

const ZOOM_CONTROL: &str =
    "p-3 rounded-lg bg-white/[0.1] backdrop-blur-md border border-white/[0.1] hover:bg-white/[0.15] transition-colors";

#[function_component(MapPage)]
pub(crate) fn map_page() -> Html {
    html! {
        <div class="h-full flex flex-col">
            <div class="p-6 border-b border-white/[0.08] bg-black/20 backdrop-blur-sm">
                <PageHeader title="Interactive Ocean Map" subtitle="Visualize float locations and ocean data">
                    <ActionButton label="Layers" glyph={Some(Glyph::Layers)} />
                    <ActionButton label="Filters" glyph={Some(Glyph::Filter)} />
                    <ActionButton label="Export" glyph={Some(Glyph::Download)} tone={ButtonTone::Primary} />
                </PageHeader>
            </div>

            <div class="flex-1 relative bg-zinc-950">
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="text-center">
                        <Icon glyph={Glyph::Map} size={64} class="text-zinc-700 mx-auto mb-4" />
                        <h3 class="text-xl font-semibold text-zinc-600 mb-2">{"Interactive Map"}</h3>
                        <p class="text-zinc-700 text-sm max-w-md">
                            {"Map rendering will be added here"}
                        </p>
                        <p class="text-zinc-800 text-xs mt-2">
                            {"Features: Float locations, temperature heatmaps, ocean currents"}
                        </p>
                    </div>
                </div>
                <div class="absolute top-4 right-4 flex flex-col gap-2">
                    <IconButton aria_label="Zoom in" glyph={Glyph::ZoomIn} size={18} class={ZOOM_CONTROL} icon_class="text-white" />
                    <IconButton aria_label="Zoom out" glyph={Glyph::ZoomOut} size={18} class={ZOOM_CONTROL} icon_class="text-white" />
                </div>
            </div>
        </div>
    }
}

use crate::app::Route;
use crate::components::atoms::{GlassPanel, Icon};
use crate::core::glyph::Glyph;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <div class="h-full flex items-center justify-center p-8">
            <GlassPanel class="rounded-3xl p-10 max-w-md text-center space-y-4">
                <Icon glyph={Glyph::Waves} size={48} class="text-zinc-600 mx-auto" />
                <h1 class="text-2xl font-bold text-white">{"Uncharted waters"}</h1>
                <p class="text-sm text-zinc-400">{"This page does not exist."}</p>
                <Link<Route> to={Route::Dashboard} classes={classes!("inline-block", "text-sm", "font-semibold", "text-primary", "hover:text-secondary")}>
                    {"Back to the dashboard"}
                </Link<Route>>
            </GlassPanel>
        </div>
    }
}

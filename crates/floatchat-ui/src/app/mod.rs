use crate::components::shell::AppShell;
use crate::features::analytics::AnalyticsPage;
use crate::features::chat::ChatPage;
use crate::features::dashboard::DashboardPage;
use crate::features::explorer::ExplorerPage;
use crate::features::floats::FloatsPage;
use crate::features::map::MapPage;
use crate::features::not_found::NotFoundPage;
use crate::features::reports::ReportsPage;
use crate::features::settings::SettingsPage;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod routes;

#[function_component(FloatChatApp)]
pub(crate) fn floatchat_app() -> Html {
    let config = use_memo(|_| config::load().map_err(|err| err.to_string()), ());
    let render = use_memo(|_| Callback::from(|path: String| render_path(&path)), ());

    match &*config {
        Ok(config) => html! {
            <BrowserRouter>
                <AppShell config={config.clone()} render={(*render).clone()} />
            </BrowserRouter>
        },
        Err(message) => html! {
            <div class="flex h-screen w-full items-center justify-center bg-background p-8">
                <div class="glass-panel rounded-2xl p-8 max-w-lg space-y-2">
                    <h1 class="text-xl font-bold text-white">{"FloatChat could not start"}</h1>
                    <p class="text-sm text-zinc-400">{message.clone()}</p>
                </div>
            </div>
        },
    }
}

/// Page for a route path; unknown paths render the not-found page.
fn render_path(path: &str) -> Html {
    switch(Route::recognize(path).unwrap_or(Route::NotFound))
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Chat => html! { <ChatPage /> },
        Route::ChatSession { session } => {
            html! { <ChatPage session={Some(AttrValue::from(session))} /> }
        }
        Route::Map => html! { <MapPage /> },
        Route::Explorer => html! { <ExplorerPage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::Floats => html! { <FloatsPage /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<FloatChatApp>::with_root(root).render();
    } else {
        yew::Renderer::<FloatChatApp>::new().render();
    }
}

use crate::components::atoms::{ActionButton, ButtonTone, GlassPanel, Icon, PageHeader};
use crate::core::fixtures::{ProfileRow, explorer_rows};
use crate::core::glyph::Glyph;
use crate::core::style::PanelVariant;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COLUMNS: [&str; 6] = ["Float ID", "Location", "Temperature", "Salinity", "Depth", "Date"];

/// Case-insensitive match on float id or location.
fn matches(row: &ProfileRow, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || row.float_id.contains(&query)
        || row.location.to_lowercase().contains(&query)
}

#[function_component(ExplorerPage)]
pub(crate) fn explorer_page() -> Html {
    let rows = use_memo(|_| explorer_rows(), ());
    let query = use_state(String::new);

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let visible: Vec<&ProfileRow> = rows
        .iter()
        .filter(|row| matches(row, query.as_str()))
        .collect();
    let body = if visible.is_empty() {
        html! {
            <tr>
                <td colspan="6" class="px-6 py-8 text-center text-sm text-zinc-500">
                    {"No profiles match this search"}
                </td>
            </tr>
        }
    } else {
        html! {
            {for visible.into_iter().map(|row| html! {
                <tr key={row.float_id.clone()} class="hover:bg-white/[0.03] transition-colors cursor-pointer">
                    <td class="px-6 py-4 text-sm font-medium text-zinc-300">{row.float_id.clone()}</td>
                    <td class="px-6 py-4 text-sm text-zinc-400">{row.location}</td>
                    <td class="px-6 py-4 text-sm text-zinc-400">{row.temperature.clone()}</td>
                    <td class="px-6 py-4 text-sm text-zinc-400">{row.salinity.clone()}</td>
                    <td class="px-6 py-4 text-sm text-zinc-400">{row.depth.clone()}</td>
                    <td class="px-6 py-4 text-sm text-zinc-400">{row.date.clone()}</td>
                </tr>
            })}
        }
    };

    html! {
        <div class="h-full flex flex-col">
            <div class="p-6 border-b border-white/[0.08] bg-black/20 backdrop-blur-sm space-y-4">
                <PageHeader title="Data Explorer" subtitle="Search and filter ocean profile data">
                    <ActionButton label="Export Selected" glyph={Some(Glyph::Download)} tone={ButtonTone::Primary} />
                </PageHeader>
                <div class="flex items-center gap-3">
                    <div class="flex-1 flex items-center gap-2 px-4 py-2.5 rounded-xl border border-white/[0.08] bg-white/[0.02] hover:border-white/[0.12] transition-colors">
                        <Icon glyph={Glyph::Search} size={18} class="text-zinc-500" />
                        <input
                            type="text"
                            aria-label="Search profiles"
                            value={(*query).clone()}
                            oninput={on_input}
                            placeholder="Search by float ID, region, or parameters..."
                            class="bg-transparent border-none outline-none text-sm text-zinc-200 placeholder:text-zinc-600 w-full"
                        />
                    </div>
                    <ActionButton label="Filters" glyph={Some(Glyph::Filter)} trailing={Some(Glyph::ChevronDown)} />
                    <ActionButton label="Date Range" glyph={Some(Glyph::Calendar)} trailing={Some(Glyph::ChevronDown)} />
                </div>
            </div>

            <div class="flex-1 overflow-auto p-6">
                <GlassPanel variant={PanelVariant::Subtle} class="rounded-2xl overflow-hidden">
                    <table class="w-full">
                        <thead class="bg-white/[0.05] border-b border-white/[0.08]">
                            <tr>
                                {for COLUMNS.iter().map(|column| html! {
                                    <th class="text-left px-6 py-4 text-xs font-semibold text-zinc-400 uppercase tracking-wider">
                                        {*column}
                                    </th>
                                })}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-white/[0.04]">
                            {body}
                        </tbody>
                    </table>
                </GlassPanel>
            </div>
        </div>
    }
}

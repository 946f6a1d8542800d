use crate::app::Route;
use crate::components::atoms::{Icon, IconButton};
use crate::core::fixtures::{CHAT_HISTORY, ChatHistoryItem};
use crate::core::glyph::Glyph;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ChatHistoryProps {
    /// Slug of the open conversation.
    #[prop_or_default]
    pub selected: Option<&'static str>,
}

/// Previous conversations beside the chat area.
#[function_component(ChatHistory)]
pub(crate) fn chat_history(props: &ChatHistoryProps) -> Html {
    html! {
        <div class="w-64 border-r border-white/[0.08] bg-black/10 backdrop-blur-sm p-4 space-y-4 hidden lg:block">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-semibold text-white">{"Chat History"}</h3>
                <Link<Route> to={Route::Chat} classes={classes!("p-1.5", "hover:bg-white/10", "rounded-lg", "transition-colors")}>
                    <Icon glyph={Glyph::Plus} size={16} class="text-zinc-400" title="New chat" />
                </Link<Route>>
            </div>
            <div class="space-y-2">
                {for CHAT_HISTORY.iter().map(|item| html! {
                    <HistoryEntry
                        key={item.slug}
                        item={*item}
                        selected={props.selected == Some(item.slug)}
                    />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HistoryEntryProps {
    item: ChatHistoryItem,
    selected: bool,
}

const ENTRY_BASE: &str = "block w-full text-left p-3 rounded-lg border transition-colors group";

#[function_component(HistoryEntry)]
fn history_entry(props: &HistoryEntryProps) -> Html {
    let item = props.item;
    let classes = classes!(
        ENTRY_BASE,
        if props.selected {
            "border-indigo-400/40 bg-white/[0.08]"
        } else {
            "border-white/[0.06] bg-white/[0.02] hover:bg-white/[0.06]"
        },
    );
    html! {
        <Link<Route> to={Route::ChatSession { session: item.slug.to_string() }} classes={classes}>
            <div class="flex items-start justify-between gap-2">
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium text-zinc-300 group-hover:text-white transition-colors truncate">
                        {item.title}
                    </p>
                    <p class="text-xs text-zinc-600 mt-1 flex items-center gap-1">
                        <Icon glyph={Glyph::Clock} size={10} />
                        {item.time}
                    </p>
                </div>
                <IconButton
                    aria_label="Delete conversation"
                    glyph={Glyph::Trash2}
                    size={12}
                    class="opacity-0 group-hover:opacity-100 p-1 hover:bg-white/10 rounded transition-all"
                    icon_class="text-zinc-500"
                />
            </div>
        </Link<Route>>
    }
}

use crate::components::atoms::{ActionButton, ButtonTone, Icon, IconButton};
use crate::core::chat::ChatSession;
use crate::core::fixtures::{CHAT_SUGGESTIONS, Suggestion, chat_history_item};
use crate::core::glyph::Glyph;
use crate::core::motion::{Motion, MotionPreset};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::history::ChatHistory;

const SUGGESTION_START_MS: u32 = 400;
const SUGGESTION_STEP_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub(crate) struct ChatPageProps {
    /// Conversation slug from `/chat/:session`.
    #[prop_or_default]
    pub session: Option<AttrValue>,
}

#[function_component(ChatPage)]
pub(crate) fn chat_page(props: &ChatPageProps) -> Html {
    let chat = use_state(ChatSession::default);
    let selected = props
        .session
        .as_deref()
        .and_then(chat_history_item)
        .map(|item| item.slug);

    let on_input = {
        let chat = chat.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*chat).clone();
                next.draft.set_text(area.value());
                chat.set(next);
            }
        })
    };
    let on_suggestion = {
        let chat = chat.clone();
        Callback::from(move |text: &'static str| {
            let mut next = (*chat).clone();
            next.draft.apply_suggestion(text);
            chat.set(next);
        })
    };

    let body = if chat.is_empty() {
        html! {
            <div class="flex-1 flex items-center justify-center p-6">
                <div class="w-full max-w-3xl space-y-8">
                    <Hero />
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                        {for CHAT_SUGGESTIONS.iter().enumerate().map(|(index, suggestion)| html! {
                            <SuggestionChip
                                key={suggestion.text}
                                suggestion={*suggestion}
                                {index}
                                on_pick={on_suggestion.clone()}
                            />
                        })}
                    </div>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="flex-1 overflow-y-auto p-6 space-y-4">
                {for chat.messages.iter().map(|message| html! {
                    <p class="text-sm text-zinc-300">{message.text.clone()}</p>
                })}
            </div>
        }
    };

    html! {
        <div class="h-full flex">
            <ChatHistory {selected} />
            <div class="flex-1 flex flex-col">
                {body}
                <div class="p-6 border-t border-white/[0.08] bg-black/20 backdrop-blur-sm">
                    <div class="max-w-4xl mx-auto">
                        <div class="relative rounded-2xl border border-white/[0.1] bg-white/[0.03] backdrop-blur-xl p-1.5 shadow-2xl shadow-black/20 hover:border-white/[0.15] transition-colors">
                            <textarea
                                value={chat.draft.text().to_string()}
                                oninput={on_input}
                                aria-label="Message"
                                placeholder="What would you like to know about the ocean?"
                                class="w-full bg-transparent border-none outline-none text-white placeholder:text-zinc-500 resize-none px-4 py-3 text-base leading-relaxed min-h-[80px]"
                            />
                            <div class="flex items-center justify-between px-2">
                                <IconButton
                                    aria_label="Attach dataset"
                                    glyph={Glyph::Database}
                                    size={18}
                                    class="p-2 rounded-lg hover:bg-white/[0.05] text-zinc-400 hover:text-zinc-200 transition-colors"
                                />
                                <SendButton enabled={chat.draft.can_send()} />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let pill = Motion::new(MotionPreset::ScaleIn).delay(100).duration(500);
    let heading = Motion::new(MotionPreset::FadeUp).delay(200);
    let blurb = Motion::new(MotionPreset::Fade).delay(300);
    html! {
        <div class="text-center space-y-4">
            <div
                class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-white/[0.08] bg-white/[0.02] backdrop-blur-xl"
                style={pill.style()}
            >
                <Icon glyph={Glyph::Sparkles} size={16} class="text-indigo-400" />
                <span class="text-sm text-zinc-300 font-medium">{"AI-Powered Ocean Intelligence"}</span>
            </div>
            <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight text-white" style={heading.style()}>
                {"Ask Anything About"}
                <br />
                <span class="bg-gradient-to-r from-indigo-400 via-cyan-400 to-blue-400 bg-clip-text text-transparent">
                    {"The Ocean"}
                </span>
            </h1>
            <p class="text-zinc-400 text-lg max-w-2xl mx-auto" style={blurb.style()}>
                {"Explore 800,000+ Argo profiles with natural language. Get instant insights on temperature, salinity, and ocean dynamics."}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SuggestionChipProps {
    suggestion: Suggestion,
    index: usize,
    on_pick: Callback<&'static str>,
}

#[function_component(SuggestionChip)]
fn suggestion_chip(props: &SuggestionChipProps) -> Html {
    let motion = Motion::new(MotionPreset::FadeUp)
        .delay(SUGGESTION_START_MS)
        .staggered(SUGGESTION_STEP_MS, props.index);
    let text = props.suggestion.text;
    let onclick = props.on_pick.reform(move |_: MouseEvent| text);
    html! {
        <button
            type="button"
            class="flex items-center gap-3 p-4 text-left rounded-xl border border-white/[0.06] bg-white/[0.02] hover:bg-white/[0.06] hover:border-white/[0.12] transition-all group"
            style={motion.style()}
            {onclick}
        >
            <div class="p-2.5 rounded-lg bg-white/[0.04] text-zinc-400 group-hover:text-zinc-200 transition-colors">
                <Icon glyph={props.suggestion.glyph} size={16} />
            </div>
            <span class="text-sm font-medium text-zinc-400 group-hover:text-zinc-200 transition-colors">
                {text}
            </span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct SendButtonProps {
    enabled: bool,
}

/// Send stays inert; no backend answers yet.
#[function_component(SendButton)]
fn send_button(props: &SendButtonProps) -> Html {
    let class = if props.enabled {
        "hover:scale-[1.02] press-shrink"
    } else {
        "opacity-50 cursor-not-allowed"
    };
    html! {
        <ActionButton
            label="Send"
            trailing={Some(Glyph::Send)}
            tone={ButtonTone::Primary}
            disabled={!props.enabled}
            {class}
        />
    }
}

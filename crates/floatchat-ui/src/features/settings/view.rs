use crate::components::atoms::{GlassPanel, Icon, PageHeader};
use crate::core::fixtures::SETTINGS_SECTIONS;
use yew::prelude::*;

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    html! {
        <div class="p-6 md:p-8 space-y-6 max-w-4xl">
            <PageHeader title="Settings" subtitle="Manage your preferences and account" />
            <div class="space-y-4">
                {for SETTINGS_SECTIONS.iter().map(|section| html! {
                    <GlassPanel key={section.title} hover_effect={true} class="rounded-2xl p-5">
                        <div class="flex items-center gap-4">
                            <div class="p-3 rounded-lg bg-white/[0.05] text-zinc-400 group-hover:text-zinc-200 transition-colors">
                                <Icon glyph={section.glyph} size={18} />
                            </div>
                            <div class="flex-1">
                                <h3 class="text-sm font-semibold text-white group-hover:text-indigo-300 transition-colors">
                                    {section.title}
                                </h3>
                                <p class="text-xs text-zinc-500 mt-0.5">{section.description}</p>
                            </div>
                            <div class="text-zinc-600 group-hover:text-zinc-400 transition-colors">{"→"}</div>
                        </div>
                    </GlassPanel>
                })}
            </div>
        </div>
    }
}

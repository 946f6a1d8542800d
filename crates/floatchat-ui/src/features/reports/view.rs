use crate::components::atoms::{ActionButton, ButtonTone, GlassPanel, Icon, PageHeader};
use crate::core::fixtures::REPORT_TEMPLATES;
use crate::core::glyph::Glyph;
use yew::prelude::*;

#[function_component(ReportsPage)]
pub(crate) fn reports_page() -> Html {
    html! {
        <div class="p-6 md:p-8 space-y-6">
            <PageHeader title="Reports" subtitle="Generate and manage analysis reports">
                <ActionButton label="New Report" glyph={Some(Glyph::Plus)} tone={ButtonTone::Primary} />
            </PageHeader>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {for REPORT_TEMPLATES.iter().map(|report| html! {
                    <GlassPanel key={report.name} hover_effect={true} class="rounded-2xl p-5 hover:scale-[1.02]">
                        <div class="flex items-start gap-3 mb-3">
                            <div class="p-2.5 rounded-lg bg-indigo-500/10 text-indigo-400">
                                <Icon glyph={Glyph::FileText} size={18} />
                            </div>
                            <div class="flex-1">
                                <h3 class="text-sm font-semibold text-white group-hover:text-indigo-300 transition-colors">
                                    {report.name}
                                </h3>
                                <p class="text-xs text-zinc-500 mt-1">{report.description}</p>
                            </div>
                        </div>
                        <ActionButton
                            label="Generate"
                            glyph={Some(Glyph::Download)}
                            class="w-full mt-3 justify-center text-xs"
                        />
                    </GlassPanel>
                })}
            </div>
        </div>
    }
}

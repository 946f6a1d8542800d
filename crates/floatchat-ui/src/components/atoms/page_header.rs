use yew::prelude::*;

/// Props for the title row at the top of a page.
#[derive(Properties, PartialEq)]
pub(crate) struct PageHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Actions aligned to the right.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHeader)]
pub(crate) fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="flex items-center justify-between gap-4">
            <div>
                <h1 class="text-2xl md:text-3xl font-bold text-white">{props.title.clone()}</h1>
                <p class="text-sm text-zinc-400 mt-1">{props.subtitle.clone()}</p>
            </div>
            {if props.children.is_empty() {
                html! {}
            } else {
                html! { <div class="flex items-center gap-2">{for props.children.iter()}</div> }
            }}
        </div>
    }
}

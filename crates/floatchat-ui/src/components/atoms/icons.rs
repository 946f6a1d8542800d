//! Inline SVG glyphs (lucide outlines) for every [`Glyph`].

use crate::core::glyph::Glyph;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    pub glyph: Glyph,
    #[prop_or(20)]
    pub size: u16,
    #[prop_or(AttrValue::Static("2"))]
    pub stroke_width: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(Icon)]
pub(crate) fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={props.stroke_width.clone()}
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {glyph_body(props.glyph)}
        </svg>
    }
}

#[allow(clippy::too_many_lines)]
fn glyph_body(glyph: Glyph) -> Html {
    match glyph {
        Glyph::Activity => html! { <path d="M22 12h-4l-3 9L9 3l-3 9H2" /> },
        Glyph::ArrowUpRight => html! { <path d="M7 7h10v10M7 17L17 7" /> },
        Glyph::BarChart3 => html! { <path d="M3 3v18h18M18 17V9m-5 8V5m-5 12v-3" /> },
        Glyph::Battery => html! { <>
            <rect x="2" y="7" width="16" height="10" rx="2" ry="2" />
            <path d="M22 11v2" />
        </> },
        Glyph::Bell => html! { <>
            <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
            <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
        </> },
        Glyph::Calendar => html! { <>
            <rect x="3" y="4" width="18" height="18" rx="2" />
            <path d="M16 2v4M8 2v4M3 10h18" />
        </> },
        Glyph::ChevronDown => html! { <path d="m6 9l6 6l6-6" /> },
        Glyph::Clock => html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="M12 6v6l4 2" />
        </> },
        Glyph::Database => html! { <>
            <ellipse cx="12" cy="5" rx="9" ry="3" />
            <path d="M3 5v14a9 3 0 0 0 18 0V5" />
            <path d="M3 12a9 3 0 0 0 18 0" />
        </> },
        Glyph::Download => html! { <>
            <path d="M12 15V3m9 12v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <path d="m7 10l5 5l5-5" />
        </> },
        Glyph::Droplets => html! { <>
            <path d="M7 16.3c2.2 0 4-1.83 4-4.05c0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05" />
            <path d="M12.56 6.6A11 11 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a7 7 0 0 1-11.91 4.97" />
        </> },
        Glyph::FileText => html! { <>
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4M10 9H8m8 4H8m8 4H8" />
        </> },
        Glyph::Filter => html! { <path d="M22 3H2l8 9.46V19l4 2v-8.54z" /> },
        Glyph::Globe => html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="M12 2a14.5 14.5 0 0 0 0 20a14.5 14.5 0 0 0 0-20M2 12h20" />
        </> },
        Glyph::Globe2 => html! { <>
            <path d="M21.54 15H17a2 2 0 0 0-2 2v4.54M7 3.34V5a3 3 0 0 0 3 3a2 2 0 0 1 2 2c0 1.1.9 2 2 2a2 2 0 0 0 2-2c0-1.1.9-2 2-2h3.17M11 21.95V18a2 2 0 0 0-2-2a2 2 0 0 1-2-2v-1a2 2 0 0 0-2-2H2.05" />
            <circle cx="12" cy="12" r="10" />
        </> },
        Glyph::LayoutDashboard => html! { <>
            <rect x="3" y="3" width="7" height="9" rx="1" />
            <rect x="14" y="3" width="7" height="5" rx="1" />
            <rect x="14" y="12" width="7" height="9" rx="1" />
            <rect x="3" y="16" width="7" height="5" rx="1" />
        </> },
        Glyph::Layers => html! { <>
            <path d="M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83z" />
            <path d="m22 17.65l-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65m20-5l-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" />
        </> },
        Glyph::Lock => html! { <>
            <rect x="3" y="11" width="18" height="11" rx="2" ry="2" />
            <path d="M7 11V7a5 5 0 0 1 10 0v4" />
        </> },
        Glyph::Map => html! { <path d="M14.106 5.553a2 2 0 0 0 1.788 0l3.659-1.83A1 1 0 0 1 21 4.619v12.764a1 1 0 0 1-.553.894l-4.553 2.277a2 2 0 0 1-1.788 0l-4.212-2.106a2 2 0 0 0-1.788 0l-3.659 1.83A1 1 0 0 1 3 19.381V6.618a1 1 0 0 1 .553-.894l4.553-2.277a2 2 0 0 1 1.788 0zM15 5.764v15M9 3.236v15" /> },
        Glyph::MapPin => html! { <>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0" />
            <circle cx="12" cy="10" r="3" />
        </> },
        Glyph::Menu => html! { <path d="M4 5h16M4 12h16M4 19h16" /> },
        Glyph::MessageSquare => html! { <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" /> },
        Glyph::Palette => html! { <>
            <circle cx="13.5" cy="6.5" r="0.5" />
            <circle cx="17.5" cy="10.5" r="0.5" />
            <circle cx="8.5" cy="7.5" r="0.5" />
            <circle cx="6.5" cy="12.5" r="0.5" />
            <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688c0-.437-.18-.835-.437-1.125c-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2" />
        </> },
        Glyph::PieChart => html! { <>
            <path d="M21.21 15.89A10 10 0 1 1 8 2.83" />
            <path d="M22 12A10 10 0 0 0 12 2v10z" />
        </> },
        Glyph::Plus => html! { <path d="M5 12h14m-7-7v14" /> },
        Glyph::RefreshCw => html! { <>
            <path d="M3 12a9 9 0 0 1 9-9a9.75 9.75 0 0 1 6.74 2.74L21 8" />
            <path d="M21 3v5h-5m5 4a9 9 0 0 1-9 9a9.75 9.75 0 0 1-6.74-2.74L3 16" />
            <path d="M8 16H3v5" />
        </> },
        Glyph::Search => html! { <>
            <path d="m21 21l-4.34-4.34" />
            <circle cx="11" cy="11" r="8" />
        </> },
        Glyph::Send => html! { <>
            <path d="m22 2l-7 20l-4-9l-9-4z" />
            <path d="M22 2L11 13" />
        </> },
        Glyph::Settings => html! { <>
            <path d="M9.671 4.136a2.34 2.34 0 0 1 4.659 0a2.34 2.34 0 0 0 3.319 1.915a2.34 2.34 0 0 1 2.33 4.033a2.34 2.34 0 0 0 0 3.831a2.34 2.34 0 0 1-2.33 4.033a2.34 2.34 0 0 0-3.319 1.915a2.34 2.34 0 0 1-4.659 0a2.34 2.34 0 0 0-3.32-1.915a2.34 2.34 0 0 1-2.33-4.033a2.34 2.34 0 0 0 0-3.831A2.34 2.34 0 0 1 6.35 6.051a2.34 2.34 0 0 0 3.319-1.915" />
            <circle cx="12" cy="12" r="3" />
        </> },
        Glyph::Sparkles => html! { <>
            <path d="m12 3l-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275z" />
            <path d="M5 3v4m14 10v4M3 5h4m10 14h4" />
        </> },
        Glyph::Thermometer => html! { <path d="M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0" /> },
        Glyph::Trash2 => html! { <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2m-6 5v6m4-6v6" /> },
        Glyph::TrendingUp => html! { <>
            <path d="m22 7l-8.5 8.5l-5-5L2 17" />
            <path d="M16 7h6v6" />
        </> },
        Glyph::User => html! { <>
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </> },
        Glyph::Waves => html! { <path d="M2 6c.6.5 1.2 1 2.5 1C7 7 7 5 9.5 5c2.6 0 2.4 2 5 2c2.5 0 2.5-2 5-2c1.3 0 1.9.5 2.5 1M2 12c.6.5 1.2 1 2.5 1c2.5 0 2.5-2 5-2c2.6 0 2.4 2 5 2c2.5 0 2.5-2 5-2c1.3 0 1.9.5 2.5 1M2 18c.6.5 1.2 1 2.5 1c2.5 0 2.5-2 5-2c2.6 0 2.4 2 5 2c2.5 0 2.5-2 5-2c1.3 0 1.9.5 2.5 1" /> },
        Glyph::X => html! { <path d="M18 6L6 18M6 6l12 12" /> },
        Glyph::Zap => html! { <path d="M13 2L3 14h9l-1 8l10-12h-9z" /> },
        Glyph::ZoomIn => html! { <>
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21l-4.35-4.35M11 8v6m-3-3h6" />
        </> },
        Glyph::ZoomOut => html! { <>
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21l-4.35-4.35M8 11h6" />
        </> },
    }
}

//! Layout shell: sidebar, mobile drawer, top bar and the transition host.
//!
//! The shell owns [`ShellState`] for its own lifetime and passes the pieces
//! down as props; nothing here is global or persisted.

use crate::app::Route;
use crate::components::atoms::{Icon, IconButton};
use crate::components::transition::PageTransitionHost;
use crate::core::breakpoints::{Breakpoint, for_viewport};
use crate::core::config::{ProfileConfig, ShellConfig};
use crate::core::glyph::Glyph;
use crate::core::motion::{Easing, Motion, MotionPreset};
use crate::core::nav::{NAVIGATION, NavEntry, NavId, resolve_active, validate};
use crate::core::sidebar::{ShellAction, ShellState, SidebarState};
use crate::core::theme::css_variables;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub config: ShellConfig,
    /// Renders the page for a route path.
    pub render: Callback<String, Html>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let shell = use_reducer(ShellState::default);
    let path = use_location().map_or_else(
        || String::from("/"),
        |location| location.path().to_string(),
    );
    let active = resolve_active(&path, &NAVIGATION).map(|entry| entry.id);

    use_effect_with_deps(
        |_| {
            if let Err(err) = validate(&NAVIGATION) {
                console::warn!("navigation table is ambiguous", err.to_string());
            }
            || ()
        },
        (),
    );
    {
        let dispatcher = shell.dispatcher();
        use_effect_with_deps(
            move |path: &String| {
                console::debug!("route change", path.clone());
                dispatcher.dispatch(ShellAction::RouteChanged);
                || ()
            },
            path.clone(),
        );
    }
    {
        let dispatcher = shell.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&window(), "resize", move |_| {
                    dispatcher.dispatch(ShellAction::Viewport(current_breakpoint()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_toggle_sidebar = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ShellAction::ToggleSidebar))
    };
    let on_open_menu = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ShellAction::OpenMobileMenu))
    };
    let on_close_menu = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ShellAction::CloseMobileMenu))
    };
    let on_drawer_select = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ShellAction::NavSelected))
    };

    html! {
        <div class="flex h-screen w-full bg-background overflow-hidden relative">
            <style>{css_variables()}</style>
            <div class="absolute inset-0 animated-gradient opacity-50" />
            <div class="absolute inset-0 bg-[radial-gradient(ellipse_at_top_right,_var(--tw-gradient-stops))] from-primary/20 via-transparent to-secondary/20" />
            <div class="absolute top-20 left-20 w-72 h-72 bg-primary/20 rounded-full blur-3xl animate-pulse" />
            <div class="absolute bottom-20 right-20 w-96 h-96 bg-secondary/20 rounded-full blur-3xl animate-pulse delay-1000" />

            <Sidebar
                state={shell.sidebar}
                {active}
                config={props.config.clone()}
                on_toggle={on_toggle_sidebar}
            />
            <MobileDrawer
                open={shell.mobile_menu.is_open()}
                {active}
                config={props.config.clone()}
                on_close={on_close_menu}
                on_select={on_drawer_select}
            />

            <div class="flex-1 flex flex-col relative overflow-hidden">
                <TopBar config={props.config.clone()} on_open_menu={on_open_menu} />
                <main class="flex-1 overflow-y-auto relative">
                    <PageTransitionHost path={AttrValue::from(path)} render={props.render.clone()} />
                </main>
            </div>
        </div>
    }
}

fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_default();
    for_viewport(width)
}

const SIDEBAR_HEADER: &str = "p-6 flex items-center border-b border-white/10";

#[derive(Properties, PartialEq)]
struct SidebarProps {
    state: SidebarState,
    active: Option<NavId>,
    config: ShellConfig,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let expanded = props.state.shows_labels();
    let geometry = props.config.sidebar;
    let width = props
        .state
        .width_px(geometry.expanded_width, geometry.collapsed_width);
    let style = format!(
        "width: {width}px; transition: width 300ms {};",
        Easing::EaseOut.css()
    );
    let header = classes!(
        SIDEBAR_HEADER,
        if expanded {
            "justify-between"
        } else {
            "flex-col gap-4 justify-center"
        },
    );
    let toggle_label = if expanded {
        "Collapse sidebar"
    } else {
        "Expand sidebar"
    };

    html! {
        <aside class="h-full glass-panel relative z-40 hidden md:flex flex-col border-r border-white/20" {style}>
            <div class={header}>
                <Brand config={props.config.clone()} {expanded} />
                <IconButton
                    aria_label={toggle_label}
                    glyph={Glyph::Menu}
                    size={18}
                    class="p-2 hover:bg-white/10 rounded-xl transition-all hover:scale-110"
                    icon_class="text-muted-foreground"
                    onclick={props.on_toggle.clone()}
                />
            </div>

            <nav class="p-4 space-y-2 flex-1 overflow-y-auto">
                {for NAVIGATION.iter().map(|entry| html! {
                    <NavItem
                        key={entry.route}
                        entry={*entry}
                        active={props.active == Some(entry.id)}
                        label={props.state.label_for(entry)}
                    />
                })}
            </nav>

            <div class="p-4 border-t border-white/10">
                <div class="glass-panel-subtle rounded-2xl p-4 flex items-center gap-3 hover:bg-white/10 transition-all cursor-pointer group">
                    {avatar(&props.config.profile, true)}
                    {if expanded { profile_text(&props.config.profile) } else { html! {} }}
                </div>
            </div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
struct BrandProps {
    config: ShellConfig,
    expanded: bool,
}

#[function_component(Brand)]
fn brand(props: &BrandProps) -> Html {
    let link_classes = classes!(
        "flex",
        "items-center",
        "gap-3",
        "overflow-hidden",
        "group",
        (!props.expanded).then_some("justify-center")
    );
    let caption = Motion::new(MotionPreset::SlideRight).duration(300);
    html! {
        <Link<Route> to={Route::Dashboard} classes={link_classes}>
            <div class="relative">
                <div class="absolute inset-0 bg-gradient-to-br from-primary to-secondary rounded-2xl blur-md opacity-75 group-hover:opacity-100 transition-opacity" />
                <div class="relative h-12 w-12 rounded-2xl bg-gradient-to-br from-primary to-secondary flex items-center justify-center shadow-lg">
                    <Icon glyph={Glyph::Waves} size={24} stroke_width="2.5" class="text-white" />
                </div>
            </div>
            {if props.expanded {
                html! {
                    <div class="flex flex-col" style={caption.style()}>
                        <span class="font-bold text-xl tracking-tight text-gradient">{props.config.brand.title.clone()}</span>
                        <span class="text-xs text-muted-foreground tracking-wider uppercase font-semibold">{props.config.brand.subtitle.clone()}</span>
                    </div>
                }
            } else {
                html! {}
            }}
        </Link<Route>>
    }
}

const NAV_ROW: &str =
    "relative flex items-center gap-4 px-4 py-3.5 rounded-2xl transition-all duration-300";
const NAV_TILE: &str = "p-2 rounded-xl transition-all";
const NAV_HIGHLIGHT: &str = "absolute inset-0 bg-gradient-to-r rounded-2xl nav-highlight";

#[derive(Properties, PartialEq)]
struct NavItemProps {
    entry: NavEntry,
    active: bool,
    /// `None` renders the icon alone.
    label: Option<&'static str>,
    /// Fired before the router handles the click.
    #[prop_or_default]
    on_select: Option<Callback<MouseEvent>>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let entry = props.entry;
    let row = classes!(
        NAV_ROW,
        if props.active {
            "text-white shadow-2xl"
        } else {
            "text-muted-foreground hover:bg-white/5 hover:text-foreground"
        },
    );
    let tile = classes!(
        NAV_TILE,
        if props.active {
            "bg-white/20"
        } else {
            "bg-white/5 group-hover:bg-white/10"
        },
    );
    let highlight = classes!(
        NAV_HIGHLIGHT,
        entry.gradient.classes(),
    );
    let sparkle = Motion::new(MotionPreset::PopIn).easing(Easing::Spring);

    let onclick = props.on_select.clone();
    html! {
        <div {onclick}>
            <Link<Route> to={Route::from(entry.id)} classes={classes!("block", "relative", "group")}>
                {if props.active { html! { <div class={highlight} /> } } else { html! {} }}
                <div class={row}>
                    <div class={tile}>
                        <Icon glyph={Glyph::from(entry.icon)} size={20} />
                    </div>
                    {props.label.map(|label| html! {
                        <span class="font-semibold text-sm">{label}</span>
                    }).unwrap_or_default()}
                    {if props.active && props.label.is_some() {
                        html! {
                            <div class="ml-auto" style={sparkle.style()}>
                                <Icon glyph={Glyph::Sparkles} size={16} class="text-white/80" />
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MobileDrawerProps {
    open: bool,
    active: Option<NavId>,
    config: ShellConfig,
    on_close: Callback<MouseEvent>,
    /// Any entry tapped, including the one already shown.
    on_select: Callback<MouseEvent>,
}

#[function_component(MobileDrawer)]
fn mobile_drawer(props: &MobileDrawerProps) -> Html {
    if !props.open {
        return html! {};
    }
    let slide = Motion::new(MotionPreset::SlideRight).duration(250);
    html! {
        <div class="fixed inset-0 z-50 md:hidden">
            <div class="absolute inset-0 bg-black/60 backdrop-blur-sm" onclick={props.on_close.clone()} />
            <aside
                class="absolute inset-y-0 left-0 w-72 glass-panel flex flex-col border-r border-white/20"
                style={slide.style()}
            >
                <div class="p-6 flex items-center justify-between border-b border-white/10">
                    <Brand config={props.config.clone()} expanded={true} />
                    <IconButton
                        aria_label="Close navigation"
                        glyph={Glyph::X}
                        size={20}
                        class="p-2 hover:bg-white/10 rounded-xl transition-all"
                        onclick={props.on_close.clone()}
                    />
                </div>
                <nav class="p-4 space-y-2 flex-1 overflow-y-auto">
                    {for NAVIGATION.iter().map(|entry| html! {
                        <NavItem
                            key={entry.route}
                            entry={*entry}
                            active={props.active == Some(entry.id)}
                            label={Some(entry.label)}
                            on_select={props.on_select.clone()}
                        />
                    })}
                </nav>
            </aside>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TopBarProps {
    config: ShellConfig,
    on_open_menu: Callback<MouseEvent>,
}

#[function_component(TopBar)]
fn top_bar(props: &TopBarProps) -> Html {
    html! {
        <header class="h-20 glass-panel-subtle flex items-center justify-between px-8 z-30 shrink-0 border-b border-white/10">
            <div class="flex items-center gap-6">
                <IconButton
                    aria_label="Open navigation"
                    glyph={Glyph::Menu}
                    size={22}
                    class="md:hidden p-3 hover:bg-white/10 rounded-xl transition-all hover:scale-110"
                    onclick={props.on_open_menu.clone()}
                />
                <div class="hidden md:flex items-center gap-3 px-6 py-3.5 rounded-2xl glass-panel hover:border-primary/50 transition-all w-[500px] group">
                    <Icon glyph={Glyph::Search} size={20} class="text-muted-foreground group-hover:text-primary transition-colors" />
                    <input
                        type="text"
                        aria-label="Global search"
                        placeholder={props.config.search_placeholder.clone()}
                        class="bg-transparent border-none outline-none text-sm text-foreground placeholder:text-muted-foreground w-full font-medium"
                    />
                    <kbd class="px-3 py-1.5 text-xs font-bold text-muted-foreground bg-white/10 rounded-lg border border-white/20">
                        {"⌘K"}
                    </kbd>
                </div>
            </div>

            <div class="flex items-center gap-4">
                <IconButton
                    aria_label="Notifications"
                    glyph={Glyph::Bell}
                    class="relative p-3 hover:bg-white/10 rounded-xl transition-all hover:scale-110 group"
                    icon_class="text-muted-foreground group-hover:text-foreground transition-colors"
                >
                    <span class="absolute top-2 right-2 h-2.5 w-2.5 bg-gradient-to-br from-red-500 to-pink-500 rounded-full animate-pulse shadow-lg shadow-red-500/50" />
                </IconButton>
                <button
                    type="button"
                    aria-label="Account"
                    class="hidden md:flex items-center gap-3 px-4 py-2 hover:bg-white/10 rounded-xl transition-all hover:scale-105"
                >
                    {avatar(&props.config.profile, false)}
                </button>
            </div>
        </header>
    }
}

const AVATAR_GLOW: &str =
    "absolute inset-0 bg-gradient-to-br from-purple-500 to-pink-500 rounded-full opacity-75";
const AVATAR_DISC: &str = "relative rounded-full bg-gradient-to-br from-purple-500 to-pink-500 \
    flex items-center justify-center text-white font-bold shadow-lg";

fn avatar(profile: &ProfileConfig, large: bool) -> Html {
    let (glow, disc) = if large {
        ("blur-md group-hover:opacity-100 transition-opacity", "h-11 w-11 text-sm")
    } else {
        ("blur-sm", "h-9 w-9 text-xs")
    };
    html! {
        <div class="relative">
            <div class={classes!(AVATAR_GLOW, glow)} />
            <div class={classes!(AVATAR_DISC, disc)}>
                {profile.initials.clone()}
            </div>
        </div>
    }
}

fn profile_text(profile: &ProfileConfig) -> Html {
    html! {
        <div class="flex flex-col flex-1 min-w-0">
            <span class="text-sm font-bold text-foreground truncate">{profile.name.clone()}</span>
            <span class="text-xs text-muted-foreground flex items-center gap-1">
                <Icon glyph={Glyph::Zap} size={10} class="text-yellow-500" />
                {profile.tier.clone()}
            </span>
        </div>
    }
}
